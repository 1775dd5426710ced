/// Range a well-formed audio sample is expected to lie in.
pub const SAMPLE_MIN: f32 = -1.0;
pub const SAMPLE_MAX: f32 = 1.0;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + b * t
}

pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    (v - a) / (b - a)
}

/// Moves `value` from `[src_min, src_max]` to the same relative position in
/// `[dst_min, dst_max]`. Nothing is clamped; `src_min == src_max` divides by
/// zero.
pub fn remap(src_min: f32, src_max: f32, dst_min: f32, dst_max: f32, value: f32) -> f32 {
    lerp(dst_min, dst_max, inverse_lerp(src_min, src_max, value))
}

/// Grayscale channel value for a sample.
///
/// Samples outside `[-1, 1]` are not clamped: the scaled value is truncated
/// toward zero and only its low 8 bits are kept, so e.g. `2.0` comes out as
/// `126` rather than `255`.
pub fn intensity(sample: f32) -> u8 {
    let level = (remap(SAMPLE_MIN, SAMPLE_MAX, 0.0, 1.0, sample) * 255.0) as i32;
    level as u8
}
