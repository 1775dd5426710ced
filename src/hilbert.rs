//! Index to grid coordinate conversion along a Hilbert curve.
//!
//! The curve covers a square grid whose side is a power of two. Walking the
//! indices in order visits every cell exactly once, and consecutive indices
//! always land on cells that share an edge.

use std::fmt;

/// Side length of a square Hilbert grid, guaranteed to be a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    Zero,
    NotPowerOfTwo(u32),
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::Zero => write!(f, "grid dimension must be positive"),
            DimensionError::NotPowerOfTwo(side) => write!(
                f,
                "grid dimension {} is not a power of two (try {})",
                side,
                side.checked_next_power_of_two()
                    .map(|up| up.to_string())
                    .unwrap_or_else(|| "a smaller value".into())
            ),
        }
    }
}

impl std::error::Error for DimensionError {}

impl Dimension {
    pub fn new(side: u32) -> Result<Dimension, DimensionError> {
        if side == 0 {
            Err(DimensionError::Zero)
        } else if !side.is_power_of_two() {
            Err(DimensionError::NotPowerOfTwo(side))
        } else {
            Ok(Dimension(side))
        }
    }

    pub fn side(self) -> u32 { self.0 }

    /// Number of cells, `side * side`.
    pub fn cells(self) -> u64 { self.0 as u64 * self.0 as u64 }

    /// Curve order, `log2(side)`.
    pub fn order(self) -> u32 { self.0.trailing_zeros() }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub fn new(x: u32, y: u32) -> Coord { Coord { x, y } }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Coord { Coord { x, y } }
}

/// Orients the partial coordinate inside a `len`-sided sub-square so the
/// quadrant selected by `(qx, qy)` joins its neighbours end to end.
pub fn rotate(len: u32, acc: &mut Coord, qx: u32, qy: u32) {
    if qy == 0 {
        if qx == 1 {
            acc.x = len - 1 - acc.x;
            acc.y = len - 1 - acc.y;
        }
        std::mem::swap(&mut acc.x, &mut acc.y);
    }
}

/// Grid cell of the `index`th step along the curve covering `dimension`.
///
/// Two bits of the index are consumed per level, lowest first; `index` must be
/// below `dimension.cells()`.
pub fn hilbert(index: u64, dimension: Dimension) -> Coord {
    debug_assert!(index < dimension.cells(), "index {} outside {} grid", index, dimension);
    let mut acc = Coord::new(0, 0);
    let mut t = index;
    let mut s = 1u32;
    while s < dimension.side() {
        let qx = ((t / 2) & 1) as u32;
        let qy = ((t ^ qx as u64) & 1) as u32;
        rotate(s, &mut acc, qx, qy);
        acc.x += s * qx;
        acc.y += s * qy;
        t /= 4;
        s *= 2;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dims() -> impl Iterator<Item = Dimension> {
        [1, 2, 4, 8, 16, 32].iter().map(|&side| Dimension::new(side).unwrap())
    }

    #[test]
    fn dimension_validation() {
        assert_eq!(Dimension::new(0), Err(DimensionError::Zero));
        assert_eq!(Dimension::new(3), Err(DimensionError::NotPowerOfTwo(3)));
        assert_eq!(Dimension::new(600), Err(DimensionError::NotPowerOfTwo(600)));
        let d = Dimension::new(512).unwrap();
        assert_eq!(d.side(), 512);
        assert_eq!(d.cells(), 262_144);
        assert_eq!(d.order(), 9);
        assert_eq!(Dimension::new(1).unwrap().order(), 0);
    }

    #[test]
    fn dimension_error_suggests_next_power() {
        let msg = DimensionError::NotPowerOfTwo(600).to_string();
        assert!(msg.contains("600"));
        assert!(msg.contains("1024"));
    }

    #[test]
    fn large_dimension_cells_do_not_overflow() {
        let d = Dimension::new(1 << 31).unwrap();
        assert_eq!(d.cells(), 1u64 << 62);
        let last = hilbert(d.cells() - 1, d);
        assert_eq!(last, Coord::new((1 << 31) - 1, 0));
    }

    #[test]
    fn origin_first() {
        for d in dims() {
            assert_eq!(hilbert(0, d), Coord::new(0, 0), "{}", d);
        }
    }

    #[test]
    fn stays_in_grid() {
        for d in dims() {
            for i in 0..d.cells() {
                let c = hilbert(i, d);
                assert!(c.x < d.side() && c.y < d.side(), "{} -> {:?} in {}", i, c, d);
            }
        }
    }

    #[test]
    fn covers_grid_once() {
        for d in dims() {
            let seen: HashSet<Coord> = (0..d.cells()).map(|i| hilbert(i, d)).collect();
            assert_eq!(seen.len() as u64, d.cells(), "{}", d);
        }
    }

    #[test]
    fn consecutive_cells_touch() {
        for d in dims() {
            for i in 1..d.cells() {
                let (a, b) = (hilbert(i - 1, d), hilbert(i, d));
                let dist = a.x.abs_diff(b.x) + a.y.abs_diff(b.y);
                assert_eq!(dist, 1, "{:?} -> {:?} at {} in {}", a, b, i, d);
            }
        }
    }

    #[test]
    fn two_by_two() {
        let d = Dimension::new(2).unwrap();
        let path: Vec<Coord> = (0..4).map(|i| hilbert(i, d)).collect();
        let want: Vec<Coord> = vec![(0, 0).into(), (0, 1).into(), (1, 1).into(), (1, 0).into()];
        assert_eq!(path, want);
    }

    #[test]
    fn four_by_four() {
        let d = Dimension::new(4).unwrap();
        let want: [(u32, u32); 16] = [
            (0, 0), (1, 0), (1, 1), (0, 1),
            (0, 2), (0, 3), (1, 3), (1, 2),
            (2, 2), (2, 3), (3, 3), (3, 2),
            (3, 1), (2, 1), (2, 0), (3, 0),
        ];
        for (i, &cell) in want.iter().enumerate() {
            assert_eq!(hilbert(i as u64, d), Coord::from(cell), "index {}", i);
        }
    }

    #[test]
    fn ends_at_far_corner() {
        for d in dims().skip(1) {
            assert_eq!(hilbert(d.cells() - 1, d), Coord::new(d.side() - 1, 0), "{}", d);
        }
    }

    #[test]
    fn rotate_cases() {
        let mut c = Coord::new(1, 2);
        rotate(4, &mut c, 0, 1);
        assert_eq!(c, Coord::new(1, 2));
        rotate(4, &mut c, 1, 1);
        assert_eq!(c, Coord::new(1, 2));
        rotate(4, &mut c, 0, 0);
        assert_eq!(c, Coord::new(2, 1));
        rotate(4, &mut c, 1, 0);
        assert_eq!(c, Coord::new(2, 1));
        let mut c = Coord::new(0, 3);
        rotate(4, &mut c, 1, 0);
        assert_eq!(c, Coord::new(0, 3));
    }
}
