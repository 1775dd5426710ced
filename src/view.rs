pub mod plot;
pub mod sdl;
#[cfg(test)]
pub mod recording;

use std::fmt;

use anyhow::Result;
use sdl2::pixels::Color;

use crate::hilbert::Coord;
use crate::map::CurveMap;

/// What a view draws from: the loaded samples and where each one goes.
///
/// There is always exactly one sample per map cell.
pub struct Info<'i> {
    samples: &'i [f32],
    map: &'i CurveMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub samples: usize,
    pub cells: usize,
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} samples cannot fill a grid of {} cells", self.samples, self.cells)
    }
}

impl std::error::Error for SizeMismatch {}

impl<'i> Info<'i> {
    pub fn new(samples: &'i [f32], map: &'i CurveMap) -> Result<Info<'i>, SizeMismatch> {
        if samples.len() != map.len() {
            return Err(SizeMismatch { samples: samples.len(), cells: map.len() });
        }
        Ok(Info { samples, map })
    }

    pub fn samples(&self) -> &'i [f32] { self.samples }

    pub fn map(&self) -> &'i CurveMap { self.map }
}

/// Something pixels can be drawn on, one frame at a time.
pub trait Surface {
    fn begin_frame(&mut self) -> Result<()> { Ok(()) }
    fn clear(&mut self, color: Color) -> Result<()>;
    fn set_pixel(&mut self, at: Coord, color: Color) -> Result<()>;
    /// Shows everything drawn since `begin_frame`.
    fn end_frame(&mut self) -> Result<()>;
    /// Checked between frames, never during one.
    fn should_close(&mut self) -> bool;
}

pub trait View {
    fn render<'i, 'j: 'i>(&mut self, info: &'j Info<'i>) -> Result<()>;
}
