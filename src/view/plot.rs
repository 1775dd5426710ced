use super::{Info, Surface, View};
use crate::remap::intensity;

use anyhow::Result;
use sdl2::pixels::Color;

/// Draws every sample as one grayscale cell at its place on the curve.
pub struct Plot<S: Surface> {
    pub view: S,
}

/// Gray level in all four channels, alpha included.
fn gray(level: u8) -> Color {
    Color::RGBA(level, level, level, level)
}

impl<S: Surface> View for Plot<S> {
    fn render<'i, 'j: 'i>(&mut self, info: &'j Info<'i>) -> Result<()> {
        let _g = hprof::enter("Plot::render");
        self.view.begin_frame()?;
        self.view.clear(Color::RGB(0, 0, 0))?;

        for (&samp, &at) in info.samples().iter().zip(info.map().iter()) {
            self.view.set_pixel(at, gray(intensity(samp)))?;
        }

        self.view.end_frame()
    }
}
