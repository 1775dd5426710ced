// src/view/recording.rs

use anyhow::{bail, Result};
use sdl2::pixels::Color;

use super::Surface;
use crate::hilbert::Coord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Begin,
    Clear(Color),
    Pixel(Coord, Color),
    End,
}

/// Surface that remembers every call instead of drawing, and asks to close
/// after a fixed number of frames.
pub struct RecordingSurface {
    calls: Vec<Call>,
    frames_left: usize,
    close_checks: usize,
    fail_at_pixel: Option<usize>,
}

impl RecordingSurface {
    pub fn new(frames: usize) -> Self {
        Self {
            calls: Vec::new(),
            frames_left: frames,
            close_checks: 0,
            fail_at_pixel: None,
        }
    }

    /// Makes the `n`th `set_pixel` call (0-based, counted across frames) fail.
    pub fn failing_at_pixel(mut self, n: usize) -> Self {
        self.fail_at_pixel = Some(n);
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn close_checks(&self) -> usize {
        self.close_checks
    }

    pub fn frames(&self) -> Vec<&[Call]> {
        self.calls
            .split_inclusive(|c| *c == Call::End)
            .collect()
    }

    fn pixels_drawn(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Pixel(..))).count()
    }
}

impl Surface for RecordingSurface {
    fn begin_frame(&mut self) -> Result<()> {
        self.calls.push(Call::Begin);
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.calls.push(Call::Clear(color));
        Ok(())
    }

    fn set_pixel(&mut self, at: Coord, color: Color) -> Result<()> {
        if self.fail_at_pixel == Some(self.pixels_drawn()) {
            bail!("pixel {:?} rejected", at);
        }
        self.calls.push(Call::Pixel(at, color));
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.calls.push(Call::End);
        self.frames_left = self.frames_left.saturating_sub(1);
        Ok(())
    }

    fn should_close(&mut self) -> bool {
        self.close_checks += 1;
        self.frames_left == 0
    }
}
