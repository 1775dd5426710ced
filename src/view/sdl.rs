use super::Surface;
use crate::hilbert::Coord;

use anyhow::{Context, Result};
use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use sdl2::EventPump;

/// A window drawn through SDL's 2D renderer, one cell per `scale`-sided block
/// of window pixels.
pub struct SdlSurface {
    canvas: Canvas<Window>,
    events: EventPump,
}

impl SdlSurface {
    pub fn open(title: &str, width: u32, height: u32, scale: u32) -> Result<SdlSurface> {
        let sdl = sdl2::init().map_err(anyhow::Error::msg).context("initializing SDL")?;
        let sdl_video = sdl.video().map_err(anyhow::Error::msg).context("initializing SDL video")?;

        let win = sdl_video.window(title, width * scale, height * scale)
            .position_centered()
            .build().context("creating window")?;
        let mut canvas = win.into_canvas().build().context("creating canvas")?;
        canvas.set_scale(scale as f32, scale as f32)
            .map_err(anyhow::Error::msg).context("scaling canvas")?;
        // Alpha carries the gray level too, so cells are blended over the
        // black background rather than copied.
        canvas.set_blend_mode(BlendMode::Blend);

        let events = sdl.event_pump().map_err(anyhow::Error::msg).context("creating event loop")?;
        info!("Opened {}x{} window ({}x{} cells)", width * scale, height * scale, width, height);
        Ok(SdlSurface { canvas, events })
    }
}

impl Surface for SdlSurface {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn set_pixel(&mut self, at: Coord, color: Color) -> Result<()> {
        self.canvas.set_draw_color(color);
        self.canvas.draw_point((at.x as i32, at.y as i32))
            .map_err(anyhow::Error::msg).context("drawing")
    }

    fn end_frame(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn should_close(&mut self) -> bool {
        let mut close = false;
        for event in self.events.poll_iter() {
            match event {
                Event::Quit {..} => close = true,
                Event::KeyDown { keycode: Some(Keycode::Escape), .. } => close = true,
                _ => (),
            }
        }
        close
    }
}
