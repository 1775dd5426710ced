use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::view::plot::Plot;
use crate::view::{Info, Surface, View};

/// Redraws `info` until the surface asks to close, at most once per `period`.
///
/// The close request is only looked at between frames. Returns the number of
/// frames drawn.
pub fn run<S: Surface>(plot: &mut Plot<S>, info: &Info, period: Option<Duration>) -> Result<u64> {
    let mut frames = 0u64;
    while !plot.view.should_close() {
        let deadline = period.map(|p| Instant::now() + p);

        hprof::start_frame();
        plot.render(info)?;
        hprof::end_frame();
        frames += 1;

        if let Some(deadline) = deadline {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }
    }
    Ok(frames)
}
