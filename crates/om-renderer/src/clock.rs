//! Frame clock
//!
//! The renderer never reads wall time itself; the host feeds it a
//! monotonic timestamp each frame and the clock turns that into a
//! clamped delta plus a frame counter. Tests drive it with plain
//! numbers instead of a real timer.

use crate::constants::frame;

/// Timing information for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Milliseconds since the previous tick, clamped to
    /// [`frame::MAX_FRAME_DELTA_MS`]
    pub delta_ms: f32,
    /// Monotonically increasing frame counter, starting at 1
    pub frame: u64,
}

/// Converts host timestamps into clamped per-frame deltas
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick_ms: Option<f64>,
    frame: u64,
}

impl FrameClock {
    /// Create a clock that has not ticked yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock to `now_ms` (milliseconds, any monotonic origin)
    ///
    /// The first tick reports the target frame duration since there is
    /// no previous timestamp to diff against. Stalls longer than the
    /// clamp produce one capped step instead of an enormous jump.
    pub fn tick(&mut self, now_ms: f64) -> FrameTiming {
        let delta_ms = match self.last_tick_ms {
            None => frame::TARGET_FRAME_MS,
            Some(last) => ((now_ms - last) as f32).clamp(0.0, frame::MAX_FRAME_DELTA_MS),
        };
        self.last_tick_ms = Some(now_ms);
        self.frame += 1;
        FrameTiming {
            delta_ms,
            frame: self.frame,
        }
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
