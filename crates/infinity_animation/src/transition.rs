//! The repeating completion clock
//!
//! Hosts drive widget animation by sampling a transition with the elapsed
//! wall-clock time each frame; the transition maps it onto the repeating
//! completion value. Keeping this a pure mapping (no interior mutability,
//! no timers) leaves frame scheduling entirely to the host.

use std::time::Duration;

use crate::easing::Easing;

/// Completion value for a repeating 0→2 ramp.
///
/// `elapsed_ms` is time since the animation started; `duration_ms` is one
/// full cycle. The result is always in `[0.0, 2.0)`: the cycle boundary maps
/// back to 0. A zero duration yields 0 (the animation holds its start frame).
pub fn completion_at(elapsed_ms: f64, duration_ms: u32) -> f32 {
    if duration_ms == 0 {
        return 0.0;
    }
    let duration = duration_ms as f64;
    let progress = (elapsed_ms.max(0.0) % duration) / duration;
    (progress * 2.0) as f32
}

/// An indefinitely repeating animation cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfiniteTransition {
    duration_ms: u32,
    easing: Easing,
}

impl InfiniteTransition {
    /// Create a transition with the given cycle duration in milliseconds
    pub fn new(duration_ms: u32) -> Self {
        debug_assert!(duration_ms > 0, "cycle duration must be non-zero");
        Self {
            duration_ms,
            easing: Easing::Linear,
        }
    }

    /// Set the easing applied within each cycle
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// One full cycle, in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Completion value in `[0.0, 2.0)` at the given elapsed time
    pub fn completion(&self, elapsed: Duration) -> f32 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        let duration = self.duration_ms as f64;
        let progress = (elapsed.as_secs_f64() * 1_000.0 % duration) / duration;
        self.easing.apply(progress as f32) * 2.0
    }
}
