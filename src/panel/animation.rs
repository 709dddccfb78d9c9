//! Width transition driver.
//!
//! A [`WidthTransition`] interpolates the panel width between two values over
//! a fixed duration with an ease-out (decelerate) curve. It is deliberately
//! passive: the host schedules ticks however its frame clock works and calls
//! [`crate::panel::SidePanel::advance_animation`] with the current time.
//! Cancellation is dropping the transition; there is never more than one
//! driving the width.

use std::time::{Duration, Instant};

/// An in-flight width interpolation.
#[derive(Debug, Clone, Copy)]
pub struct WidthTransition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl WidthTransition {
    /// Starts a transition at `now` from the current (possibly partial)
    /// width.
    pub fn new(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in `[0, 1]`. A zero duration completes immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        (elapsed / total).clamp(0.0, 1.0)
    }

    /// Interpolated width at `now`, eased so the motion decelerates.
    pub fn width_at(&self, now: Instant) -> f32 {
        let eased = ease_out(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Decelerate curve: fast start, smooth stop.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
