//! Per-frame delay, clamped to configured bounds.

use web_time::Duration;

/// Shortest allowed delay between frames, in milliseconds.
pub const MIN_ANIMATION_SPEED: u64 = 50;
/// Longest allowed delay between frames, in milliseconds.
pub const MAX_ANIMATION_SPEED: u64 = 400;
/// Delay used when nothing else is configured, in milliseconds.
pub const DEFAULT_ANIMATION_SPEED: u64 = 100;

/// Inclusive `[min, max]` range for the frame delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedBounds {
    min_ms: u64,
    max_ms: u64,
}

impl SpeedBounds {
    /// Bounds covering `a..=b`; the arguments may come in either order.
    #[must_use]
    pub fn new(a: u64, b: u64) -> Self {
        Self {
            min_ms: a.min(b),
            max_ms: a.max(b),
        }
    }

    /// Lower bound in milliseconds.
    #[must_use]
    pub fn min_ms(self) -> u64 {
        self.min_ms
    }

    /// Upper bound in milliseconds.
    #[must_use]
    pub fn max_ms(self) -> u64 {
        self.max_ms
    }

    /// `value` pulled into range.
    #[must_use]
    pub fn clamp(self, value: u64) -> u64 {
        value.max(self.min_ms).min(self.max_ms)
    }
}

impl Default for SpeedBounds {
    fn default() -> Self {
        Self::new(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED)
    }
}

/// Current delay per frame. Read by the scheduler each time it schedules a
/// step, so changes apply to the next step rather than the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpeed {
    delay_ms: u64,
    bounds: SpeedBounds,
}

impl AnimationSpeed {
    /// Speed starting at `delay_ms` (clamped).
    #[must_use]
    pub fn new(delay_ms: u64, bounds: SpeedBounds) -> Self {
        Self {
            delay_ms: bounds.clamp(delay_ms),
            bounds,
        }
    }

    /// Change the delay; returns the value actually stored.
    pub fn set(&mut self, delay_ms: u64) -> u64 {
        self.delay_ms = self.bounds.clamp(delay_ms);
        self.delay_ms
    }

    /// Delay in milliseconds.
    #[must_use]
    pub fn delay_ms(self) -> u64 {
        self.delay_ms
    }

    /// Delay as a [`Duration`].
    #[must_use]
    pub fn delay(self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Allowed range.
    #[must_use]
    pub fn bounds(self) -> SpeedBounds {
        self.bounds
    }
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_SPEED, SpeedBounds::default())
    }
}
