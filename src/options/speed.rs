use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::playback::{
    AnimationSpeed, SpeedBounds, DEFAULT_ANIMATION_SPEED, MAX_ANIMATION_SPEED,
    MIN_ANIMATION_SPEED,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Speed", inline)]
#[serde(default)]
/// Frame delay configuration, in milliseconds per frame.
pub struct SpeedOptions {
    /// Delay used when the engine starts.
    #[schemars(title = "Delay (ms)", range(min = 1), extend("step" = 10))]
    pub default_ms: u64,
    /// Smallest delay the speed control accepts.
    #[schemars(title = "Minimum Delay (ms)")]
    pub min_ms: u64,
    /// Largest delay the speed control accepts.
    #[schemars(title = "Maximum Delay (ms)")]
    pub max_ms: u64,
}

impl SpeedOptions {
    /// Initial speed with these bounds applied.
    #[must_use]
    pub fn to_speed(&self) -> AnimationSpeed {
        AnimationSpeed::new(
            self.default_ms,
            SpeedBounds::new(self.min_ms, self.max_ms),
        )
    }
}

impl Default for SpeedOptions {
    fn default() -> Self {
        Self {
            default_ms: DEFAULT_ANIMATION_SPEED,
            min_ms: MIN_ANIMATION_SPEED,
            max_ms: MAX_ANIMATION_SPEED,
        }
    }
}
