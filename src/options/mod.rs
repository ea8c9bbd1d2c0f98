//! Engine configuration with TOML preset support.
//!
//! Speed bounds, random array generation and the initially selected
//! algorithm are consolidated here. Options serialize to/from TOML so a
//! setup can be saved and reloaded.

mod array;
mod speed;

use std::path::Path;

pub use array::ArrayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use speed::SpeedOptions;

use crate::algorithm::Algorithm;
use crate::error::SortvizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[speed]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(default)]
pub struct EngineOptions {
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Frame delay bounds and default.
    pub speed: SpeedOptions,
    /// Random array generation.
    pub array: ArrayOptions,
}

impl EngineOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(EngineOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::OptionsParse`] on malformed TOML and
    /// [`SortvizError::InvalidOptions`] if the values fail [`Self::validate`].
    pub fn from_toml(content: &str) -> Result<Self, SortvizError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| SortvizError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::Io`] if the file cannot be read, otherwise
    /// as [`Self::from_toml`].
    pub fn load(path: &Path) -> Result<Self, SortvizError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::OptionsParse`] if serialization fails and
    /// [`SortvizError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SortvizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SortvizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that every range is non-empty and the default speed lies
    /// inside its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::InvalidOptions`] naming the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), SortvizError> {
        let speed = &self.speed;
        if speed.min_ms == 0 || speed.min_ms > speed.max_ms {
            return Err(SortvizError::InvalidOptions(format!(
                "speed bounds [{}, {}] are empty or start at zero",
                speed.min_ms, speed.max_ms
            )));
        }
        if !(speed.min_ms..=speed.max_ms).contains(&speed.default_ms) {
            return Err(SortvizError::InvalidOptions(format!(
                "default speed {} outside [{}, {}]",
                speed.default_ms, speed.min_ms, speed.max_ms
            )));
        }
        let array = &self.array;
        if array.length == 0 {
            return Err(SortvizError::InvalidOptions(
                "array length must be at least 1".to_owned(),
            ));
        }
        if array.min_value > array.max_value {
            return Err(SortvizError::InvalidOptions(format!(
                "value range [{}, {}] is empty",
                array.min_value, array.max_value
            )));
        }
        Ok(())
    }
}
