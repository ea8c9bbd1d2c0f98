//! The closed set of visualized sorting algorithms.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SortvizError;

/// Sorting algorithm whose execution is replayed as frames.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Adjacent compare-and-swap passes with early exit.
    #[default]
    Bubble,
    /// Shift larger elements right, then place the key.
    Insertion,
    /// Exchange each position with the minimum of its suffix.
    Selection,
    /// Bottom-up merge with doubling run width.
    Merge,
    /// Hoare partition around the first element of each subrange.
    Quick,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Quick,
        Self::Merge,
        Self::Insertion,
        Self::Selection,
    ];

    /// Lowercase identifier used in options files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    /// Human-readable menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble",
            Self::Insertion => "Insertion",
            Self::Selection => "Selection",
            Self::Merge => "Merge",
            Self::Quick => "Quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SortvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SortvizError::UnknownAlgorithm(name.to_owned()))
    }
}
