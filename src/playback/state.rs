//! Run lifecycle state and run-generation tokens.

use std::fmt;

/// Playback lifecycle.
///
/// `Idle → Sorting → Finished`; `Finished` persists until a reset, and an
/// interrupt returns `Sorting` to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No run in progress.
    #[default]
    Idle,
    /// Frames are being applied on a timer.
    Sorting,
    /// The last frame has been applied; a reset is required.
    Finished,
}

impl RunState {
    /// Whether a replay is in progress.
    #[must_use]
    pub fn is_sorting(self) -> bool {
        self == Self::Sorting
    }

    /// True iff the state is [`RunState::Finished`].
    #[must_use]
    pub fn requires_reset(self) -> bool {
        self == Self::Finished
    }
}

/// Generation counter identifying one run.
///
/// Every play, interrupt and reset moves the scheduler to a new token, so
/// anything tagged with an older token is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RunToken(u64);

impl RunToken {
    /// The token after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}
