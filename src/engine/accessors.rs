//! Read-only queries for [`SortingEngine`].

use web_time::Instant;

use super::SortingEngine;
use crate::algorithm::Algorithm;
use crate::options::EngineOptions;
use crate::playback::{
    AnimationSpeed, PlaybackScheduler, Progress, RunState, ScheduledStep,
};

impl SortingEngine {
    /// The currently displayed array.
    #[must_use]
    pub fn array(&self) -> &[u32] {
        self.scheduler.displayed()
    }

    /// The selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.scheduler.state()
    }

    /// Whether a replay is in progress.
    #[must_use]
    pub fn is_sorting(&self) -> bool {
        self.scheduler.is_sorting()
    }

    /// Whether the last run finished; the next play request resets instead.
    #[must_use]
    pub fn requires_reset(&self) -> bool {
        self.scheduler.requires_reset()
    }

    /// Current frame delay.
    #[must_use]
    pub fn speed(&self) -> AnimationSpeed {
        self.scheduler.speed()
    }

    /// Progress through the current or last run.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.scheduler.progress()
    }

    /// The outstanding step handle, for hosts running their own timer.
    #[must_use]
    pub fn pending(&self) -> Option<ScheduledStep> {
        self.scheduler.pending()
    }

    /// When the next frame becomes due, if a run is waiting on one.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// The underlying scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &PlaybackScheduler {
        &self.scheduler
    }
}
