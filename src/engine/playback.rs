//! Lifecycle operations for [`SortingEngine`]: play, interrupt, reset,
//! speed and algorithm changes.

use web_time::Instant;

use super::SortingEngine;
use crate::algorithm::Algorithm;
use crate::frames::{generate, FrameSequence};
use crate::playback::{
    FrameSink, PlayOutcome, RunToken, ScheduledStep, StepOutcome,
};

/// What a play-button press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayRequest {
    /// A new run started for the selected algorithm.
    Started {
        /// Token of the new run.
        run: RunToken,
        /// Whether the run completed on its first frame.
        finished: bool,
    },
    /// The previous run had finished, so the array was regenerated instead.
    Reset,
    /// A run is already in progress; nothing changed.
    Ignored,
}

impl SortingEngine {
    /// Frames for the selected algorithm over the displayed array.
    #[must_use]
    pub fn generate(&self) -> FrameSequence {
        generate(self.algorithm, self.array())
    }

    /// Handle a play-button press.
    ///
    /// After a finished run this resets instead of playing. While sorting
    /// it is ignored. Otherwise the selected algorithm's frames are
    /// generated from the displayed array and replay starts.
    pub fn request_play(
        &mut self,
        sink: impl FrameSink + 'static,
        now: Instant,
    ) -> PlayRequest {
        if self.requires_reset() {
            self.reset();
            return PlayRequest::Reset;
        }
        if self.is_sorting() {
            return PlayRequest::Ignored;
        }
        let sequence = self.generate();
        match self.scheduler.play(sequence, sink, now) {
            PlayOutcome::Started { run, finished } => {
                PlayRequest::Started { run, finished }
            }
            PlayOutcome::AlreadySorting | PlayOutcome::Empty => {
                PlayRequest::Ignored
            }
            PlayOutcome::RequiresReset => {
                self.reset();
                PlayRequest::Reset
            }
        }
    }

    /// Replay an explicit sequence. Follows the scheduler's state rules:
    /// rejected while sorting or finished, no-op when empty.
    pub fn play(
        &mut self,
        sequence: FrameSequence,
        sink: impl FrameSink + 'static,
        now: Instant,
    ) -> PlayOutcome {
        self.scheduler.play(sequence, sink, now)
    }

    /// Apply the pending frame if it is due.
    pub fn tick(&mut self, now: Instant) -> Option<StepOutcome> {
        self.scheduler.tick(now)
    }

    /// Fire a step handle from an external timer.
    pub fn fire(&mut self, step: ScheduledStep, now: Instant) -> StepOutcome {
        self.scheduler.fire(step, now)
    }

    /// Stop the current run, keeping the partially sorted array.
    pub fn interrupt(&mut self) {
        self.scheduler.interrupt();
    }

    /// Cancel any run and display a freshly drawn random array.
    pub fn reset(&mut self) {
        let values = self.draw_values();
        self.scheduler.reset(values);
    }

    /// Cancel any run and display `values`.
    pub fn reset_with(&mut self, values: Vec<u32>) {
        self.scheduler.reset(values);
    }

    /// Change the frame delay; returns the clamped value. Takes effect from
    /// the next scheduled frame.
    pub fn set_speed(&mut self, delay_ms: u64) -> u64 {
        self.scheduler.set_speed(delay_ms)
    }

    /// Select a new algorithm. Any run is interrupted and the array is
    /// regenerated so frames of two algorithms never mix.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        log::debug!("algorithm {} -> {algorithm}", self.algorithm);
        self.algorithm = algorithm;
        self.interrupt();
        self.reset();
    }
}
