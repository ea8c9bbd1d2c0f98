//! Revocable step handles and the frame sink callback.

use web_time::{Duration, Instant};

use super::state::RunToken;
use crate::frames::Frame;

/// Handle for the single pending "apply next frame" step.
///
/// The scheduler holds at most one of these. Firing a handle that is no
/// longer the pending one (because the run was interrupted, reset or
/// replaced) is reported as [`StepOutcome::Stale`] and has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub(crate) run: RunToken,
    pub(crate) index: usize,
    pub(crate) due: Instant,
}

impl ScheduledStep {
    /// Run this step belongs to.
    #[must_use]
    pub fn run(&self) -> RunToken {
        self.run
    }

    /// Index of the frame this step will apply.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Earliest instant at which the step may fire.
    #[must_use]
    pub fn due(&self) -> Instant {
        self.due
    }

    /// Time left until the step is due, zero if already due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

/// Result of firing a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The frame was written to the displayed array.
    Applied {
        /// Index of the applied frame.
        index: usize,
        /// Whether it was the last frame of the run.
        is_final: bool,
    },
    /// The step is still pending; nothing happened.
    NotDue,
    /// The step was revoked; nothing happened.
    Stale,
}

/// One applied frame, as reported to a [`FrameSink`].
#[derive(Debug, Clone, Copy)]
pub struct FrameEvent<'a> {
    /// Run that applied the frame.
    pub run: RunToken,
    /// Position of the frame in its sequence.
    pub index: usize,
    /// The frame itself; the displayed array now equals its values.
    pub frame: &'a Frame,
    /// Whether this was the last frame of the run.
    pub is_final: bool,
}

/// Receives each frame after it has been written to the displayed array.
pub trait FrameSink {
    /// Called once per applied frame, in sequence order.
    fn on_frame(&mut self, event: &FrameEvent<'_>);
}

impl<F> FrameSink for F
where
    F: FnMut(&FrameEvent<'_>),
{
    fn on_frame(&mut self, event: &FrameEvent<'_>) {
        self(event);
    }
}
