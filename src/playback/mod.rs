//! Timed replay of a [`FrameSequence`](crate::frames::FrameSequence).
//!
//! The [`PlaybackScheduler`] owns the displayed array and walks a frame
//! sequence one step at a time. It never reads the clock itself: the host
//! passes `now` into every call and either drives [`PlaybackScheduler::tick`]
//! from its frame loop or fires the [`ScheduledStep`] handle from its own
//! timer. Interrupts and resets revoke the outstanding handle so a late
//! timer can never write a frame from a superseded run.

mod scheduler;
mod speed;
mod state;
mod step;

pub use scheduler::{PlayOutcome, PlaybackScheduler, Progress};
pub use speed::{
    AnimationSpeed, SpeedBounds, DEFAULT_ANIMATION_SPEED, MAX_ANIMATION_SPEED,
    MIN_ANIMATION_SPEED,
};
pub use state::{RunState, RunToken};
pub use step::{FrameEvent, FrameSink, ScheduledStep, StepOutcome};
