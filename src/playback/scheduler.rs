//! Playback scheduler: applies frames one at a time on a revocable timer.

use web_time::Instant;

use super::speed::AnimationSpeed;
use super::state::{RunState, RunToken};
use super::step::{FrameEvent, FrameSink, ScheduledStep, StepOutcome};
use crate::frames::FrameSequence;

/// Result of a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Playback began; the first frame has already been applied.
    Started {
        /// Token of the new run.
        run: RunToken,
        /// Whether that first frame was also the last.
        finished: bool,
    },
    /// A run is already in progress; nothing changed.
    AlreadySorting,
    /// The previous run finished; reset before playing again.
    RequiresReset,
    /// The sequence had no frames; nothing changed.
    Empty,
}

/// How far the current (or last) run has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Frames applied so far.
    pub applied: usize,
    /// Frames in the run.
    pub total: usize,
}

impl Progress {
    /// Completed fraction in `[0, 1]`; an empty run counts as complete.
    #[must_use]
    pub fn fraction(self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.applied as f32 / self.total as f32
        }
    }
}

/// A run in progress.
struct ActiveRun {
    sequence: FrameSequence,
    pending: Option<ScheduledStep>,
    sink: Box<dyn FrameSink>,
}

/// Owns the displayed array and replays frame sequences into it.
///
/// The run state machine is the only write guard: frames are written while
/// [`RunState::Sorting`], and [`Self::reset`] replaces the array between
/// runs.
pub struct PlaybackScheduler {
    displayed: Vec<u32>,
    state: RunState,
    speed: AnimationSpeed,
    token: RunToken,
    run: Option<ActiveRun>,
    progress: Progress,
}

impl PlaybackScheduler {
    /// Idle scheduler displaying `initial`.
    #[must_use]
    pub fn new(initial: Vec<u32>, speed: AnimationSpeed) -> Self {
        Self {
            displayed: initial,
            state: RunState::Idle,
            speed,
            token: RunToken::default(),
            run: None,
            progress: Progress::default(),
        }
    }

    /// The externally observed array.
    #[must_use]
    pub fn displayed(&self) -> &[u32] {
        &self.displayed
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether a replay is in progress.
    #[must_use]
    pub fn is_sorting(&self) -> bool {
        self.state.is_sorting()
    }

    /// Whether the last run finished and a reset is needed.
    #[must_use]
    pub fn requires_reset(&self) -> bool {
        self.state.requires_reset()
    }

    /// Token of the current run generation.
    #[must_use]
    pub fn run_token(&self) -> RunToken {
        self.token
    }

    /// Frames applied out of the current or last run.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Current frame delay.
    #[must_use]
    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    /// Change the frame delay; returns the clamped value.
    ///
    /// An already scheduled step keeps its due time; every step scheduled
    /// afterwards uses the new delay.
    pub fn set_speed(&mut self, delay_ms: u64) -> u64 {
        self.speed.set(delay_ms)
    }

    /// The outstanding step, if a run is waiting on one.
    #[must_use]
    pub fn pending(&self) -> Option<ScheduledStep> {
        self.run.as_ref().and_then(|run| run.pending)
    }

    /// When the outstanding step becomes due.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending().map(|step| step.due)
    }

    /// Start replaying `sequence`, reporting each applied frame to `sink`.
    ///
    /// The first frame is applied immediately; each later frame becomes due
    /// one delay after its predecessor was applied. Requests while sorting
    /// or finished are rejected without touching the array.
    pub fn play(
        &mut self,
        sequence: FrameSequence,
        sink: impl FrameSink + 'static,
        now: Instant,
    ) -> PlayOutcome {
        match self.state {
            RunState::Sorting => {
                log::debug!("play ignored: {} still sorting", self.token);
                return PlayOutcome::AlreadySorting;
            }
            RunState::Finished => {
                log::debug!("play rejected: reset required");
                return PlayOutcome::RequiresReset;
            }
            RunState::Idle => {}
        }
        if sequence.is_empty() {
            return PlayOutcome::Empty;
        }

        self.token = self.token.next();
        let run = self.token;
        log::debug!(
            "{run}: playing {} frames of {} at {}ms",
            sequence.len(),
            sequence.algorithm(),
            self.speed.delay_ms()
        );

        self.progress = Progress {
            applied: 0,
            total: sequence.len(),
        };
        self.state = RunState::Sorting;
        self.run = Some(ActiveRun {
            sequence,
            pending: None,
            sink: Box::new(sink),
        });

        let finished = matches!(
            self.apply(0, now),
            StepOutcome::Applied { is_final: true, .. }
        );
        PlayOutcome::Started { run, finished }
    }

    /// Fire `step` if it is still the pending step and is due.
    pub fn fire(&mut self, step: ScheduledStep, now: Instant) -> StepOutcome {
        let current = self.pending();
        if step.run != self.token || current != Some(step) {
            log::warn!(
                "discarding stale step {} of {} (current {})",
                step.index,
                step.run,
                self.token
            );
            return StepOutcome::Stale;
        }
        if now < step.due {
            return StepOutcome::NotDue;
        }
        self.apply(step.index, now)
    }

    /// Fire the pending step if it is due. Applies at most one frame per
    /// call, so a late tick delays the run rather than skipping frames.
    ///
    /// Returns `None` when nothing is pending.
    pub fn tick(&mut self, now: Instant) -> Option<StepOutcome> {
        let step = self.pending()?;
        Some(self.fire(step, now))
    }

    /// Stop the current run, leaving the array in its partial state.
    /// No effect unless sorting.
    pub fn interrupt(&mut self) {
        if !self.state.is_sorting() {
            return;
        }
        log::debug!(
            "{}: interrupted after {}/{} frames",
            self.token,
            self.progress.applied,
            self.progress.total
        );
        self.cancel();
        self.state = RunState::Idle;
    }

    /// Cancel any run and display `values`. Valid from every state.
    pub fn reset(&mut self, values: Vec<u32>) {
        self.cancel();
        log::debug!("{}: reset with {} values", self.token, values.len());
        self.displayed = values;
        self.state = RunState::Idle;
        self.progress = Progress::default();
    }

    /// Drop the active run (and with it the pending step) and move to a
    /// fresh token so any copy of the old step is stale.
    fn cancel(&mut self) {
        self.run = None;
        self.token = self.token.next();
    }

    /// Write frame `index` into the displayed array, notify the sink, then
    /// either finish or schedule the next frame.
    fn apply(&mut self, index: usize, now: Instant) -> StepOutcome {
        let Some(run) = self.run.as_mut() else {
            return StepOutcome::Stale;
        };
        let Some(frame) = run.sequence.get(index) else {
            return StepOutcome::Stale;
        };

        self.displayed.clear();
        self.displayed.extend_from_slice(frame.values());

        let is_final = index + 1 == run.sequence.len();
        log::trace!("{}: frame {index} applied", self.token);
        run.sink.on_frame(&FrameEvent {
            run: self.token,
            index,
            frame,
            is_final,
        });
        self.progress.applied = index + 1;

        if is_final {
            self.run = None;
            self.state = RunState::Finished;
            log::debug!("{}: finished", self.token);
        } else {
            run.pending = Some(ScheduledStep {
                run: self.token,
                index: index + 1,
                due: now + self.speed.delay(),
            });
        }
        StepOutcome::Applied { index, is_final }
    }
}

impl std::fmt::Debug for PlaybackScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackScheduler")
            .field("state", &self.state)
            .field("token", &self.token)
            .field("len", &self.displayed.len())
            .field("speed_ms", &self.speed.delay_ms())
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_time::Duration;

    use super::*;
    use crate::algorithm::Algorithm;
    use crate::frames::generate;

    type Log = Rc<RefCell<Vec<(RunToken, usize, Vec<u32>, bool)>>>;

    fn recording_sink() -> (Log, impl FrameSink + 'static) {
        let log: Log = Rc::default();
        let sink_log = Rc::clone(&log);
        let sink = move |e: &FrameEvent<'_>| {
            sink_log.borrow_mut().push((
                e.run,
                e.index,
                e.frame.values().to_vec(),
                e.is_final,
            ));
        };
        (log, sink)
    }

    fn scheduler(values: &[u32]) -> PlaybackScheduler {
        PlaybackScheduler::new(values.to_vec(), AnimationSpeed::default())
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Tick at each due time until the run finishes.
    fn drain(sched: &mut PlaybackScheduler) -> usize {
        let mut ticks = 0;
        while let Some(due) = sched.next_due() {
            let _ = sched.tick(due);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_play_applies_first_frame_immediately() {
        let input = [5, 3, 1, 4, 2];
        let mut sched = scheduler(&input);
        let (log, sink) = recording_sink();
        let t0 = Instant::now();

        let outcome =
            sched.play(generate(Algorithm::Selection, &input), sink, t0);

        assert!(matches!(outcome, PlayOutcome::Started { finished: false, .. }));
        assert_eq!(sched.state(), RunState::Sorting);
        assert_eq!(sched.displayed(), [1, 3, 5, 4, 2]);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(sched.next_due(), Some(t0 + ms(100)));
    }

    #[test]
    fn test_run_to_completion_finishes_and_requires_reset() {
        let input = [5, 3, 1, 4, 2];
        let mut sched = scheduler(&input);
        let (log, sink) = recording_sink();
        let _ = sched.play(
            generate(Algorithm::Selection, &input),
            sink,
            Instant::now(),
        );

        assert_eq!(drain(&mut sched), 3);
        assert_eq!(sched.state(), RunState::Finished);
        assert!(sched.requires_reset());
        assert_eq!(sched.displayed(), [1, 2, 3, 4, 5]);
        assert_eq!(sched.pending(), None);

        let log = log.borrow();
        let indices: Vec<usize> = log.iter().map(|e| e.1).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
        assert!(log[3].3);
        assert!(log[..3].iter().all(|e| !e.3));
        assert_eq!(sched.progress(), Progress { applied: 4, total: 4 });
    }

    #[test]
    fn test_single_frame_goes_straight_to_finished() {
        for input in [Vec::<u32>::new(), vec![7]] {
            let mut sched = scheduler(&input);
            let (log, sink) = recording_sink();
            let outcome = sched.play(
                generate(Algorithm::Quick, &input),
                sink,
                Instant::now(),
            );
            assert!(matches!(outcome, PlayOutcome::Started { finished: true, .. }));
            assert_eq!(sched.state(), RunState::Finished);
            assert_eq!(sched.displayed(), input.as_slice());
            assert_eq!(log.borrow().len(), 1);
        }
    }

    #[test]
    fn test_empty_sequence_is_a_noop() {
        let mut sched = scheduler(&[2, 1]);
        let token = sched.run_token();
        let outcome = sched.play(
            FrameSequence::new(Algorithm::Bubble, Vec::new()),
            |_: &FrameEvent<'_>| {},
            Instant::now(),
        );
        assert_eq!(outcome, PlayOutcome::Empty);
        assert_eq!(sched.state(), RunState::Idle);
        assert_eq!(sched.run_token(), token);
    }

    #[test]
    fn test_play_while_sorting_keeps_pending_step() {
        let input = [4, 3, 2, 1];
        let mut sched = scheduler(&input);
        let t0 = Instant::now();
        let (log, sink) = recording_sink();
        let _ = sched.play(generate(Algorithm::Bubble, &input), sink, t0);
        let pending = sched.pending();
        let shown = sched.displayed().to_vec();

        let (other_log, other_sink) = recording_sink();
        let outcome =
            sched.play(generate(Algorithm::Merge, &input), other_sink, t0);

        assert_eq!(outcome, PlayOutcome::AlreadySorting);
        assert_eq!(sched.pending(), pending);
        assert_eq!(sched.displayed(), shown.as_slice());
        assert!(other_log.borrow().is_empty());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_play_while_finished_does_not_mutate() {
        let input = [2, 1];
        let mut sched = scheduler(&input);
        let _ = sched.play(
            generate(Algorithm::Bubble, &input),
            |_: &FrameEvent<'_>| {},
            Instant::now(),
        );
        assert!(sched.requires_reset());

        let outcome = sched.play(
            FrameSequence::new(
                Algorithm::Bubble,
                vec![crate::frames::Frame::new(vec![9, 9], true)],
            ),
            |_: &FrameEvent<'_>| {},
            Instant::now(),
        );
        assert_eq!(outcome, PlayOutcome::RequiresReset);
        assert_eq!(sched.displayed(), [1, 2]);
    }

    #[test]
    fn test_tick_before_due_does_nothing() {
        let input = [3, 2, 1];
        let mut sched = scheduler(&input);
        let t0 = Instant::now();
        let _ = sched.play(
            generate(Algorithm::Bubble, &input),
            |_: &FrameEvent<'_>| {},
            t0,
        );
        assert_eq!(sched.tick(t0 + ms(99)), Some(StepOutcome::NotDue));
        assert_eq!(sched.progress().applied, 1);
        assert_eq!(
            sched.tick(t0 + ms(100)),
            Some(StepOutcome::Applied {
                index: 1,
                is_final: false
            })
        );
    }

    #[test]
    fn test_pending_step_reports_time_remaining() {
        let input = [3, 2, 1];
        let mut sched = scheduler(&input);
        let t0 = Instant::now();
        let _ = sched.play(
            generate(Algorithm::Bubble, &input),
            |_: &FrameEvent<'_>| {},
            t0,
        );
        let Some(step) = sched.pending() else {
            panic!("no step scheduled after play");
        };
        assert_eq!(step.remaining(t0), ms(100));
        assert_eq!(step.remaining(t0 + ms(40)), ms(60));
        assert_eq!(step.remaining(t0 + ms(500)), Duration::ZERO);
    }

    #[test]
    fn test_late_tick_applies_one_frame_and_reschedules_from_now() {
        let input = [4, 3, 2, 1];
        let mut sched = scheduler(&input);
        let t0 = Instant::now();
        let _ = sched.play(
            generate(Algorithm::Bubble, &input),
            |_: &FrameEvent<'_>| {},
            t0,
        );

        let late = t0 + ms(1_000);
        let _ = sched.tick(late);
        assert_eq!(sched.progress().applied, 2);
        assert_eq!(sched.next_due(), Some(late + ms(100)));
    }

    #[test]
    fn test_speed_change_applies_to_next_scheduled_step() {
        let input = [4, 3, 2, 1];
        let mut sched = scheduler(&input);
        let t0 = Instant::now();
        let _ = sched.play(
            generate(Algorithm::Bubble, &input),
            |_: &FrameEvent<'_>| {},
            t0,
        );

        assert_eq!(sched.set_speed(300), 300);
        // already scheduled step keeps its due time
        assert_eq!(sched.next_due(), Some(t0 + ms(100)));
        let _ = sched.tick(t0 + ms(100));
        assert_eq!(sched.next_due(), Some(t0 + ms(400)));
    }

    #[test]
    fn test_interrupt_cancels_and_keeps_partial_array() {
        let input = [4, 3, 2, 1];
        let mut sched = scheduler(&input);
        let t0 = Instant::now();
        let _ = sched.play(
            generate(Algorithm::Bubble, &input),
            |_: &FrameEvent<'_>| {},
            t0,
        );
        let _ = sched.tick(t0 + ms(100));
        let partial = sched.displayed().to_vec();
        let step = sched.pending().unwrap();

        sched.interrupt();

        assert_eq!(sched.state(), RunState::Idle);
        assert!(!sched.requires_reset());
        assert_eq!(sched.pending(), None);
        assert_eq!(sched.displayed(), partial.as_slice());
        assert_eq!(sched.fire(step, t0 + ms(500)), StepOutcome::Stale);
        assert_eq!(sched.displayed(), partial.as_slice());
    }

    #[test]
    fn test_stale_step_never_applies_to_new_run() {
        let old_input = [9, 8, 7, 6];
        let mut sched = scheduler(&old_input);
        let t0 = Instant::now();
        let (log, sink) = recording_sink();
        let _ = sched.play(generate(Algorithm::Bubble, &old_input), sink, t0);
        let old_step = sched.pending().unwrap();
        let old_run = old_step.run();

        sched.interrupt();
        sched.reset(vec![2, 1, 3]);
        let new_input = sched.displayed().to_vec();
        let (new_log, new_sink) = recording_sink();
        let outcome = sched.play(
            generate(Algorithm::Insertion, &new_input),
            new_sink,
            t0,
        );
        let PlayOutcome::Started { run: new_run, .. } = outcome else {
            panic!("expected a new run, got {outcome:?}");
        };
        assert_ne!(new_run, old_run);

        // the old timer fires late, even at the exact index the new run
        // is waiting on
        assert_eq!(sched.fire(old_step, t0 + ms(100)), StepOutcome::Stale);
        let _ = drain(&mut sched);

        assert!(log.borrow().iter().all(|e| e.0 == old_run));
        assert_eq!(log.borrow().len(), 1);
        assert!(new_log.borrow().iter().all(|e| e.0 == new_run));
        assert_eq!(sched.displayed(), [1, 2, 3]);
    }

    #[test]
    fn test_reset_from_finished_returns_to_idle() {
        let input = [2, 1];
        let mut sched = scheduler(&input);
        let _ = sched.play(
            generate(Algorithm::Bubble, &input),
            |_: &FrameEvent<'_>| {},
            Instant::now(),
        );
        assert!(sched.requires_reset());

        sched.reset(vec![5, 6, 4]);
        assert_eq!(sched.state(), RunState::Idle);
        assert!(!sched.requires_reset());
        assert_eq!(sched.displayed(), [5, 6, 4]);
        assert_eq!(sched.progress(), Progress::default());
    }

    #[test]
    fn test_interrupt_when_idle_is_noop() {
        let mut sched = scheduler(&[1, 2]);
        let token = sched.run_token();
        sched.interrupt();
        assert_eq!(sched.run_token(), token);
        assert_eq!(sched.state(), RunState::Idle);
    }

    #[test]
    fn test_progress_fraction() {
        assert!((Progress { applied: 1, total: 4 }.fraction() - 0.25).abs() < 1e-6);
        assert!((Progress::default().fraction() - 1.0).abs() < 1e-6);
    }
}
