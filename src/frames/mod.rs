//! Frame generation: replays a sorting algorithm as array snapshots.
//!
//! Each algorithm runs on a private working copy of the input and records a
//! [`Frame`] at every visually meaningful step (one comparison, exchange or
//! merge write). The resulting [`FrameSequence`] is computed in full before
//! playback starts and is never mutated afterwards.
//!
//! Generation is a pure function of `(algorithm, input)`: calling
//! [`generate`] twice yields identical sequences.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;

/// One immutable array snapshot plus its marker flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    values: Vec<u32>,
    marker: bool,
}

impl Frame {
    /// Snapshot of `values` with the given marker flag.
    #[must_use]
    pub fn new(values: Vec<u32>, marker: bool) -> Self {
        Self { values, marker }
    }

    /// Array state at this step.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Whether this frame is an active comparison/exchange step rather than
    /// a settled one. Opaque to the engine; renderers use it for
    /// highlighting.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.marker
    }
}

/// Ordered, finite list of frames for one algorithm run over one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSequence {
    algorithm: Algorithm,
    frames: Vec<Frame>,
}

impl FrameSequence {
    /// Sequence built from already-recorded frames.
    #[must_use]
    pub fn new(algorithm: Algorithm, frames: Vec<Frame>) -> Self {
        Self { algorithm, frames }
    }

    /// Algorithm that produced these frames.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// All frames in playback order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence has no frames at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// The last frame; for generated sequences this is the sorted array.
    #[must_use]
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of marker frames.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.frames.iter().filter(|f| f.marker).count()
    }
}

/// Working copy plus the frames recorded so far.
///
/// Shared by all generators: an algorithm mutates [`Self::values_mut`] and
/// calls [`Self::emit`] at each step it wants shown.
pub(crate) struct FrameRecorder {
    values: Vec<u32>,
    frames: Vec<Frame>,
}

impl FrameRecorder {
    pub(crate) fn new(input: &[u32]) -> Self {
        Self {
            values: input.to_vec(),
            frames: Vec::new(),
        }
    }

    pub(crate) fn values(&self) -> &[u32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [u32] {
        &mut self.values
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Record a snapshot of the current working copy.
    pub(crate) fn emit(&mut self, marker: bool) {
        self.frames.push(Frame::new(self.values.clone(), marker));
    }

    /// Swap two positions and record the result as a marker frame.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.emit(true);
    }

    pub(crate) fn finish(self, algorithm: Algorithm) -> FrameSequence {
        FrameSequence::new(algorithm, self.frames)
    }
}

/// Compute the full frame sequence for `algorithm` over `input`.
///
/// `input` is not mutated. Arrays with fewer than two elements yield a
/// single non-marker frame equal to the input.
#[must_use]
pub fn generate(algorithm: Algorithm, input: &[u32]) -> FrameSequence {
    let mut rec = FrameRecorder::new(input);
    if input.len() < 2 {
        rec.emit(false);
        return rec.finish(algorithm);
    }

    match algorithm {
        Algorithm::Bubble => bubble::record(&mut rec),
        Algorithm::Insertion => insertion::record(&mut rec),
        Algorithm::Selection => selection::record(&mut rec),
        Algorithm::Merge => merge::record(&mut rec),
        Algorithm::Quick => quick::record(&mut rec),
    }

    log::debug!(
        "generated {} frames for {algorithm} over {} values",
        rec.frames.len(),
        input.len()
    );
    rec.finish(algorithm)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sorted(input: &[u32]) -> Vec<u32> {
        let mut v = input.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_trivial_inputs_yield_single_settled_frame() {
        for alg in Algorithm::ALL {
            for input in [Vec::<u32>::new(), vec![7]] {
                let seq = generate(alg, &input);
                assert_eq!(seq.len(), 1);
                assert_eq!(seq.frames()[0].values(), input.as_slice());
                assert!(!seq.frames()[0].is_marker());
                assert_eq!(seq.algorithm(), alg);
            }
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![9, 4, 7, 1, 8];
        for alg in Algorithm::ALL {
            let _ = generate(alg, &input);
            assert_eq!(input, vec![9, 4, 7, 1, 8]);
        }
    }

    #[test]
    fn test_already_sorted_input_still_produces_frames() {
        let input = [1, 2, 3, 4, 5, 6];
        for alg in Algorithm::ALL {
            let seq = generate(alg, &input);
            assert!(!seq.is_empty(), "{alg} produced no frames");
            assert_eq!(seq.last().map(Frame::values), Some(&input[..]));
        }
    }

    #[test]
    fn test_duplicates_sort_for_every_algorithm() {
        let input = [3, 1, 3, 3, 0, 1, 3];
        for alg in Algorithm::ALL {
            let seq = generate(alg, &input);
            assert_eq!(
                seq.last().map(Frame::values),
                Some(sorted(&input).as_slice()),
                "{alg}"
            );
        }
    }

    #[test]
    fn test_frames_serialize_for_export() {
        let seq = generate(Algorithm::Selection, &[2, 1]);
        let json = serde_json::to_string(&seq).unwrap();
        assert!(json.contains("\"algorithm\":\"selection\""));
        let back: FrameSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }

    proptest! {
        #[test]
        fn prop_last_frame_is_sorted_permutation(
            input in prop::collection::vec(0u32..1000, 0..48),
            idx in 0usize..5,
        ) {
            let alg = Algorithm::ALL[idx];
            let seq = generate(alg, &input);
            let last = seq.last().map(|f| f.values().to_vec());
            prop_assert_eq!(last, Some(sorted(&input)));
        }

        #[test]
        fn prop_every_frame_is_a_permutation_for_swapping_sorts(
            input in prop::collection::vec(0u32..50, 2..24),
        ) {
            let expected = sorted(&input);
            for alg in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Quick] {
                for frame in generate(alg, &input).frames() {
                    prop_assert_eq!(sorted(frame.values()), expected.clone());
                }
            }
        }

        #[test]
        fn prop_generation_is_deterministic(
            input in prop::collection::vec(any::<u32>(), 0..32),
            idx in 0usize..5,
        ) {
            let alg = Algorithm::ALL[idx];
            prop_assert_eq!(generate(alg, &input), generate(alg, &input));
        }
    }
}
