//! Selection sort: one marker frame per outer position.

use super::FrameRecorder;

/// Exchange each position with the first minimum of the unsorted suffix.
///
/// An exchange of a position with itself still records a frame, so an
/// `n`-element input always yields `n - 1` frames.
pub(super) fn record(rec: &mut FrameRecorder) {
    let n = rec.len();
    for i in 0..n - 1 {
        let values = rec.values();
        let min = (i + 1..n).fold(i, |min, j| {
            if values[j] < values[min] {
                j
            } else {
                min
            }
        });
        rec.swap(i, min);
    }
}
