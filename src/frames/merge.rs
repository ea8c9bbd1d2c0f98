//! Bottom-up merge sort with a scratch copy of each run pair.

use super::FrameRecorder;

/// Merge adjacent runs of width 1, 2, 4, … until one run remains.
///
/// Each element written back into the merged region records a marker frame,
/// including trailing runs that have no right-hand partner.
pub(super) fn record(rec: &mut FrameRecorder) {
    let n = rec.len();
    let mut width = 1;
    while width < n {
        let mut begin = 0;
        while begin < n {
            let middle = (begin + width).min(n);
            let finish = (begin + 2 * width).min(n);
            merge_runs(rec, begin, middle, finish);
            begin += 2 * width;
        }
        width *= 2;
    }
}

/// Merge `[begin, middle)` and `[middle, finish)` back into place.
fn merge_runs(
    rec: &mut FrameRecorder,
    begin: usize,
    middle: usize,
    finish: usize,
) {
    let left = rec.values()[begin..middle].to_vec();
    let right = rec.values()[middle..finish].to_vec();

    let (mut i, mut j) = (0, 0);
    for k in begin..finish {
        let take_left =
            j >= right.len() || (i < left.len() && left[i] <= right[j]);
        let value = if take_left {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        rec.values_mut()[k] = value;
        rec.emit(true);
    }
}
