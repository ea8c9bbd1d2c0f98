//! Bubble sort: one marker frame per adjacent comparison.

use super::FrameRecorder;

/// Compare-and-swap adjacent pairs, stopping after a pass with no swap.
///
/// Every comparison records the post-comparison state, swapped or not.
pub(super) fn record(rec: &mut FrameRecorder) {
    let n = rec.len();
    for pass in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if rec.values()[j] > rec.values()[j + 1] {
                rec.values_mut().swap(j, j + 1);
                swapped = true;
            }
            rec.emit(true);
        }
        if !swapped {
            break;
        }
    }
}
