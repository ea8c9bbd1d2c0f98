//! Quick sort with a Hoare partition around the first element.

use super::FrameRecorder;

pub(super) fn record(rec: &mut FrameRecorder) {
    let last = rec.len() - 1;
    // Pending subranges; the right half is pushed first so the left half is
    // partitioned (and emits its frames) first.
    let mut ranges = vec![(0, last)];
    while let Some((begin, finish)) = ranges.pop() {
        if begin >= finish {
            continue;
        }
        let part = partition(rec, begin, finish);
        ranges.push((part + 1, finish));
        if part > begin {
            ranges.push((begin, part - 1));
        }
    }
}

/// Partition `[begin, finish]` around `values[begin]` and return the
/// pivot's final index. Every exchange records a marker frame, including
/// the closing pivot exchange.
fn partition(rec: &mut FrameRecorder, begin: usize, finish: usize) -> usize {
    let pivot = rec.values()[begin];
    let mut i = begin;
    let mut j = finish + 1;
    loop {
        i += 1;
        while rec.values()[i] <= pivot && i != finish {
            i += 1;
        }
        j -= 1;
        while rec.values()[j] >= pivot && j != begin {
            j -= 1;
        }
        if j <= i {
            break;
        }
        rec.swap(i, j);
    }
    rec.swap(begin, j);
    j
}
