//! Insertion sort: a marker frame per shift, a settled frame per placement.

use super::FrameRecorder;

pub(super) fn record(rec: &mut FrameRecorder) {
    for i in 1..rec.len() {
        let key = rec.values()[i];
        let mut hole = i;
        while hole > 0 && rec.values()[hole - 1] > key {
            let values = rec.values_mut();
            values[hole] = values[hole - 1];
            hole -= 1;
            rec.emit(true);
        }
        rec.values_mut()[hole] = key;
        rec.emit(false);
    }
}
