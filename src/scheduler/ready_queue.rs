//! Ready queue for a single scheduling run.
//!
//! Holds indices into the arrival-sorted process slice rather than
//! process copies, in admission order. Removal shifts later entries down
//! so the insertion order used for tie-breaking is never disturbed.

use crate::models::Process;

/// Processes that have arrived but have not been dispatched yet.
#[derive(Debug, Default)]
pub(crate) struct ReadyQueue {
    indices: Vec<usize>,
}

impl ReadyQueue {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
        }
    }

    /// Admits the process at `index`.
    pub(crate) fn admit(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    /// Removes and returns the index of the shortest ready process.
    ///
    /// Ties on burst time resolve to the earliest admitted entry.
    pub(crate) fn take_shortest(&mut self, processes: &[Process]) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (pos, &idx) in self.indices.iter().enumerate() {
            let burst = processes[idx].burst_time;
            // Strict comparison keeps the first minimum.
            if best.map_or(true, |(_, b)| burst < b) {
                best = Some((pos, burst));
            }
        }
        best.map(|(pos, _)| self.indices.remove(pos))
    }
}
