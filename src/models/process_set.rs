//! Ordered process collection.
//!
//! The scheduler admits processes with a single forward cursor, so the set
//! must be in ascending arrival order before a run. Sorting is stable:
//! processes that arrive together keep their input order, which is what
//! makes tie-breaking in the ready queue reproducible.

use serde::{Deserialize, Serialize};

use super::Process;

/// An ordered sequence of processes owned by the caller.
///
/// The scheduler reorders the set in place but never mutates the
/// individual records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates an empty process set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a process (builder form).
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Appends a process.
    pub fn push(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Stable ascending sort by arrival time.
    pub fn sort_by_arrival_time(&mut self) {
        sort_by_arrival_time(&mut self.processes);
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Iterates over processes in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// The processes as a slice, in their current order.
    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    /// Sum of all burst times.
    pub fn total_burst_time(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Latest arrival time, or `None` for an empty set.
    pub fn latest_arrival(&self) -> Option<i64> {
        self.processes.iter().map(|p| p.arrival_time).max()
    }

    /// Consumes the set, returning the underlying processes.
    pub fn into_inner(self) -> Vec<Process> {
        self.processes
    }
}

impl From<Vec<Process>> for ProcessSet {
    fn from(processes: Vec<Process>) -> Self {
        Self { processes }
    }
}

impl FromIterator<Process> for ProcessSet {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self {
            processes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

/// Stable ascending sort by arrival time.
///
/// Processes with equal arrival times retain their relative order.
/// Empty and single-element slices are left untouched.
pub fn sort_by_arrival_time(processes: &mut [Process]) {
    // `sort_by_key` is a stable merge sort.
    processes.sort_by_key(|p| p.arrival_time);
}
