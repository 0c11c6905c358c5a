//! Schedule (solution) model.
//!
//! A schedule is the completion order produced by one scheduling run,
//! together with the simulated interval each process occupied. Because
//! execution is non-preemptive and contiguous, start order and completion
//! order coincide.

use serde::{Deserialize, Serialize};

/// The result of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Simulated time at which the run started.
    pub origin: i64,
    /// Executed processes in completion order.
    entries: Vec<ScheduledProcess>,
}

/// One process run on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// Process identifier.
    pub process_id: String,
    /// Arrival time copied from the input process.
    pub arrival_time: i64,
    /// Burst time copied from the input process.
    pub burst_time: i64,
    /// Time the process was dispatched.
    pub start_time: i64,
    /// Time the process completed (`start_time + burst_time`).
    pub end_time: i64,
}

impl ScheduledProcess {
    /// Time spent in the ready queue before dispatch.
    #[inline]
    pub fn waiting_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }

    /// Time from arrival to completion.
    #[inline]
    pub fn turnaround_time(&self) -> i64 {
        self.end_time - self.arrival_time
    }
}

impl Schedule {
    /// Creates an empty schedule starting at `origin`.
    pub fn new(origin: i64) -> Self {
        Self {
            origin,
            entries: Vec::new(),
        }
    }

    /// Appends a completed run.
    pub(crate) fn record(&mut self, entry: ScheduledProcess) {
        debug_assert!(
            self.entries
                .last()
                .map_or(true, |prev| prev.end_time <= entry.start_time),
            "runs must not overlap"
        );
        self.entries.push(entry);
    }

    /// Process ids in execution order.
    pub fn process_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.process_id.as_str()).collect()
    }

    /// All runs in execution order.
    pub fn entries(&self) -> &[ScheduledProcess] {
        &self.entries
    }

    /// Finds the first run of a given process id.
    pub fn entry_for(&self, process_id: &str) -> Option<&ScheduledProcess> {
        self.entries.iter().find(|e| e.process_id == process_id)
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Completion time of the last process, or `origin` when empty.
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(self.origin)
    }

    /// Total time the processor was running a process.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(|e| e.burst_time).sum()
    }

    /// Total time the processor sat idle between `origin` and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.origin - self.busy_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, arrival: i64, start: i64, burst: i64) -> ScheduledProcess {
        ScheduledProcess {
            process_id: id.into(),
            arrival_time: arrival,
            burst_time: burst,
            start_time: start,
            end_time: start + burst,
        }
    }

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new(0);
        s.record(entry("A", 2, 2, 3)); // idle 0..2
        s.record(entry("B", 1, 5, 4));
        s.record(entry("C", 12, 12, 1)); // idle 9..12
        s
    }

    #[test]
    fn test_process_ids() {
        let s = sample_schedule();
        assert_eq!(s.process_ids(), vec!["A", "B", "C"]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_makespan_and_idle() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 13);
        assert_eq!(s.busy_time(), 8);
        assert_eq!(s.idle_time(), 5);
    }

    #[test]
    fn test_entry_metrics() {
        let s = sample_schedule();
        let b = s.entry_for("B").unwrap();
        assert_eq!(b.waiting_time(), 4);
        assert_eq!(b.turnaround_time(), 8);
        assert!(s.entry_for("Z").is_none());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new(7);
        assert!(s.is_empty());
        assert_eq!(s.makespan(), 7);
        assert_eq!(s.idle_time(), 0);
        assert!(s.process_ids().is_empty());
    }

    #[test]
    fn test_schedule_json() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
