//! Process model.
//!
//! A process is a single unit of CPU work: it becomes eligible at its
//! arrival time and, once started, holds the processor for its whole
//! burst time.
//!
//! # Time Representation
//! All times are in abstract simulation units relative to t=0. Values are
//! signed so that malformed input can be represented and rejected by
//! [`validate_processes`](crate::validation::validate_processes).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Opaque identifier, used only as an output label.
    pub id: String,
    /// Time at which the process becomes eligible to run (must be `>= 0`).
    pub arrival_time: i64,
    /// Processor time required to run to completion (must be `> 0`).
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }

    /// Whether the process has arrived at time `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }
}

impl From<(&str, i64, i64)> for Process {
    fn from((id, arrival_time, burst_time): (&str, i64, i64)) -> Self {
        Self::new(id, arrival_time, burst_time)
    }
}
