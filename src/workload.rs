//! Random workload generation.
//!
//! Produces reproducible process sets for demos, benchmarks and property
//! tests. The same configuration (seed included) always yields the same
//! processes in the same order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Process, ProcessSet};

/// Invalid workload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkloadError {
    /// Burst range is empty or admits non-positive bursts.
    #[error("Invalid burst range {min}..={max}: bounds must satisfy 1 <= min <= max")]
    InvalidBurstRange {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// Arrival horizon is negative.
    #[error("Invalid arrival horizon {0}: must be non-negative")]
    InvalidHorizon(i64),
}

/// Parameters for a random process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub process_count: usize,
    /// Arrivals are drawn uniformly from `0..=arrival_horizon`.
    pub arrival_horizon: i64,
    /// Smallest burst time (inclusive).
    pub min_burst: i64,
    /// Largest burst time (inclusive).
    pub max_burst: i64,
    /// Random seed.
    pub seed: u64,
}

impl WorkloadConfig {
    /// Creates a configuration for `process_count` processes.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            arrival_horizon: 50,
            min_burst: 1,
            max_burst: 10,
            seed: 12345,
        }
    }

    /// Sets the arrival horizon.
    pub fn with_arrival_horizon(mut self, horizon: i64) -> Self {
        self.arrival_horizon = horizon;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Generates a process set from `config`.
///
/// Processes are named `P0`, `P1`, … in generation order and are not
/// sorted by arrival.
pub fn generate_workload(config: &WorkloadConfig) -> Result<ProcessSet, WorkloadError> {
    if config.min_burst < 1 || config.max_burst < config.min_burst {
        return Err(WorkloadError::InvalidBurstRange {
            min: config.min_burst,
            max: config.max_burst,
        });
    }
    if config.arrival_horizon < 0 {
        return Err(WorkloadError::InvalidHorizon(config.arrival_horizon));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let set: ProcessSet = (0..config.process_count)
        .map(|i| {
            let arrival = rng.random_range(0..=config.arrival_horizon);
            let burst = rng.random_range(config.min_burst..=config.max_burst);
            Process::new(format!("P{i}"), arrival, burst)
        })
        .collect();

    debug!(
        processes = set.len(),
        seed = config.seed,
        total_burst = set.total_burst_time(),
        "Generated workload"
    );
    Ok(set)
}
