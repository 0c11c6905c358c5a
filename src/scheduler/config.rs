//! Configuration for SJF scheduling runs.

use serde::{Deserialize, Serialize};

use crate::validation::DuplicatePolicy;

/// How simulated time advances while the ready queue is empty.
///
/// Both modes produce the same schedule and the same final time; they
/// differ only in how many loop iterations an idle gap costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdleAdvance {
    /// Advance one time unit per iteration.
    Tick,
    /// Advance straight to the next pending arrival.
    #[default]
    Jump,
}

/// Configuration for a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Simulated time at which the processor becomes available.
    pub start_time: i64,
    /// Idle-time advancement strategy.
    pub idle_advance: IdleAdvance,
    /// Treatment of processes sharing an ID.
    pub duplicate_policy: DuplicatePolicy,
}

impl SchedulerConfig {
    /// Creates the default configuration (t=0, jump idle gaps, allow duplicate IDs).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start time.
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the idle-time advancement strategy.
    pub fn with_idle_advance(mut self, idle_advance: IdleAdvance) -> Self {
        self.idle_advance = idle_advance;
        self
    }

    /// Sets the duplicate-ID policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::new();
        assert_eq!(config.start_time, 0);
        assert_eq!(config.idle_advance, IdleAdvance::Jump);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Allow);
    }

    #[test]
    fn test_builder() {
        let config = SchedulerConfig::new()
            .with_start_time(10)
            .with_idle_advance(IdleAdvance::Tick)
            .with_duplicate_policy(DuplicatePolicy::Reject);
        assert_eq!(config.start_time, 10);
        assert_eq!(config.idle_advance, IdleAdvance::Tick);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{"start_time":3,"idle_advance":"Tick","duplicate_policy":"Reject"}"#;
        let config: SchedulerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config,
            SchedulerConfig::new()
                .with_start_time(3)
                .with_idle_advance(IdleAdvance::Tick)
                .with_duplicate_policy(DuplicatePolicy::Reject)
        );
    }
}
