//! Non-preemptive shortest-job-first scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the process set; reject it whole on any violation.
//! 2. Stable-sort by arrival time.
//! 3. Repeat until every process has run:
//!    - admit every process with `arrival_time <= now` (single forward cursor);
//!    - dispatch the ready process with the smallest burst time, running it
//!      to completion (`now += burst`);
//!    - if nothing is ready, advance `now` through the idle gap.
//!
//! Ties on burst time go to the process admitted first, i.e. the earliest
//! arrival, then the earliest input position.
//!
//! # Complexity
//! O(n^2) in the worst case (n selections over a ready queue of up to n).
//! With [`IdleAdvance::Jump`] idle gaps cost one iteration each.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::{debug, info, trace, warn};

use super::config::{IdleAdvance, SchedulerConfig};
use super::ready_queue::ReadyQueue;
use crate::error::ScheduleError;
use crate::models::{Process, ProcessSet, Schedule, ScheduledProcess};
use crate::validation::validate_processes_from;

/// Non-preemptive single-processor SJF scheduler.
///
/// Holds only configuration; every call to [`schedule`](Self::schedule)
/// owns its own ready queue and output, so one instance can be shared
/// freely across threads.
///
/// # Example
///
/// ```
/// use u_sjf::models::{Process, ProcessSet};
/// use u_sjf::scheduler::SjfScheduler;
///
/// let mut processes: ProcessSet = vec![
///     Process::new("A", 0, 8),
///     Process::new("B", 1, 4),
///     Process::new("C", 2, 2),
///     Process::new("D", 3, 1),
/// ]
/// .into();
///
/// let schedule = SjfScheduler::new().schedule(&mut processes)?;
/// assert_eq!(schedule.process_ids(), vec!["A", "D", "C", "B"]);
/// assert_eq!(schedule.makespan(), 15);
/// # Ok::<(), u_sjf::ScheduleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    config: SchedulerConfig,
}

impl SjfScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules a process set.
    ///
    /// Reorders `processes` in place (stable, ascending arrival time) and
    /// returns the execution order with its timeline.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] if any process fails validation,
    /// including a timeline that would overflow `i64` from the configured
    /// start time. The set is left unsorted in that case.
    pub fn schedule(&self, processes: &mut ProcessSet) -> Result<Schedule, ScheduleError> {
        if let Err(errors) = validate_processes_from(
            processes.as_slice(),
            self.config.duplicate_policy,
            self.config.start_time,
        ) {
            warn!(
                processes = processes.len(),
                violations = errors.len(),
                "Rejecting invalid process set"
            );
            return Err(ScheduleError::InvalidInput(errors));
        }

        processes.sort_by_arrival_time();
        Ok(self.simulate(processes.as_slice()))
    }

    /// Runs the simulation over an arrival-sorted, validated slice.
    fn simulate(&self, processes: &[Process]) -> Schedule {
        let origin = self.config.start_time;
        let mut schedule = Schedule::new(origin);
        if processes.is_empty() {
            debug!("Empty process set, nothing to schedule");
            return schedule;
        }

        info!(
            processes = processes.len(),
            start_time = origin,
            idle_advance = ?self.config.idle_advance,
            "Starting SJF run"
        );

        let total = processes.len();
        let mut now = origin;
        let mut next_arrival = 0;
        let mut ready = ReadyQueue::with_capacity(total);

        while schedule.len() < total {
            // Admission
            while next_arrival < total && processes[next_arrival].has_arrived(now) {
                trace!(process = %processes[next_arrival].id, now, "Admitted");
                ready.admit(next_arrival);
                next_arrival += 1;
            }

            match ready.take_shortest(processes) {
                Some(idx) => {
                    let p = &processes[idx];
                    let start = now;
                    now += p.burst_time;
                    debug!(
                        process = %p.id,
                        start,
                        end = now,
                        burst = p.burst_time,
                        ready = ready.len(),
                        "Dispatched"
                    );
                    schedule.record(ScheduledProcess {
                        process_id: p.id.clone(),
                        arrival_time: p.arrival_time,
                        burst_time: p.burst_time,
                        start_time: start,
                        end_time: now,
                    });
                }
                None => {
                    // Ready queue is empty while processes remain, so at
                    // least one arrival is still pending and lies after `now`.
                    let arrival = processes[next_arrival].arrival_time;
                    let resume = match self.config.idle_advance {
                        IdleAdvance::Tick => now + 1,
                        IdleAdvance::Jump => arrival,
                    };
                    trace!(from = now, to = resume, next_arrival = arrival, "Idle");
                    now = resume;
                }
            }
        }
        debug_assert!(ready.is_empty());

        info!(
            scheduled = schedule.len(),
            makespan = schedule.makespan(),
            idle = schedule.idle_time(),
            "SJF run complete"
        );
        schedule
    }
}

/// Schedules a process set with the default configuration.
///
/// Shorthand for `SjfScheduler::new().schedule(processes)`.
pub fn schedule_processes(processes: &mut ProcessSet) -> Result<Schedule, ScheduleError> {
    SjfScheduler::new().schedule(processes)
}
