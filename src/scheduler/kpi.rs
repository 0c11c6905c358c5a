//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Completion time of the last process |
//! | Idle Time | Span minus busy time |
//! | Utilization | Busy time / span |
//! | Avg Waiting Time | Mean of start - arrival |
//! | Max Waiting Time | Largest single wait |
//! | Avg Turnaround Time | Mean of completion - arrival |
//! | Throughput | Processes completed per time unit of span |
//!
//! The span runs from the schedule origin to the makespan.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Completion time of the last process.
    pub makespan: i64,
    /// Time the processor sat idle within the span.
    pub idle_time: i64,
    /// Fraction of the span spent running processes (0.0..=1.0).
    pub utilization: f64,
    /// Mean time from arrival to dispatch.
    pub avg_waiting_time: f64,
    /// Longest time any process waited.
    pub max_waiting_time: i64,
    /// Mean time from arrival to completion.
    pub avg_turnaround_time: f64,
    /// Processes completed per unit of span.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let span = schedule.makespan() - schedule.origin;
        let count = schedule.len();

        let mut total_wait: i128 = 0;
        let mut max_wait: i64 = 0;
        let mut total_turnaround: i128 = 0;
        for entry in schedule.entries() {
            let wait = entry.waiting_time();
            total_wait += i128::from(wait);
            max_wait = max_wait.max(wait);
            total_turnaround += i128::from(entry.turnaround_time());
        }

        let (utilization, throughput) = if span > 0 {
            (
                schedule.busy_time() as f64 / span as f64,
                count as f64 / span as f64,
            )
        } else {
            (0.0, 0.0)
        };

        // Sums of per-process times can exceed `i64` even when each term fits.
        let mean = |total: i128| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        Self {
            makespan: schedule.makespan(),
            idle_time: schedule.idle_time(),
            utilization,
            avg_waiting_time: mean(total_wait),
            max_waiting_time: max_wait,
            avg_turnaround_time: mean(total_turnaround),
            throughput,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, ProcessSet};
    use crate::scheduler::{SchedulerConfig, SjfScheduler};

    fn schedule_of(items: &[(&str, i64, i64)]) -> Schedule {
        let mut processes: ProcessSet = items.iter().map(|&t| Process::from(t)).collect();
        SjfScheduler::new().schedule(&mut processes).unwrap()
    }

    #[test]
    fn test_kpi_basic() {
        // A 0..8, D 8..9, C 9..11, B 11..15
        let schedule = schedule_of(&[("A", 0, 8), ("B", 1, 4), ("C", 2, 2), ("D", 3, 1)]);
        let kpi = ScheduleKpi::calculate(&schedule);

        assert_eq!(kpi.makespan, 15);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
        // waits: 0 + 5 + 7 + 10 = 22
        assert!((kpi.avg_waiting_time - 5.5).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 10);
        // turnarounds: 8 + 6 + 9 + 14 = 37
        assert!((kpi.avg_turnaround_time - 9.25).abs() < 1e-10);
        assert!((kpi.throughput - 4.0 / 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle() {
        // idle 0..5, A 5..8
        let schedule = schedule_of(&[("A", 5, 3)]);
        let kpi = ScheduleKpi::calculate(&schedule);
        assert_eq!(kpi.idle_time, 5);
        assert!((kpi.utilization - 3.0 / 8.0).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_respects_origin() {
        let mut processes: ProcessSet = vec![Process::new("A", 0, 2)].into();
        let schedule = SjfScheduler::with_config(SchedulerConfig::new().with_start_time(10))
            .schedule(&mut processes)
            .unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);
        assert_eq!(kpi.makespan, 12);
        assert_eq!(kpi.max_waiting_time, 10);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(0));
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_large_times() {
        // C 0..1, A 1..half+1, B half+1..MAX; turnarounds sum past i64::MAX
        let half = i64::MAX / 2;
        let schedule = schedule_of(&[("A", 0, half), ("B", 0, half), ("C", 0, 1)]);
        let kpi = ScheduleKpi::calculate(&schedule);
        assert_eq!(kpi.makespan, i64::MAX);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
        assert!(kpi.avg_turnaround_time > half as f64);
        assert_eq!(kpi.max_waiting_time, half + 1);
    }

    #[test]
    fn test_meets_thresholds() {
        let schedule = schedule_of(&[("A", 5, 3)]);
        let kpi = ScheduleKpi::calculate(&schedule);
        assert!(kpi.meets_thresholds(0.0, 0.3));
        assert!(!kpi.meets_thresholds(0.0, 0.5)); // Utilization 0.375
    }
}
