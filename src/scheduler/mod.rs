//! SJF scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `SjfScheduler` is a discrete-event simulation of a single processor
//! under non-preemptive shortest-job-first. Processes are admitted as
//! simulated time passes their arrival; whenever the processor is free the
//! shortest ready process runs to completion.
//!
//! # KPI
//!
//! `ScheduleKpi` computes standard CPU-scheduling metrics: makespan, idle
//! time, utilization, waiting and turnaround time, throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod config;
mod kpi;
mod ready_queue;
mod sjf;

pub use config::{IdleAdvance, SchedulerConfig};
pub use kpi::ScheduleKpi;
pub use sjf::{schedule_processes, SjfScheduler};
