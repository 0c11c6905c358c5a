//! Non-preemptive shortest-job-first CPU scheduling simulator.
//!
//! Given processes with arrival and burst times, simulates a single
//! processor that always runs the shortest ready job to completion, and
//! reports the execution order together with its timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `Schedule`
//! - **`validation`**: Input checks (burst/arrival bounds, duplicate IDs)
//! - **`scheduler`**: `SjfScheduler`, its configuration, and `ScheduleKpi`
//! - **`workload`**: Seeded random process-set generation
//! - **`error`**: `ScheduleError`
//!
//! # Example
//!
//! ```
//! use u_sjf::models::{Process, ProcessSet};
//! use u_sjf::schedule_processes;
//!
//! let mut processes: ProcessSet = vec![
//!     Process::new("A", 0, 5),
//!     Process::new("B", 0, 3),
//!     Process::new("C", 0, 1),
//! ]
//! .into();
//!
//! let schedule = schedule_processes(&mut processes)?;
//! assert_eq!(schedule.process_ids(), vec!["C", "B", "A"]);
//! # Ok::<(), u_sjf::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
pub use scheduler::{schedule_processes, SjfScheduler};
