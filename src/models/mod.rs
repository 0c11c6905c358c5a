//! Scheduling domain models.
//!
//! Provides the data types for a single-processor scheduling problem and
//! its solution.
//!
//! | Type | Role |
//! |------|------|
//! | Process | Input record: id, arrival time, burst time |
//! | ProcessSet | Ordered input collection, sortable by arrival |
//! | Schedule | Output: execution order plus timeline |

mod process;
mod process_set;
mod schedule;

pub use process::Process;
pub use process_set::{sort_by_arrival_time, ProcessSet};
pub use schedule::{Schedule, ScheduledProcess};
