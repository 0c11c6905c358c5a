//! Input validation for process sets.
//!
//! Runs at the boundary, before any simulation state exists, so a bad
//! process rejects the whole input instead of surfacing partway through a
//! run. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process IDs (only under [`DuplicatePolicy::Reject`])
//! - Timelines whose completion time would not fit in an `i64`

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has `burst_time <= 0`.
    InvalidBurstTime,
    /// A process has `arrival_time < 0`.
    InvalidArrivalTime,
    /// Two processes share the same ID.
    DuplicateId,
    /// The latest possible completion time overflows `i64`.
    TimeOverflow,
}

/// How processes sharing an ID are treated.
///
/// IDs are opaque output labels, so duplicates do not affect the
/// simulation itself; they only make the resulting order ambiguous for
/// consumers that look processes up by ID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Accept duplicate IDs.
    #[default]
    Allow,
    /// Reject the input with [`ValidationErrorKind::DuplicateId`].
    Reject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before scheduling.
///
/// Checks:
/// 1. Every burst time is positive
/// 2. Every arrival time is non-negative
/// 3. No duplicate IDs, when `duplicates` is [`DuplicatePolicy::Reject`]
/// 4. A run starting at t=0 completes within `i64` range
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// An empty slice is valid.
pub fn validate_processes(processes: &[Process], duplicates: DuplicatePolicy) -> ValidationResult {
    validate_processes_from(processes, duplicates, 0)
}

/// Validates a process set for a run starting at `start_time`.
///
/// Same checks as [`validate_processes`], with the overflow bound taken
/// from `start_time`. No run can finish later than
/// `max(start_time, latest arrival) + total burst`, so when that value and
/// its distance from `start_time` fit in an `i64`, every timeline value of
/// the run does too.
pub fn validate_processes_from(
    processes: &[Process],
    duplicates: DuplicatePolicy,
    start_time: i64,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if duplicates == DuplicatePolicy::Reject && !seen.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    if let Some(err) = check_horizon(processes, start_time) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that the latest possible completion time and the run span fit in `i64`.
fn check_horizon(processes: &[Process], start_time: i64) -> Option<ValidationError> {
    if processes.is_empty() {
        return None;
    }

    let latest_start = processes
        .iter()
        .map(|p| p.arrival_time)
        .fold(start_time, i64::max);

    // Non-positive bursts are reported separately and never run.
    let horizon = processes
        .iter()
        .map(|p| p.burst_time.max(0))
        .try_fold(latest_start, |acc, burst| acc.checked_add(burst))
        .filter(|end| end.checked_sub(start_time).is_some());

    match horizon {
        Some(_) => None,
        None => Some(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Total burst time of {} processes starting at {} overflows the time range",
                processes.len(),
                start_time
            ),
        )),
    }
}
