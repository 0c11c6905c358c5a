//! Error types for scheduling.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors returned by a scheduling run.
///
/// A run can only fail at the boundary. Once input passes validation the
/// simulation is a terminating pure computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The process set failed validation; nothing was scheduled.
    #[error("Invalid process set ({} violation(s)): {}", .0.len(), summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl ScheduleError {
    /// All validation errors carried by this error.
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
        }
    }

    /// Whether any violation is of the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.violations().iter().any(|e| e.kind == kind)
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::validation::{validate_processes, DuplicatePolicy};

    fn invalid_input() -> ScheduleError {
        let processes = vec![Process::new("A", 0, 0), Process::new("B", -1, 2)];
        validate_processes(&processes, DuplicatePolicy::Allow)
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_violations() {
        let err = invalid_input();
        assert_eq!(err.violations().len(), 2);
        assert!(err.has_kind(ValidationErrorKind::InvalidBurstTime));
        assert!(err.has_kind(ValidationErrorKind::InvalidArrivalTime));
        assert!(!err.has_kind(ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_display() {
        let msg = invalid_input().to_string();
        assert!(msg.starts_with("Invalid process set (2 violation(s)): "));
        assert!(msg.contains("Process 'A' has non-positive burst time 0"));
        assert!(msg.contains("Process 'B' has negative arrival time -1"));
    }
}
