//! Error types for task domain parsing and value construction.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The due date is not a recognisable calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDueDate(String),

    /// The calendar month is out of range.
    #[error("invalid calendar month {year}-{month}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month (1-based).
        month: u32,
    },

    /// The status value from the task API is unknown.
    #[error(transparent)]
    UnknownStatus(#[from] ParseTaskStatusError),

    /// The priority value from the task API is unknown.
    #[error(transparent)]
    UnknownPriority(#[from] ParseTaskPriorityError),
}

/// Error returned while parsing task statuses from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
