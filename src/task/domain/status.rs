//! Task status and priority enumerations with their display metadata.

use super::{ParseTaskPriorityError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour intent used when rendering a status, priority, or bucket badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Muted grey.
    Neutral,
    /// Informational blue.
    Info,
    /// Highlight purple.
    Accent,
    /// Attention amber.
    Warning,
    /// Alarm red.
    Danger,
    /// Positive green.
    Success,
}

/// Label and tone for one enumerated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayMeta {
    /// Human-readable label.
    pub label: &'static str,
    /// Colour intent.
    pub tone: Tone,
}

impl DisplayMeta {
    const fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }
}

/// Workflow status of a task. Transitions are owned by the task API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    InReview,
    /// Finished.
    Done,
    /// Dropped.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns `true` for statuses that still need work.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Done | Self::Cancelled)
    }

    /// Returns badge metadata for this status.
    #[must_use]
    pub const fn display(self) -> DisplayMeta {
        match self {
            Self::Todo => DisplayMeta::new("To Do", Tone::Neutral),
            Self::InProgress => DisplayMeta::new("In Progress", Tone::Info),
            Self::InReview => DisplayMeta::new("In Review", Tone::Accent),
            Self::Done => DisplayMeta::new("Done", Tone::Success),
            Self::Cancelled => DisplayMeta::new("Cancelled", Tone::Neutral),
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "in_review" => Ok(Self::InReview),
            "done" => Ok(Self::Done),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal.
    Medium,
    /// Should be handled soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Returns badge metadata for this priority.
    #[must_use]
    pub const fn display(self) -> DisplayMeta {
        match self {
            Self::Low => DisplayMeta::new("Low", Tone::Neutral),
            Self::Medium => DisplayMeta::new("Medium", Tone::Info),
            Self::High => DisplayMeta::new("High", Tone::Warning),
            Self::Urgent => DisplayMeta::new("Urgent", Tone::Danger),
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
