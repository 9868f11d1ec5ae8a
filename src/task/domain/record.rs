//! Wire-format task records and their validated conversion into [`Task`].

use super::{
    CalendarDate, ExtensionFields, ProjectId, ProjectRef, Task, TaskDomainError, TaskId,
    TaskPriority, TaskStatus,
};
use serde::{Deserialize, Serialize};

/// Project reference as returned by the task API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Project identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// Task as returned by the task API, before validation.
///
/// Fields outside the core record are captured in `extensions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: TaskId,
    /// Display title.
    pub title: String,
    /// Raw status value.
    pub status: String,
    /// Raw priority value.
    #[serde(default)]
    pub priority: Option<String>,
    /// Raw due date value.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Owning project.
    #[serde(default)]
    pub project: Option<ProjectRecord>,
    /// Every other field of the record.
    #[serde(flatten)]
    pub extensions: ExtensionFields,
}

impl From<ProjectRecord> for ProjectRef {
    fn from(record: ProjectRecord) -> Self {
        Self::new(record.id, record.name, record.slug)
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(record.status.as_str())?;
        let mut task = Self::new(record.id, record.title, status).with_extensions(record.extensions);

        if let Some(raw) = record.priority.as_deref().filter(|raw| !raw.trim().is_empty()) {
            task = task.with_priority(TaskPriority::try_from(raw)?);
        }
        if let Some(raw) = record.due_date.as_deref().filter(|raw| !raw.trim().is_empty()) {
            task = task.with_due_date(CalendarDate::parse(raw)?);
        }
        if let Some(project) = record.project {
            task = task.with_project(project.into());
        }
        Ok(task)
    }
}
