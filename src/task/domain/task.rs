//! Task record as consumed by the "My Tasks" workspace.

use super::{CalendarDate, ExtensionFields, ProjectId, TaskId, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};

/// Reference to the project a task belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectRef {
    id: ProjectId,
    name: String,
    slug: String,
}

impl ProjectRef {
    /// Creates a project reference.
    #[must_use]
    pub fn new(id: ProjectId, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URL slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Read-only projection of a task owned by the external task API.
///
/// Only `status` and `due_date` drive bucketing; the remaining fields are
/// carried for display, search, and grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
    priority: Option<TaskPriority>,
    due_date: Option<CalendarDate>,
    project: Option<ProjectRef>,
    #[serde(default, skip_serializing_if = "ExtensionFields::is_empty")]
    extensions: ExtensionFields,
}

impl Task {
    /// Creates a task with no priority, due date, project, or extensions.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            priority: None,
            due_date: None,
            project: None,
            extensions: ExtensionFields::new(),
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: CalendarDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Assigns the task to a project.
    #[must_use]
    pub fn with_project(mut self, project: ProjectRef) -> Self {
        self.project = Some(project);
        self
    }

    /// Replaces the extension fields.
    #[must_use]
    pub fn with_extensions(mut self, extensions: ExtensionFields) -> Self {
        self.extensions = extensions;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority, if set.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the due date, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<CalendarDate> {
        self.due_date
    }

    /// Returns the owning project, if any.
    #[must_use]
    pub const fn project(&self) -> Option<&ProjectRef> {
        self.project.as_ref()
    }

    /// Returns the extension fields.
    #[must_use]
    pub const fn extensions(&self) -> &ExtensionFields {
        &self.extensions
    }

    /// Returns `true` unless the task is done or cancelled.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Marks the task as done.
    pub const fn complete(&mut self) {
        self.status = TaskStatus::Done;
    }
}
