//! Time-bucket and project aggregation of filtered tasks.

use crate::task::domain::{CalendarDate, ProjectId, Task};

use super::{MyTasksConfig, TimeBucket, classify};

/// Tasks sharing one time bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGroup<'a> {
    /// The bucket.
    pub bucket: TimeBucket,
    /// Member tasks in input order.
    pub tasks: Vec<&'a Task>,
}

impl TimeGroup<'_> {
    /// Returns the group heading.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.bucket.label()
    }
}

/// Groups tasks into the six time buckets.
///
/// Groups follow [`TimeBucket::ORDER`]; empty groups are omitted.
#[must_use]
pub fn group_by_time<'a>(
    tasks: &[&'a Task],
    today: CalendarDate,
    config: &MyTasksConfig,
) -> Vec<TimeGroup<'a>> {
    let mut groups: Vec<TimeGroup<'a>> = TimeBucket::ORDER
        .iter()
        .map(|&bucket| TimeGroup {
            bucket,
            tasks: Vec::new(),
        })
        .collect();

    for &task in tasks {
        let bucket = classify(task.due_date(), today, config);
        if let Some(group) = groups.iter_mut().find(|group| group.bucket == bucket) {
            group.tasks.push(task);
        }
    }

    groups.retain(|group| !group.tasks.is_empty());
    groups
}

/// Grouping key for the project view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKey {
    /// Tasks of one project.
    Project(ProjectId),
    /// Tasks without a project.
    Unassigned,
}

/// Tasks sharing one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGroup<'a> {
    /// Grouping key.
    pub key: ProjectKey,
    /// Display name of the group.
    pub name: String,
    /// Member tasks in input order.
    pub tasks: Vec<&'a Task>,
}

/// Groups tasks by project, largest group first.
///
/// Groups of equal size keep the order in which their first task appeared.
#[must_use]
pub fn group_by_project<'a>(tasks: &[&'a Task], config: &MyTasksConfig) -> Vec<ProjectGroup<'a>> {
    let mut groups: Vec<ProjectGroup<'a>> = Vec::new();

    for &task in tasks {
        let key = task
            .project()
            .map_or(ProjectKey::Unassigned, |project| ProjectKey::Project(project.id()));
        if let Some(group) = groups.iter_mut().find(|group| group.key == key) {
            group.tasks.push(task);
            continue;
        }
        let name = task
            .project()
            .map(|project| project.name())
            .filter(|name| !name.is_empty())
            .unwrap_or(config.unassigned_label.as_str())
            .to_owned();
        groups.push(ProjectGroup {
            key,
            name,
            tasks: vec![task],
        });
    }

    // `sort_by` is stable, so ties keep encounter order.
    groups.sort_by(|left, right| right.tasks.len().cmp(&left.tasks.len()));
    groups
}
