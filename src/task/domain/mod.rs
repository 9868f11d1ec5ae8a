//! Domain model for the task workspace.
//!
//! Tasks are owned by an external task API. The domain types here are a
//! strictly typed, read-only projection of those records plus the calendar
//! arithmetic and display metadata the workspace views need.

mod date;
mod error;
mod extension;
mod ids;
mod record;
mod status;
mod task;

pub use date::CalendarDate;
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use extension::{ExtensionFields, ExtensionValue};
pub use ids::{ProjectId, TaskId};
pub use record::{ProjectRecord, TaskRecord};
pub use status::{DisplayMeta, TaskPriority, TaskStatus, Tone};
pub use task::{ProjectRef, Task};
