//! Port contracts for the task workspace.
//!
//! Ports define infrastructure-agnostic interfaces used by the workspace
//! service: the external task API and the host router.

pub mod navigator;
pub mod task_source;

pub use navigator::{Navigator, Route, RouteConfig};
pub use task_source::{TaskSource, TaskSourceError, TaskSourceResult};
