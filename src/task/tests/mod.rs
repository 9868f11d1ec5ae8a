//! Unit tests for the task workspace.
//!
//! Tests are organised by stage of the view pipeline, plus the domain model
//! and the orchestration service.
