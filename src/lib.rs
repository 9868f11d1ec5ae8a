//! Showrunner: operations workspace for event and production teams.
//!
//! This crate provides the task workspace core of the Showrunner business
//! application: a typed model of the tasks served by the external task API,
//! the derivations behind the "My Tasks" page, and the service that fetches,
//! completes, and navigates on the user's behalf.
//!
//! # Architecture
//!
//! Showrunner follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task model, "My Tasks" view derivation, and workspace service

pub mod task;
