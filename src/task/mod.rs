//! "My Tasks" workspace for Showrunner.
//!
//! Reads the signed-in user's tasks from the external task API, derives the
//! time-bucketed, per-project, and month-calendar views plus headline
//! counters, and dispatches completions back to the API. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure view derivation in [`views`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod views;

#[cfg(test)]
mod tests;
