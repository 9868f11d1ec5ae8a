//! Adapter implementations of the task workspace ports.

pub mod memory;
