//! namecheck runner library entry.
//!
//! Wires config, the name directory, and the checker together. Consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod checker;
pub mod config;
pub mod directory;
pub mod runner;
