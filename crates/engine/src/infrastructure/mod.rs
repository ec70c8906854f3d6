//! Infrastructure implementations.
//!
//! Contains the resolver port, its in-memory implementation, and process
//! setup (configuration, tracing).

pub mod config;
pub mod memory_store;
pub mod ports;
pub mod telemetry;
