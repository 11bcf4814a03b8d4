//! hexpub library exports.
//!
//! The binary wires these together; integration tests drive them directly.

pub mod cache;
pub mod config;
pub mod hooks;
pub mod orchestrator;
pub mod process;
pub mod publish;
pub mod timing;
