//! Error handling module
//!
//! Defines the crate-level error type with appropriate exit codes

pub mod types;

pub use types::*;
