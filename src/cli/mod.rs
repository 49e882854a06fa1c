//! Command-line interface module
//!
//! Handles argument parsing and interactive prompts

pub mod args;
pub mod prompt;

pub use args::*;
pub use prompt::*;
