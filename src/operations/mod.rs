//! Operations module
//!
//! Coordinates copy operations: the resolution engine, its result type, and
//! the user-facing copy command

pub mod command;
pub mod copy;
pub mod result;

pub use command::*;
pub use copy::*;
pub use result::*;
