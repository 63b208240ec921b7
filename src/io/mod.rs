//! Input/output helpers.
//!
//! - text input parsing + validation (`parse`)
//! - result JSON export (`export`)

pub mod export;
pub mod parse;

pub use export::*;
pub use parse::*;
