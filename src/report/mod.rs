//! Terminal reporting.
//!
//! Formatting is kept in one place so:
//! - the math/solve code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;
