//! Domain types shared across the solver pipeline.
//!
//! This module defines:
//!
//! - input selectors (`Method`)
//! - the validated input system (`LinearSystem`)
//! - reduction output (`Classification`, `Reduction`)
//! - terminal results returned to callers (`SolveResult` and its variants)

pub mod types;

pub use types::*;
