//! `sle-solver` library crate.
//!
//! An equation solver for small dense systems of linear equations: exact
//! solving via Gaussian elimination with partial pivoting (rank analysis and
//! unique/infinite/inconsistent classification) and approximate solving via
//! least squares on the normal equations.
//!
//! The binary (`sle`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the numerical core stays reusable behind any front-end (CLI today,
//!   a UI layer tomorrow)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod solve;
