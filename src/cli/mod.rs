//! Command-line parsing for the `sle` binary.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the solver/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Method;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "sle",
    version,
    about = "Linear-system solver (Gaussian elimination / least squares)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a system and print the full report (system, solution, residual).
    Solve(SolveArgs),
    /// Print only the classification line (useful for scripting).
    Classify(SolveArgs),
    /// Re-render the report from a previously exported result JSON.
    Show(ShowArgs),
}

/// Common options for solving and classifying.
#[derive(Debug, Parser, Clone)]
pub struct SolveArgs {
    /// Solution method.
    #[arg(short = 'm', long, value_enum, default_value_t = Method::Gauss)]
    pub method: Method,

    /// Input file: one equation per line, whitespace-separated numbers, last
    /// value is the constant term. Reads stdin when omitted.
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Export the full result as pretty JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for re-rendering a saved result.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Result JSON file produced by `sle solve --export`.
    #[arg(long, value_name = "JSON")]
    pub result: PathBuf,
}
