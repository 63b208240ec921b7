//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - reads the input system (file or stdin)
//! - runs the solver
//! - prints reports
//! - writes optional exports

use std::io::Read;

use clap::Parser;

use crate::cli::{Cli, Command, ShowArgs, SolveArgs};
use crate::error::AppError;

/// Entry point for the `sle` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve(args) => handle_solve(args, OutputMode::Full),
        Command::Classify(args) => handle_solve(args, OutputMode::ClassifyOnly),
        Command::Show(args) => handle_show(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    ClassifyOnly,
}

fn handle_solve(args: SolveArgs, mode: OutputMode) -> Result<(), AppError> {
    let text = read_input(&args)?;
    if text.trim().is_empty() {
        return Err(AppError::new(2, "No input provided."));
    }

    let result = crate::solve::solve_text(&text, args.method)?;

    match mode {
        OutputMode::Full => println!("{}", crate::report::format_solve_report(&result)),
        OutputMode::ClassifyOnly => println!("{}", crate::report::format_classification(&result)),
    }

    if let Some(path) = &args.export {
        crate::io::write_result_json(path, &result)?;
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let result = crate::io::read_result_json(&args.result)?;
    println!("{}", crate::report::format_solve_report(&result));
    Ok(())
}

fn read_input(args: &SolveArgs) -> Result<String, AppError> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| AppError::new(2, format!("Failed to read input '{}': {e}", path.display()))),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AppError::new(2, format!("Failed to read stdin: {e}")))?;
            Ok(buf)
        }
    }
}
