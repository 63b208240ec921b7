//! Export a solve result to JSON.
//!
//! The JSON schema is defined by `domain::SolveResult`: one flat record per
//! solve, tagged by `method`, echoing the original matrix/A/b so downstream
//! tooling can render the system without re-parsing the input.

use std::fs::File;
use std::path::Path;

use crate::domain::SolveResult;
use crate::error::AppError;

/// Write a result as pretty JSON.
pub fn write_result_json(path: &Path, result: &SolveResult) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create result JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(file, result)
        .map_err(|e| AppError::new(4, format!("Failed to write result JSON: {e}")))?;

    Ok(())
}

/// Read a previously exported result (round-trips the schema).
pub fn read_result_json(path: &Path) -> Result<SolveResult, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open result JSON '{}': {e}", path.display()),
        )
    })?;
    let result: SolveResult = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid result JSON: {e}")))?;
    Ok(result)
}
