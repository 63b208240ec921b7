//! Text input parsing.
//!
//! The input format is one equation per line: whitespace-separated numbers
//! where the last value on each line is the constant term and the rest are
//! that row's coefficients. Example (3 unknowns, 2 equations):
//!
//! ```text
//! 4 3 0 8
//! 1 -3 2 8
//! ```
//!
//! Parsing is strict: any token that is not a finite-or-infinite number fails
//! immediately with the offending line echoed back, before any numerical work
//! starts. Shape validation (equal row lengths, at least one coefficient
//! column) is delegated to [`LinearSystem::from_rows`].

use crate::domain::LinearSystem;
use crate::error::SolveError;

/// Parse raw text into a validated [`LinearSystem`].
pub fn parse_system(input: &str) -> Result<LinearSystem, SolveError> {
    let mut rows = Vec::new();

    for (idx, line) in input.trim().lines().enumerate() {
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| SolveError::Parse {
                line: idx + 1,
                content: line.trim().to_string(),
            })?;
            // "NaN" parses fine in Rust but is never a usable coefficient.
            if value.is_nan() {
                return Err(SolveError::Parse {
                    line: idx + 1,
                    content: line.trim().to_string(),
                });
            }
            row.push(value);
        }
        rows.push(row);
    }

    LinearSystem::from_rows(rows)
}
