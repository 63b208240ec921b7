//! Error types.
//!
//! Two layers, kept deliberately separate:
//!
//! - [`SolveError`] — typed failures from the numerical core (parse, shape,
//!   degenerate normal equations). Callers pattern-match on the variants.
//! - [`AppError`] — binary-side error carrying a process exit code. Library
//!   errors are converted at the app boundary.
//!
//! Note that an *inconsistent* system on the Gaussian path is not an error at
//! all: it is a normal outcome reported through `Classification::Inconsistent`
//! with `solution: None`.

/// Failure from parsing, validation, or the least-squares internals.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// An input line contained a token that is not a valid number.
    Parse {
        /// 1-based line number of the offending row.
        line: usize,
        /// Raw text of the offending row.
        content: String,
    },
    /// Empty input, zero rows/columns, or rows of unequal length.
    Shape(String),
    /// The normal-equations system AᵗA·x = Aᵗb reduced to an inconsistent
    /// system. This only happens under pathological numeric conditions and is
    /// treated as an internal failure, not a "no solution" outcome.
    NormalEquationsInconsistent,
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::Parse { line, content } => {
                write!(f, "invalid number in row {line}: '{content}'")
            }
            SolveError::Shape(detail) => write!(f, "invalid matrix shape: {detail}"),
            SolveError::NormalEquationsInconsistent => {
                write!(f, "normal equations system is inconsistent")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Application-level error with an exit code for the `sle` binary.
///
/// Exit code conventions:
/// - 2: input problems (bad file, unparsable/ill-shaped system)
/// - 4: internal/numerical failures and I/O errors on output
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<SolveError> for AppError {
    fn from(err: SolveError) -> Self {
        let exit_code = match err {
            SolveError::Parse { .. } | SolveError::Shape(_) => 2,
            SolveError::NormalEquationsInconsistent => 4,
        };
        AppError::new(exit_code, format!("solve failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_error_maps_to_exit_codes() {
        let parse = AppError::from(SolveError::Parse {
            line: 3,
            content: "1 2 x".to_string(),
        });
        assert_eq!(parse.exit_code(), 2);
        assert!(parse.to_string().starts_with("solve failed: "));
        assert!(parse.to_string().contains("row 3"));

        let shape = AppError::from(SolveError::Shape("empty input".to_string()));
        assert_eq!(shape.exit_code(), 2);

        let degenerate = AppError::from(SolveError::NormalEquationsInconsistent);
        assert_eq!(degenerate.exit_code(), 4);
    }
}
