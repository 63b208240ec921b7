//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while solving
//! - exported to JSON for downstream consumers (the presentation layer only
//!   ever sees a `SolveResult`)
//!
//! The numerical work itself happens on `nalgebra` matrices; results carry
//! plain `Vec<f64>` so the wire shape stays independent of the linear-algebra
//! backend.

use clap::ValueEnum;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Which solution method to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Method {
    /// Exact solving: Gaussian elimination with partial pivoting.
    #[serde(rename = "gauss")]
    #[value(name = "gauss")]
    Gauss,
    /// Approximate solving: least squares via the normal equations.
    #[serde(rename = "leastSquares")]
    #[value(name = "least-squares")]
    LeastSquares,
}

impl Method {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Method::Gauss => "Gaussian elimination",
            Method::LeastSquares => "least squares",
        }
    }
}

/// How a reduced system is classified.
///
/// Always derived from rank analysis during reduction, never set by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// rank(A) = rank(A|b) = n: exactly one solution.
    Unique,
    /// rank(A) = rank(A|b) < n: a solution family with free variables.
    Infinite,
    /// rank(A) < rank(A|b): no solution.
    Inconsistent,
}

/// A validated system A·x = b together with the raw rows it was built from.
///
/// Shape invariants are established at construction time, so every consumer
/// can rely on: m ≥ 1, n ≥ 1, all rows of length n + 1, `b` of length m.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: DMatrix<f64>,
    b: DVector<f64>,
    rows: Vec<Vec<f64>>,
}

impl LinearSystem {
    /// Build a system from augmented rows (each row: n coefficients followed
    /// by the constant term).
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        if rows.is_empty() {
            return Err(SolveError::Shape("empty input (no rows)".to_string()));
        }

        let width = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SolveError::Shape(format!(
                    "all rows must have the same length (row 1 has {} values, row {} has {})",
                    width,
                    i + 1,
                    row.len()
                )));
            }
        }

        // Each row needs at least one coefficient plus the constant term.
        if width < 2 {
            return Err(SolveError::Shape(
                "each row needs at least one coefficient and a constant term".to_string(),
            ));
        }

        let m = rows.len();
        let n = width - 1;
        let a = DMatrix::from_fn(m, n, |i, j| rows[i][j]);
        let b = DVector::from_fn(m, |i, _| rows[i][n]);

        Ok(Self { a, b, rows })
    }

    /// Build a system from a pre-parsed coefficient matrix and constant vector.
    pub fn from_parts(a: Vec<Vec<f64>>, b: Vec<f64>) -> Result<Self, SolveError> {
        if a.len() != b.len() {
            return Err(SolveError::Shape(format!(
                "A has {} rows but b has {} entries",
                a.len(),
                b.len()
            )));
        }

        let rows = a
            .into_iter()
            .zip(b)
            .map(|(mut row, rhs)| {
                row.push(rhs);
                row
            })
            .collect();

        Self::from_rows(rows)
    }

    /// Number of equations (m).
    pub fn equations(&self) -> usize {
        self.a.nrows()
    }

    /// Number of unknowns (n).
    pub fn unknowns(&self) -> usize {
        self.a.ncols()
    }

    /// Coefficient matrix A (m×n).
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Constant vector b (length m).
    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// The augmented matrix [A | b] (m×(n+1)), built fresh per call.
    pub fn augmented(&self) -> DMatrix<f64> {
        let (m, n) = (self.equations(), self.unknowns());
        DMatrix::from_fn(m, n + 1, |i, j| self.rows[i][j])
    }

    /// The raw augmented rows exactly as supplied by the caller.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// A's rows as plain vectors (for echoing in results).
    pub fn a_rows(&self) -> Vec<Vec<f64>> {
        let n = self.unknowns();
        self.rows.iter().map(|row| row[..n].to_vec()).collect()
    }

    /// b's entries as a plain vector (for echoing in results).
    pub fn b_values(&self) -> Vec<f64> {
        let n = self.unknowns();
        self.rows.iter().map(|row| row[n]).collect()
    }
}

/// Output of row-reducing one augmented matrix.
///
/// Built fresh per reduction and immutable afterwards; the caller's input
/// matrix is never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// The reduced row-echelon form of the augmented matrix.
    pub reduced: DMatrix<f64>,
    /// Numerical rank of the coefficient block.
    pub rank_a: usize,
    /// Numerical rank of the full augmented matrix.
    pub rank_ab: usize,
    pub classification: Classification,
    /// Pivot column indices in discovery order; `pivot_columns.len() == rank_a`.
    pub pivot_columns: Vec<usize>,
    /// Columns with no pivot (free variables), ascending.
    pub free_columns: Vec<usize>,
    /// Count of free variables (n − rank_a for consistent systems, else 0).
    pub free_variables: usize,
    /// Basic solution (free variables fixed at 0); `None` when inconsistent.
    pub solution: Option<DVector<f64>>,
}

/// Result of the Gaussian-elimination path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussResult {
    pub solution: Option<Vec<f64>>,
    #[serde(rename = "type")]
    pub classification: Classification,
    pub status: String,
    /// The original (unreduced) augmented matrix, echoed for display.
    pub matrix: Vec<Vec<f64>>,
    #[serde(rename = "A")]
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub residual: Option<Vec<f64>>,
    #[serde(rename = "residualNorm")]
    pub residual_norm: Option<f64>,
}

/// Result of the least-squares path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeastSquaresResult {
    pub solution: Vec<f64>,
    #[serde(rename = "type")]
    pub classification: Classification,
    pub status: String,
    /// The original (unreduced) augmented matrix, echoed for display.
    pub matrix: Vec<Vec<f64>>,
    #[serde(rename = "A")]
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub residual: Vec<f64>,
    #[serde(rename = "residualNorm")]
    pub residual_norm: f64,
    /// Mean squared error, ‖r‖² / m.
    pub mse: f64,
    /// Rank of the normal-equations coefficient matrix AᵗA.
    #[serde(rename = "rankA")]
    pub rank_a: usize,
    #[serde(rename = "freeVariables")]
    pub free_variables: usize,
}

/// Terminal artifact returned to the caller, one variant per method.
///
/// Serializes with an internal `method` tag (`"gauss"` / `"leastSquares"`),
/// so downstream consumers see one flat record per solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum SolveResult {
    #[serde(rename = "gauss")]
    Gauss(GaussResult),
    #[serde(rename = "leastSquares")]
    LeastSquares(LeastSquaresResult),
}

impl SolveResult {
    pub fn method(&self) -> Method {
        match self {
            SolveResult::Gauss(_) => Method::Gauss,
            SolveResult::LeastSquares(_) => Method::LeastSquares,
        }
    }

    pub fn classification(&self) -> Classification {
        match self {
            SolveResult::Gauss(r) => r.classification,
            SolveResult::LeastSquares(r) => r.classification,
        }
    }

    pub fn status(&self) -> &str {
        match self {
            SolveResult::Gauss(r) => &r.status,
            SolveResult::LeastSquares(r) => &r.status,
        }
    }

    pub fn solution(&self) -> Option<&[f64]> {
        match self {
            SolveResult::Gauss(r) => r.solution.as_deref(),
            SolveResult::LeastSquares(r) => Some(&r.solution),
        }
    }

    pub fn residual(&self) -> Option<&[f64]> {
        match self {
            SolveResult::Gauss(r) => r.residual.as_deref(),
            SolveResult::LeastSquares(r) => Some(&r.residual),
        }
    }

    pub fn residual_norm(&self) -> Option<f64> {
        match self {
            SolveResult::Gauss(r) => r.residual_norm,
            SolveResult::LeastSquares(r) => Some(r.residual_norm),
        }
    }

    /// The echoed original augmented matrix.
    pub fn matrix(&self) -> &[Vec<f64>] {
        match self {
            SolveResult::Gauss(r) => &r.matrix,
            SolveResult::LeastSquares(r) => &r.matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_splits_coefficients_and_constants() {
        let sys = LinearSystem::from_rows(vec![vec![4.0, 3.0, 8.0], vec![1.0, -3.0, 8.0]]).unwrap();
        assert_eq!(sys.equations(), 2);
        assert_eq!(sys.unknowns(), 2);
        assert_eq!(sys.a()[(1, 1)], -3.0);
        assert_eq!(sys.b()[1], 8.0);
        assert_eq!(sys.a_rows(), vec![vec![4.0, 3.0], vec![1.0, -3.0]]);
        assert_eq!(sys.b_values(), vec![8.0, 8.0]);
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert!(matches!(
            LinearSystem::from_rows(vec![]),
            Err(SolveError::Shape(_))
        ));
        assert!(matches!(
            LinearSystem::from_rows(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]),
            Err(SolveError::Shape(_))
        ));
        // A single value per row means zero unknowns.
        assert!(matches!(
            LinearSystem::from_rows(vec![vec![1.0], vec![2.0]]),
            Err(SolveError::Shape(_))
        ));
    }

    #[test]
    fn from_parts_matches_from_rows() {
        let via_parts =
            LinearSystem::from_parts(vec![vec![1.0, 1.0], vec![2.0, 2.0]], vec![3.0, 6.0]).unwrap();
        let via_rows =
            LinearSystem::from_rows(vec![vec![1.0, 1.0, 3.0], vec![2.0, 2.0, 6.0]]).unwrap();
        assert_eq!(via_parts, via_rows);
    }

    #[test]
    fn from_parts_rejects_length_mismatch() {
        assert!(matches!(
            LinearSystem::from_parts(vec![vec![1.0, 1.0]], vec![3.0, 6.0]),
            Err(SolveError::Shape(_))
        ));
    }

    #[test]
    fn solve_result_serializes_with_method_tag() {
        let result = SolveResult::Gauss(GaussResult {
            solution: Some(vec![1.0, 2.0]),
            classification: Classification::Unique,
            status: "system is consistent (unique solution)".to_string(),
            matrix: vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 2.0]],
            a: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            b: vec![1.0, 2.0],
            residual: Some(vec![0.0, 0.0]),
            residual_norm: Some(0.0),
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["method"], "gauss");
        assert_eq!(json["type"], "unique");
        assert_eq!(json["A"][0][0], 1.0);
        assert_eq!(json["residualNorm"], 0.0);

        let back: SolveResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
