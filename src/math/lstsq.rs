//! Least squares via the normal equations.
//!
//! For A·x ≈ b with A of shape m×n (possibly rectangular, possibly
//! rank-deficient) we form AᵗA·x = Aᵗb and hand the n×(n+1) augmented system
//! to the row reducer. The reducer's basic/free-variable policy applies
//! verbatim: when AᵗA is rank-deficient, free variables default to 0.
//!
//! A tiny parameter count is assumed throughout (tens of unknowns at most),
//! so the O(m·n²) normal-equations build is the pragmatic choice over QR/SVD.

use nalgebra::{DMatrix, DVector};

use crate::domain::Classification;
use crate::error::SolveError;
use crate::math::reduce::reduce;
use crate::math::residual::{euclidean_norm, residual};

/// Outcome of a least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresFit {
    /// Minimizer of ‖A·x − b‖² (basic solution when AᵗA is rank-deficient).
    pub solution: DVector<f64>,
    /// r = b − A·x.
    pub residual: DVector<f64>,
    /// ‖r‖.
    pub residual_norm: f64,
    /// ‖r‖² / m.
    pub mse: f64,
    /// Classification of the normal-equations system (`Unique` or `Infinite`).
    pub classification: Classification,
    /// Rank of AᵗA.
    pub rank_a: usize,
    /// Free variables of the normal-equations system.
    pub free_variables: usize,
}

/// Solve A·x ≈ b in the least-squares sense.
///
/// Fails with [`SolveError::NormalEquationsInconsistent`] if the reduced
/// normal equations come out inconsistent — for well-posed inputs they never
/// do, so this signals a degenerate numeric condition rather than a normal
/// "no solution" outcome.
pub fn least_squares(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<LeastSquaresFit, SolveError> {
    let m = a.nrows();
    let n = a.ncols();
    assert!(m >= 1 && n >= 1, "least_squares requires a non-empty A");
    assert_eq!(m, b.len(), "A and b must have matching row counts");

    // Normal equations [AᵗA | Aᵗb] as one augmented matrix.
    let ata = a.tr_mul(a);
    let atb = a.tr_mul(b);

    let mut normal = DMatrix::zeros(n, n + 1);
    normal.view_mut((0, 0), (n, n)).copy_from(&ata);
    normal.set_column(n, &atb);

    let reduction = reduce(&normal);
    let Some(solution) = reduction.solution else {
        return Err(SolveError::NormalEquationsInconsistent);
    };

    let r = residual(a, &solution, b);
    let residual_norm = euclidean_norm(&r);
    let mse = residual_norm * residual_norm / m as f64;

    Ok(LeastSquaresFit {
        solution,
        residual: r,
        residual_norm,
        mse,
        classification: reduction.classification,
        rank_a: reduction.rank_a,
        free_variables: reduction.free_variables,
    })
}
