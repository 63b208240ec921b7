//! Gaussian elimination with partial pivoting.
//!
//! Given an m×(n+1) augmented matrix [A | b], [`reduce`] produces the reduced
//! row-echelon form (leading 1s, zeros above *and* below each pivot), the
//! ranks of A and [A | b], a [`Classification`], and — for consistent
//! systems — the basic solution with free variables fixed at 0.
//!
//! Partial pivoting (largest-magnitude entry in the remaining column) keeps
//! the elimination numerically stable; columns whose best candidate is within
//! tolerance of zero are skipped without consuming a row.

use nalgebra::{DMatrix, DVector};

use crate::domain::{Classification, Reduction};
use crate::math::{near_zero, round_small};

/// Row-reduce an augmented matrix and classify the system.
///
/// `augmented` must be m×(n+1) with n ≥ 1; the input is copied and never
/// mutated. Calling twice with the same input yields identical results.
pub fn reduce(augmented: &DMatrix<f64>) -> Reduction {
    let m = augmented.nrows();
    assert!(
        m >= 1 && augmented.ncols() >= 2,
        "reduce requires an m×(n+1) augmented matrix with m ≥ 1 and n ≥ 1"
    );
    let n = augmented.ncols() - 1;

    let mut mat = augmented.clone();

    let mut row = 0;
    let mut col = 0;
    let mut pivot_columns = Vec::new();

    while row < m && col < n {
        // Partial pivoting: pick the largest-magnitude entry at or below the
        // cursor in this column.
        let mut pivot_row = row;
        let mut max_val = mat[(row, col)].abs();
        for i in (row + 1)..m {
            let val = mat[(i, col)].abs();
            if val > max_val {
                max_val = val;
                pivot_row = i;
            }
        }

        // No usable pivot: the column is (numerically) all zero below the
        // cursor. Move to the next column without consuming a row.
        if near_zero(max_val) {
            col += 1;
            continue;
        }

        if pivot_row != row {
            mat.swap_rows(row, pivot_row);
        }

        pivot_columns.push(col);

        // Normalize the pivot row to get a leading 1. Entries left of the
        // pivot column are already zero from earlier eliminations.
        let pivot = mat[(row, col)];
        for j in col..=n {
            mat[(row, j)] /= pivot;
        }

        // Eliminate the pivot column from every other row (full reduction,
        // not just below the pivot).
        for i in 0..m {
            if i == row {
                continue;
            }
            let factor = mat[(i, col)];
            for j in col..=n {
                mat[(i, j)] -= factor * mat[(row, j)];
            }
        }

        row += 1;
        col += 1;
    }

    let rank_a = pivot_columns.len();
    let mut rank_ab = rank_a;

    // Rows without a pivot: an all-zero coefficient row with a nonzero
    // constant is the contradiction 0 = c, so the system has no solution.
    for i in rank_a..m {
        let all_zero = (0..n).all(|j| near_zero(mat[(i, j)]));

        if all_zero && !near_zero(mat[(i, n)]) {
            return Reduction {
                reduced: mat,
                rank_a,
                rank_ab: rank_ab + 1,
                classification: Classification::Inconsistent,
                pivot_columns,
                free_columns: Vec::new(),
                free_variables: 0,
                solution: None,
            };
        }

        if !all_zero {
            rank_ab += 1;
        }
    }

    let (classification, free_variables) = if rank_a < rank_ab {
        (Classification::Inconsistent, 0)
    } else if rank_a == n {
        (Classification::Unique, 0)
    } else {
        (Classification::Infinite, n - rank_a)
    };

    if classification == Classification::Inconsistent {
        return Reduction {
            reduced: mat,
            rank_a,
            rank_ab,
            classification,
            pivot_columns,
            free_columns: Vec::new(),
            free_variables,
            solution: None,
        };
    }

    // Basic solution: each pivot row's leading 1 marks its basic variable,
    // whose value is the row's constant entry. Free variables stay at 0.
    let mut solution = DVector::zeros(n);
    for i in 0..m {
        if let Some(basic_col) = (0..n).find(|&j| near_zero(mat[(i, j)] - 1.0)) {
            solution[basic_col] = mat[(i, n)];
        }
    }

    let mut is_basic = vec![false; n];
    for &c in &pivot_columns {
        is_basic[c] = true;
    }
    let free_columns: Vec<usize> = (0..n).filter(|&j| !is_basic[j]).collect();
    for &j in &free_columns {
        solution[j] = 0.0;
    }

    let solution = solution.map(round_small);

    Reduction {
        reduced: mat,
        rank_a,
        rank_ab,
        classification,
        pivot_columns,
        free_columns,
        free_variables,
        solution: Some(solution),
    }
}
