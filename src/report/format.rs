//! Formatted terminal output for solve results.

use crate::domain::{Classification, SolveResult};

/// Format the full report: system, solution, residual, norm (and MSE for
/// least squares). Inconsistent systems print the status line only.
pub fn format_solve_report(result: &SolveResult) -> String {
    let mut out = String::new();

    out.push_str("=== sle - system of linear equations ===\n");
    out.push_str(&format!("Method: {}\n", result.method().display_name()));
    out.push_str(&format!("Status: {}\n", result.status()));

    let Some(solution) = result.solution() else {
        return out;
    };

    out.push_str("\nSystem:\n");
    for row in result.matrix() {
        out.push_str(&format!("  {}\n", format_equation(row)));
    }

    out.push_str("\nSolution:\n  ");
    let xs: Vec<String> = solution
        .iter()
        .enumerate()
        .map(|(i, x)| format!("x{} = {:.4}", i + 1, x))
        .collect();
    out.push_str(&xs.join(", "));
    out.push('\n');

    if let Some(residual) = result.residual() {
        out.push_str("\nResidual (r = b - A*x):\n  ");
        let rs: Vec<String> = residual
            .iter()
            .enumerate()
            .map(|(i, r)| format!("r{} = {:.4e}", i + 1, r))
            .collect();
        out.push_str(&rs.join(", "));
        out.push('\n');
    }

    if let Some(norm) = result.residual_norm() {
        out.push_str(&format!("\nResidual norm: {:.4e}\n", norm));
    }

    if let SolveResult::LeastSquares(ls) = result {
        out.push_str(&format!("MSE: {:.4e}\n", ls.mse));
        if ls.free_variables > 0 {
            out.push_str(&format!(
                "Rank-deficient design: rank(AtA)={}, free variables={}\n",
                ls.rank_a, ls.free_variables
            ));
        }
    }

    out
}

/// One-line summary for the `classify` subcommand.
pub fn format_classification(result: &SolveResult) -> String {
    let label = match result.classification() {
        Classification::Unique => "unique",
        Classification::Infinite => "infinite",
        Classification::Inconsistent => "inconsistent",
    };
    match result {
        SolveResult::Gauss(_) => format!("gauss: {label}"),
        SolveResult::LeastSquares(ls) => format!(
            "leastSquares: {label} (rankA={}, free={})",
            ls.rank_a, ls.free_variables
        ),
    }
}

/// Render one augmented row as an equation, e.g. `4x1 + 3x2 - x3 = 8`.
///
/// Zero coefficients are skipped, signs are folded into the separators, and
/// unit coefficients drop the leading 1. A row with no nonzero coefficients
/// renders as `0 = c`.
fn format_equation(row: &[f64]) -> String {
    let (coeffs, rhs) = row.split_at(row.len() - 1);

    let mut eq = String::new();
    for (j, &c) in coeffs.iter().enumerate() {
        if c == 0.0 {
            continue;
        }
        if eq.is_empty() {
            if c < 0.0 {
                eq.push('-');
            }
        } else {
            eq.push_str(if c < 0.0 { " - " } else { " + " });
        }
        let abs = c.abs();
        if abs != 1.0 {
            eq.push_str(&trim_number(abs));
        }
        eq.push_str(&format!("x{}", j + 1));
    }

    if eq.is_empty() {
        eq.push('0');
    }

    eq.push_str(&format!(" = {}", trim_number(rhs[0])));
    eq
}

/// Print a float without trailing zeros (`8` instead of `8.0000`).
fn trim_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
