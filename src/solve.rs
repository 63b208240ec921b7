//! Entry points: validate, dispatch by method, assemble the result record.
//!
//! This is the whole boundary of the numerical core. A caller (CLI, UI, test)
//! hands over raw text or a pre-built [`LinearSystem`] plus a [`Method`] and
//! gets back a [`SolveResult`] echoing the original matrix/A/b alongside
//! solution, classification, status, and residual data.

use crate::domain::{
    Classification, GaussResult, LeastSquaresResult, LinearSystem, Method, SolveResult,
};
use crate::error::SolveError;
use crate::math::{euclidean_norm, least_squares, reduce, residual};

/// Parse raw text (one equation per line, last value = constant term) and solve.
pub fn solve_text(input: &str, method: Method) -> Result<SolveResult, SolveError> {
    let system = crate::io::parse_system(input)?;
    solve_system(&system, method)
}

/// Solve a validated system with the chosen method.
pub fn solve_system(system: &LinearSystem, method: Method) -> Result<SolveResult, SolveError> {
    match method {
        Method::Gauss => Ok(SolveResult::Gauss(solve_gauss(system))),
        Method::LeastSquares => Ok(SolveResult::LeastSquares(solve_least_squares(system)?)),
    }
}

/// Exact path: reduce the full augmented matrix.
///
/// An inconsistent system is a normal outcome here, reported with
/// `solution: None` rather than as an error.
fn solve_gauss(system: &LinearSystem) -> GaussResult {
    let reduction = reduce(&system.augmented());

    let Some(solution) = reduction.solution else {
        return GaussResult {
            solution: None,
            classification: Classification::Inconsistent,
            status: "system is inconsistent (no solutions)".to_string(),
            matrix: system.rows().to_vec(),
            a: system.a_rows(),
            b: system.b_values(),
            residual: None,
            residual_norm: None,
        };
    };

    // Recompute the residual against the *original* A and b, not the reduced
    // form: this is the substitution check a reader of the report expects.
    let r = residual(system.a(), &solution, system.b());
    let residual_norm = euclidean_norm(&r);

    // `solution` is only `Some` for consistent systems, so the classification
    // here is either unique or infinite.
    let status = if reduction.classification == Classification::Unique {
        "system is consistent (unique solution)"
    } else {
        "system is consistent (infinitely many solutions)"
    };

    GaussResult {
        solution: Some(solution.iter().copied().collect()),
        classification: reduction.classification,
        status: status.to_string(),
        matrix: system.rows().to_vec(),
        a: system.a_rows(),
        b: system.b_values(),
        residual: Some(r.iter().copied().collect()),
        residual_norm: Some(residual_norm),
    }
}

/// Approximate path: normal equations, then residual/error reporting.
fn solve_least_squares(system: &LinearSystem) -> Result<LeastSquaresResult, SolveError> {
    let fit = least_squares(system.a(), system.b())?;

    Ok(LeastSquaresResult {
        solution: fit.solution.iter().copied().collect(),
        classification: fit.classification,
        status: "least-squares solution".to_string(),
        matrix: system.rows().to_vec(),
        a: system.a_rows(),
        b: system.b_values(),
        residual: fit.residual.iter().copied().collect(),
        residual_norm: fit.residual_norm,
        mse: fit.mse,
        rank_a: fit.rank_a,
        free_variables: fit.free_variables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // The 4×4 demo system shipped with the original input form.
    const DEMO: &str = "4 3 0 0 8\n1 -3 0 0 8\n-1 -7 8 13 5\n4 1 9 18 4";

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn gauss_round_trip_on_demo_system() {
        let result = solve_text(DEMO, Method::Gauss).unwrap();

        assert_eq!(result.method(), Method::Gauss);
        assert_eq!(result.classification(), Classification::Unique);
        assert_eq!(result.status(), "system is consistent (unique solution)");

        // Substituting the solution back must reproduce b.
        assert!(result.residual_norm().unwrap() < 1e-9);
        assert_eq!(result.matrix().len(), 4);
        assert_eq!(result.matrix()[0], vec![4.0, 3.0, 0.0, 0.0, 8.0]);
    }

    #[test]
    fn gauss_reports_inconsistent_without_error() {
        let result = solve_text("1 1 1\n1 1 2", Method::Gauss).unwrap();

        let SolveResult::Gauss(gauss) = result else {
            panic!("expected a gauss result");
        };
        assert_eq!(gauss.classification, Classification::Inconsistent);
        assert!(gauss.solution.is_none());
        assert!(gauss.residual.is_none());
        assert!(gauss.residual_norm.is_none());
        assert_eq!(gauss.status, "system is inconsistent (no solutions)");
        // The input is still echoed for display.
        assert_eq!(gauss.matrix, vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 2.0]]);
        assert_eq!(gauss.a, vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        assert_eq!(gauss.b, vec![1.0, 2.0]);
    }

    #[test]
    fn gauss_infinite_solution_satisfies_the_system() {
        let result = solve_text("1 1 3\n2 2 6", Method::Gauss).unwrap();

        assert_eq!(result.classification(), Classification::Infinite);
        assert_eq!(
            result.status(),
            "system is consistent (infinitely many solutions)"
        );
        let x = result.solution().unwrap();
        assert_close(x[0], 3.0, 1e-12);
        assert_eq!(x[1], 0.0);
        // The basic solution is exact: residual is identically zero.
        assert_eq!(result.residual().unwrap(), &[0.0, 0.0]);
        assert_eq!(result.residual_norm().unwrap(), 0.0);
    }

    #[test]
    fn least_squares_on_overdetermined_system() {
        let result = solve_text("1 1\n1 3", Method::LeastSquares).unwrap();

        let SolveResult::LeastSquares(ls) = result else {
            panic!("expected a least-squares result");
        };
        assert_eq!(ls.status, "least-squares solution");
        assert_close(ls.solution[0], 2.0, 1e-12);
        assert_eq!(ls.residual, vec![-1.0, 1.0]);
        assert_close(ls.residual_norm, 2.0_f64.sqrt(), 1e-12);
        assert_close(ls.mse, 1.0, 1e-12);
        assert_eq!(ls.rank_a, 1);
        assert_eq!(ls.free_variables, 0);
    }

    #[test]
    fn least_squares_echoes_original_input() {
        let result = solve_text("1 0 2\n0 1 3\n1 1 6", Method::LeastSquares).unwrap();
        assert_eq!(result.method(), Method::LeastSquares);
        assert_eq!(
            result.matrix(),
            &[
                vec![1.0, 0.0, 2.0],
                vec![0.0, 1.0, 3.0],
                vec![1.0, 1.0, 6.0]
            ]
        );
    }

    #[test]
    fn solve_system_accepts_prebuilt_input() {
        let system =
            LinearSystem::from_parts(vec![vec![4.0, 3.0], vec![1.0, -3.0]], vec![8.0, 8.0])
                .unwrap();
        let result = solve_system(&system, Method::Gauss).unwrap();

        let x = result.solution().unwrap();
        assert_close(x[0], 16.0 / 5.0, 1e-12);
        assert_close(x[1], -8.0 / 5.0, 1e-12);
    }

    #[test]
    fn parse_errors_surface_before_any_arithmetic() {
        assert!(matches!(
            solve_text("1 a 3", Method::Gauss),
            Err(SolveError::Parse { .. })
        ));
        assert!(matches!(
            solve_text("", Method::LeastSquares),
            Err(SolveError::Shape(_))
        ));
    }
}
