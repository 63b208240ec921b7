//! Residual and norm helpers shared by both solve paths.

use nalgebra::{DMatrix, DVector};

use crate::math::round_small;

/// Residual r = b − A·x, with sub-tolerance components snapped to 0.
pub fn residual(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> DVector<f64> {
    (b - a * x).map(round_small)
}

/// Euclidean norm of a vector.
pub fn euclidean_norm(v: &DVector<f64>) -> f64 {
    v.iter().map(|val| val * val).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn residual_of_exact_solution_is_zero() {
        let a = dmatrix![2.0, 1.0; 1.0, 3.0];
        let x = dvector![1.0, 2.0];
        let b = dvector![4.0, 7.0];

        let r = residual(&a, &x, &b);
        assert_eq!(r, dvector![0.0, 0.0]);
        assert_eq!(euclidean_norm(&r), 0.0);
    }

    #[test]
    fn residual_components_and_norm() {
        // A = [[1],[1]], x = [2], b = [1,3] -> r = [-1, 1], ‖r‖ = √2.
        let a = dmatrix![1.0; 1.0];
        let x = dvector![2.0];
        let b = dvector![1.0, 3.0];

        let r = residual(&a, &x, &b);
        assert_eq!(r, dvector![-1.0, 1.0]);
        assert!((euclidean_norm(&r) - 2.0_f64.sqrt()).abs() < 1e-15);
    }
}
