//! Numerical core: row reduction, least squares, residuals.
//!
//! Everything in here is a pure function of its inputs — reduction works on a
//! private copy of the caller's matrix, and no state is shared between calls.

pub mod lstsq;
pub mod reduce;
pub mod residual;

pub use lstsq::*;
pub use reduce::*;
pub use residual::*;

/// Zero tolerance for all comparisons in the numerical core.
///
/// A magnitude of exactly `EPS` counts as zero; anything strictly larger is
/// treated as a usable value.
pub const EPS: f64 = 1e-10;

/// Whether a value is zero up to [`EPS`].
#[inline]
pub fn near_zero(value: f64) -> bool {
    value.abs() <= EPS
}

/// Snap floating-point noise below [`EPS`] to an exact 0.0.
#[inline]
pub fn round_small(value: f64) -> f64 {
    if near_zero(value) { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_boundary_is_inclusive() {
        assert!(near_zero(1e-10));
        assert!(near_zero(-1e-10));
        assert!(!near_zero(1.1e-10));
        assert!(!near_zero(-1.1e-10));
    }

    #[test]
    fn round_small_snaps_noise_only() {
        assert_eq!(round_small(5e-11), 0.0);
        assert_eq!(round_small(-5e-11), 0.0);
        assert_eq!(round_small(2e-10), 2e-10);
        assert_eq!(round_small(1.5), 1.5);
    }
}
