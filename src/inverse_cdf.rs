//! Inverse lookup table for monotone functions.
//!
//! This module provides a lookup table that precomputes a monotonically
//! non-decreasing function at regular intervals and evaluates its *inverse*
//! using binary search plus linear interpolation. It is used to invert
//! cumulative distribution functions for inverse-transform sampling, where
//! the forward CDF is cheap to evaluate but has no closed-form inverse.
//!
//! # Example
//!
//! ```
//! use quat_math::inverse_cdf::InverseCdf;
//!
//! // Invert f(x) = x^2 on [0, 2]
//! let table = InverseCdf::from_fn(0.0, 2.0, 256, |x| x * x);
//! let x = table.eval(2.25).unwrap();
//! assert!((x - 1.5).abs() < 1e-3);
//! ```

use thiserror::Error;

/// Error type for inverse lookup operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Value is outside the range spanned by the tabulated function
    #[error("value {value} is outside tabulated range [{min}, {max}]")]
    OutOfBounds { value: f64, min: f64, max: f64 },
}

/// Precomputed inverse of a monotone function.
///
/// Stores `n_points` samples `(x_i, f(x_i))` on a uniform grid over
/// `[x_min, x_max]` and answers queries of the form "for which `x` does
/// `f(x) = y`?" by locating the bracketing grid cell with binary search and
/// interpolating linearly between its endpoints.
#[derive(Debug, Clone)]
pub struct InverseCdf {
    /// Uniform grid of abscissae (the function's domain)
    xs: Vec<f64>,
    /// Function values at the grid points, non-decreasing
    ys: Vec<f64>,
}

impl InverseCdf {
    /// Build the table by sampling `f` at `n_points` uniform grid points.
    ///
    /// # Arguments
    ///
    /// * `x_min` - Lower bound of the function's domain
    /// * `x_max` - Upper bound of the function's domain
    /// * `n_points` - Number of samples (minimum 2)
    /// * `f` - Monotonically non-decreasing function to tabulate
    ///
    /// # Panics
    ///
    /// Panics if `x_min >= x_max`, `n_points < 2`, or the sampled values are
    /// not non-decreasing (the function is not monotone on the grid).
    pub fn from_fn<F>(x_min: f64, x_max: f64, n_points: usize, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        assert!(x_min < x_max, "x_min must be less than x_max");
        assert!(n_points >= 2, "Need at least 2 points for interpolation");

        let dx = (x_max - x_min) / (n_points - 1) as f64;
        let xs: Vec<f64> = (0..n_points).map(|i| x_min + i as f64 * dx).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

        for i in 1..ys.len() {
            assert!(
                ys[i] >= ys[i - 1],
                "tabulated function must be non-decreasing"
            );
        }

        Self { xs, ys }
    }

    /// Evaluate the inverse function at `y`.
    ///
    /// # Arguments
    ///
    /// * `y` - Function value to invert
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` - The `x` for which the tabulated function reaches `y`,
    ///   linearly interpolated between grid points
    /// * `Err(LookupError::OutOfBounds)` - If `y` lies outside the range the
    ///   function spans over its domain
    pub fn eval(&self, y: f64) -> Result<f64, LookupError> {
        let (y_min, y_max) = self.range();
        if !(y >= y_min && y <= y_max) {
            return Err(LookupError::OutOfBounds {
                value: y,
                min: y_min,
                max: y_max,
            });
        }

        // First index whose value exceeds y; the bracketing cell is [idx-1, idx]
        let idx = self.ys.partition_point(|&v| v <= y);
        if idx == 0 {
            return Ok(self.xs[0]);
        }
        if idx == self.ys.len() {
            return Ok(self.xs[self.xs.len() - 1]);
        }

        let y1 = self.ys[idx - 1];
        let y2 = self.ys[idx];
        let x1 = self.xs[idx - 1];
        let x2 = self.xs[idx];

        // Flat cell: the inverse is not unique there, return the left edge
        if y2 == y1 {
            return Ok(x1);
        }

        let t = (y - y1) / (y2 - y1);
        Ok(x1 + t * (x2 - x1))
    }

    /// Domain bounds `(x_min, x_max)` the function was tabulated over.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Range `(f(x_min), f(x_max))` spanned by the tabulated values.
    pub fn range(&self) -> (f64, f64) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Number of points in the table.
    pub fn size(&self) -> usize {
        self.xs.len()
    }

    /// Check whether `y` can be inverted by this table.
    pub fn contains(&self, y: f64) -> bool {
        let (y_min, y_max) = self.range();
        y >= y_min && y <= y_max
    }
}
