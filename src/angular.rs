//! Angular distribution of uniformly random unit quaternions.
//!
//! A unit quaternion drawn uniformly from the rotation group has a rotation
//! angle distributed with density proportional to sin²(θ/2) on [0, π]. This
//! module provides the closed-form density and cumulative distribution of
//! that angle, an importance-weighting helper built on the density, and the
//! precomputed inverse-CDF table used by the bounded orientation sampler.

use std::f64::consts::PI;
use std::sync::LazyLock;

use crate::inverse_cdf::InverseCdf;

/// Floor applied to the density when computing inverse-PDF weights, so the
/// weight stays finite at θ = 0 where the density vanishes.
pub const DEFAULT_PDF_EPSILON: f64 = 1e-6;

/// Number of CDF samples in the shared inverse lookup table.
const TABLE_POINTS: usize = 256;

/// Process-wide inverse of [`angular_cdf`] over [0, π]. Built on first use,
/// immutable afterwards, shared across threads without locking.
static INVERSE_CDF: LazyLock<InverseCdf> = LazyLock::new(|| {
    tracing::debug!(points = TABLE_POINTS, "building inverse angular CDF table");
    InverseCdf::from_fn(0.0, PI, TABLE_POINTS, angular_cdf)
});

/// Shared inverse-CDF table mapping cumulative probability in [0, 1] back to
/// a rotation angle in [0, π].
pub(crate) fn inverse_cdf() -> &'static InverseCdf {
    &INVERSE_CDF
}

/// Probability density of the rotation angle of a uniformly random unit
/// quaternion: `2/π · sin²(θ/2)` for θ ∈ [0, π].
pub fn angular_pdf(theta: f64) -> f64 {
    2.0 / PI * (theta / 2.0).sin().powi(2)
}

/// Cumulative distribution of the rotation angle: `(θ − sin θ) / π`.
///
/// Increases monotonically from 0 at θ = 0 to 1 at θ = π.
pub fn angular_cdf(theta: f64) -> f64 {
    (theta - theta.sin()) / PI
}

/// Inverse-density importance weight: `thresh / max(angular_pdf(θ), eps)`.
///
/// Used to reweight samples drawn from the angular distribution back toward
/// uniform. `eps` clamps the vanishing density near θ = 0 (see
/// [`DEFAULT_PDF_EPSILON`] for the conventional value).
pub fn inv_angular_pdf(theta: f64, thresh: f64, eps: f64) -> f64 {
    thresh / angular_pdf(theta).max(eps)
}
