//! Random orientations within a bounded angular offset of a reference.
//!
//! The sampler draws an offset rotation whose axis is uniform over the
//! sphere and whose angle follows the sin²(θ/2) density of uniformly random
//! unit quaternions, truncated to the requested bound. The angle is produced
//! by inverse-transform sampling through the shared lookup table in
//! [`crate::angular`], so repeated calls share one immutable table.
//!
//! The crate owns no RNG state: callers pass any [`rand::Rng`], and seed it
//! themselves when they need deterministic draws.

use std::f64::consts::PI;

use nalgebra::{Unit, UnitQuaternion, Vector3};
use rand::Rng;
use rand_distr::StandardNormal;
use thiserror::Error;

use crate::angular;
use crate::inverse_cdf::LookupError;

/// Errors that can occur when sampling a nearby orientation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The requested offset bound is outside the domain the inverse-CDF
    /// table was built over.
    #[error("max orientation offset {value} is outside the supported range [0, {max}]")]
    OffsetOutOfRange { value: f64, max: f64 },
    /// The inverse-CDF lookup itself failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Sample a random orientation at most `max_orientation_offset` radians away
/// from `init_quat`.
///
/// The offset axis is drawn uniformly over the sphere (three i.i.d. standard
/// normals, normalized). The offset angle is drawn from the angular density
/// of uniformly random unit quaternions truncated to
/// `[0, max_orientation_offset]`, by mapping a uniform value scaled by
/// `angular_cdf(max_orientation_offset)` through the shared inverse-CDF
/// table.
///
/// # Arguments
///
/// * `init_quat` - Reference orientation the sample stays near
/// * `max_orientation_offset` - Bound on the offset angle in radians; must
///   lie in [0, π], the domain of the precomputed table
/// * `rng` - Random source; seed it for deterministic output
///
/// # Returns
///
/// * `Ok((near_quat, offset_quat))` - The composed orientation
///   `init_quat * offset_quat` and the raw offset rotation
/// * `Err(SampleError::OffsetOutOfRange)` - If the bound lies outside [0, π];
///   the sampler validates rather than extrapolating the table
pub fn random_quat_near<R: Rng + ?Sized>(
    init_quat: UnitQuaternion<f64>,
    max_orientation_offset: f64,
    rng: &mut R,
) -> Result<(UnitQuaternion<f64>, UnitQuaternion<f64>), SampleError> {
    if !(0.0..=PI).contains(&max_orientation_offset) {
        return Err(SampleError::OffsetOutOfRange {
            value: max_orientation_offset,
            max: PI,
        });
    }

    let offset_axis = random_unit_axis(rng);

    // Inverse-transform sampling of the truncated angular distribution:
    // scaling the uniform draw by the CDF at the bound keeps every sampled
    // probability inside the truncated range.
    let norm_const = angular::angular_cdf(max_orientation_offset);
    let offset_angle = angular::inverse_cdf().eval(norm_const * rng.gen::<f64>())?;

    let offset_quat = UnitQuaternion::from_axis_angle(&offset_axis, offset_angle);
    let near_quat = init_quat * offset_quat;
    Ok((near_quat, offset_quat))
}

/// Uniformly random direction on the unit sphere.
///
/// Three independent standard-normal components are isotropic, so the
/// normalized vector is uniform over directions. A degenerate all-near-zero
/// draw is rejected and redrawn.
fn random_unit_axis<R: Rng + ?Sized>(rng: &mut R) -> Unit<Vector3<f64>> {
    loop {
        let x: f64 = rng.sample(StandardNormal);
        let y: f64 = rng.sample(StandardNormal);
        let z: f64 = rng.sample(StandardNormal);
        let v = Vector3::new(x, y, z);
        let norm = v.norm();
        if norm > 1e-12 {
            return Unit::new_unchecked(v / norm);
        }
    }
}
