//! quat-math - Quaternion orientation utilities
//!
//! This crate provides small numerical helpers over unit quaternions used in
//! attitude estimation and orientation sampling, including:
//!
//! - **Difference/Angle** - quaternion difference, minimal angular separation,
//!   and axis-angle extraction with sign canonicalization
//! - **Sampling** - random orientations within a bounded angular offset of a
//!   reference orientation, via inverse-transform sampling
//! - **Angular distribution** - the closed-form density/CDF of the rotation
//!   angle of uniformly random unit quaternions
//! - **Batch operations** - element-wise Hamilton products and projected
//!   (renormalized) averaging over batches of quaternions
//!
//! Quaternion algebra itself (multiplication, inversion, axis-angle
//! construction) comes from `nalgebra`; this crate only layers orientation
//! semantics on top of it. Components are stored in nalgebra order, scalar
//! part last: `coords = [x, y, z, w]`.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Unit, UnitQuaternion, Vector3};
//! use quat_math::{quat_angular_diff, random_quat_near};
//! use rand::SeedableRng;
//!
//! let init = UnitQuaternion::from_axis_angle(&Unit::new_normalize(Vector3::x()), 0.3);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! // Sample an orientation at most 0.1 rad away from `init`
//! let (near, _offset) = random_quat_near(init, 0.1, &mut rng).unwrap();
//! assert!(quat_angular_diff(near, init) <= 0.1 + 1e-9);
//! ```

pub mod angular;
pub mod batch;
pub mod diff;
pub mod inverse_cdf;
pub mod sample;

// Re-export commonly used items
pub use angular::{angular_cdf, angular_pdf, inv_angular_pdf, DEFAULT_PDF_EPSILON};
pub use batch::{batch_multiply, projected_average, BatchError};
pub use diff::{quat_angular_diff, quat_diff, quat_to_axis_angle};
pub use inverse_cdf::{InverseCdf, LookupError};
pub use sample::{random_quat_near, SampleError};
