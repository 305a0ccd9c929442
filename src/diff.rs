//! Orientation differences and axis-angle extraction.
//!
//! Unit quaternions double-cover the rotation group: `q` and `-q` describe
//! the same physical rotation. Every function here canonicalizes the sign of
//! its result (scalar part non-negative) so that the extracted rotation angle
//! lands in [0, π], the minimal rotation separating two orientations.

use nalgebra::{UnitQuaternion, Vector3};

/// Force the scalar part non-negative, returning a new quaternion.
///
/// `q` and `-q` are the same rotation; the non-negative-scalar representative
/// is the one whose extracted angle is the shorter of the two.
fn canonicalize(q: UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    if q.scalar() < 0.0 {
        UnitQuaternion::new_unchecked(-q.into_inner())
    } else {
        q
    }
}

/// Relative rotation `q1 * q2⁻¹`, sign-canonicalized.
///
/// The result rotates orientation `q2` onto orientation `q1`; its scalar
/// part is always non-negative so [`quat_to_axis_angle`] reports the minimal
/// angle between the two orientations.
pub fn quat_diff(q1: UnitQuaternion<f64>, q2: UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    canonicalize(q1 * q2.inverse())
}

/// Minimal rotation angle separating two orientations, in [0, π].
///
/// Symmetric in its arguments and zero (up to floating-point error) when the
/// orientations coincide.
pub fn quat_angular_diff(q1: UnitQuaternion<f64>, q2: UnitQuaternion<f64>) -> f64 {
    quat_to_axis_angle(quat_diff(q1, q2)).1
}

/// Decompose a unit quaternion into a unit rotation axis and an angle.
///
/// The quaternion is sign-canonicalized first and its scalar part clamped to
/// [−1, 1] before the arccos, so the returned angle is always in [0, π] even
/// when floating-point drift pushes the scalar part slightly out of range.
///
/// # Returns
///
/// `(axis, angle)` with `angle = 2·acos(w)`. At zero angle the rotation axis
/// is undefined; the conventional `(0, 0, 1)` is returned so callers never
/// see a division by zero.
pub fn quat_to_axis_angle(q: UnitQuaternion<f64>) -> (Vector3<f64>, f64) {
    let q = canonicalize(q);
    let w = q.scalar().clamp(-1.0, 1.0);
    let angle = 2.0 * w.acos();

    let half_sin = (angle / 2.0).sin();
    let axis = if half_sin != 0.0 {
        q.imag() / half_sin
    } else {
        Vector3::z()
    };

    (axis, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Quaternion, Unit};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn quat(axis: Vector3<f64>, angle: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis), angle)
    }

    #[test]
    fn test_identity_axis_angle() {
        let (axis, angle) = quat_to_axis_angle(UnitQuaternion::identity());

        assert_relative_eq!(angle, 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_z_rotation_axis_angle() {
        // [0, 0, sin(π/4), cos(π/4)] is a 90° rotation about z
        let q = UnitQuaternion::new_unchecked(Quaternion::new(
            FRAC_PI_4.cos(),
            0.0,
            0.0,
            FRAC_PI_4.sin(),
        ));
        let (axis, angle) = quat_to_axis_angle(q);

        assert_relative_eq!(angle, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(axis.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let cases = [
            (Vector3::new(1.0, 0.0, 0.0), 0.3),
            (Vector3::new(0.0, 1.0, 0.0), 1.7),
            (Vector3::new(1.0, -2.0, 0.5), 2.9),
            (Vector3::new(-1.0, 1.0, 1.0), 0.01),
        ];

        for (axis, angle) in cases {
            let q = quat(axis, angle);
            let (out_axis, out_angle) = quat_to_axis_angle(q);
            let rebuilt = quat(out_axis, out_angle);

            // Equal up to the q/-q sign ambiguity
            let dot = q.into_inner().dot(&rebuilt.into_inner());
            assert_relative_eq!(dot.abs(), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_negated_quaternion_same_decomposition() {
        let q = quat(Vector3::new(0.2, -1.0, 0.4), 1.2);
        let neg = UnitQuaternion::new_unchecked(-q.into_inner());

        let (axis_a, angle_a) = quat_to_axis_angle(q);
        let (axis_b, angle_b) = quat_to_axis_angle(neg);

        assert_relative_eq!(angle_a, angle_b, epsilon = 1e-12);
        assert_relative_eq!(axis_a.x, axis_b.x, epsilon = 1e-12);
        assert_relative_eq!(axis_a.y, axis_b.y, epsilon = 1e-12);
        assert_relative_eq!(axis_a.z, axis_b.z, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_with_self_is_identity() {
        let q = quat(Vector3::new(0.3, 0.4, 0.5), 2.1);
        let d = quat_diff(q, q);

        assert_relative_eq!(d.scalar(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.imag().norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_scalar_non_negative() {
        // A pair whose raw product has negative scalar part
        let q1 = quat(Vector3::x(), 3.0);
        let q2 = quat(Vector3::x(), -3.0);
        let d = quat_diff(q1, q2);

        assert!(d.scalar() >= 0.0);
    }

    #[test]
    fn test_angular_diff_zero_on_equal() {
        let q = quat(Vector3::new(1.0, 2.0, 3.0), 0.7);
        assert_relative_eq!(quat_angular_diff(q, q), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angular_diff_known_angle() {
        let q1 = quat(Vector3::z(), 0.0);
        let q2 = quat(Vector3::z(), 1.3);
        assert_relative_eq!(quat_angular_diff(q1, q2), 1.3, epsilon = 1e-10);
    }

    #[test]
    fn test_angular_diff_symmetric_and_bounded() {
        let pairs = [
            (quat(Vector3::x(), 0.4), quat(Vector3::y(), 2.8)),
            (quat(Vector3::z(), 3.1), quat(Vector3::new(1.0, 1.0, 0.0), 0.2)),
            (quat(Vector3::new(0.1, 0.9, 0.3), 1.5), quat(Vector3::y(), 1.5)),
        ];

        for (q1, q2) in pairs {
            let d12 = quat_angular_diff(q1, q2);
            let d21 = quat_angular_diff(q2, q1);

            assert_relative_eq!(d12, d21, epsilon = 1e-10);
            assert!((0.0..=PI).contains(&d12));
        }
    }

    #[test]
    fn test_angular_diff_takes_shorter_arc() {
        // 350° apart around z is really 10° the other way
        let q1 = quat(Vector3::z(), 0.0);
        let q2 = quat(Vector3::z(), 350.0_f64.to_radians());

        assert_relative_eq!(
            quat_angular_diff(q1, q2),
            10.0_f64.to_radians(),
            epsilon = 1e-10
        );
    }
}
