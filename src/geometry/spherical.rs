use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::{AstronomicalUnit, Radian};

/// Spherical coordinates of a geocentric position.
///
/// `theta` is the colatitude measured from the +z axis, `phi` the azimuth measured in the
/// x-y plane from the +x axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphericalPosition {
    /// Radial distance in AU, always ≥ 0
    pub r: AstronomicalUnit,
    /// Polar angle (colatitude) in [0, π]
    pub theta: Radian,
    /// Azimuthal angle in (−π, π]
    pub phi: Radian,
}

/// Convert a Cartesian position to spherical coordinates.
///
/// The zero vector has no defined direction; it maps to `(0, 0, 0)` exactly, which also
/// keeps the colatitude formula free of a division by zero.
///
/// Arguments
/// ---------
/// * `position`: Cartesian position vector in AU
///
/// Return
/// ------
/// * The corresponding [`SphericalPosition`]
pub fn cartesian_to_spherical(position: &Vector3<f64>) -> SphericalPosition {
    let r = position.norm();
    if r == 0.0 {
        return SphericalPosition {
            r: 0.0,
            theta: 0.0,
            phi: 0.0,
        };
    }

    SphericalPosition {
        r,
        theta: (position.z / r).acos(),
        phi: position.y.atan2(position.x),
    }
}

#[cfg(test)]
mod spherical_test {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_unit_x_axis() {
        let sph = cartesian_to_spherical(&Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(sph.r, 1.0);
        assert_eq!(sph.theta, FRAC_PI_2);
        assert_eq!(sph.phi, 0.0);
    }

    #[test]
    fn test_zero_vector_is_all_zero() {
        let sph = cartesian_to_spherical(&Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(sph.r, 0.0);
        assert_eq!(sph.theta, 0.0);
        assert_eq!(sph.phi, 0.0);
    }

    #[test]
    fn test_known_values() {
        let sph = cartesian_to_spherical(&Vector3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(sph.r, 1.7320508075688772, epsilon = 1e-15);
        assert_relative_eq!(sph.theta, 0.9553166181245092, epsilon = 1e-15);
        assert_relative_eq!(sph.phi, 0.7853981633974483, epsilon = 1e-15);

        let sph = cartesian_to_spherical(&Vector3::new(1.0, -2.0, 2.0));
        assert_relative_eq!(sph.r, 3.0, epsilon = 1e-15);
        assert_relative_eq!(sph.theta, 0.8410686705679303, epsilon = 1e-15);
        assert_relative_eq!(sph.phi, -1.1071487177940904, epsilon = 1e-15);
    }

    #[test]
    fn test_poles() {
        let north = cartesian_to_spherical(&Vector3::new(0.0, 0.0, 2.5));
        assert_eq!(north.theta, 0.0);

        let south = cartesian_to_spherical(&Vector3::new(0.0, 0.0, -2.5));
        assert_relative_eq!(south.theta, PI, epsilon = 1e-15);
    }

    #[test]
    fn test_angle_ranges() {
        let samples = [
            Vector3::new(0.3, -0.7, 1.2),
            Vector3::new(-1.0, -1.0, -1.0),
            Vector3::new(1e-8, 2e-8, -3.0),
            Vector3::new(-0.5, 0.0, 0.0),
            Vector3::new(42.0, -17.0, 0.001),
        ];
        for position in &samples {
            let sph = cartesian_to_spherical(position);
            assert!(sph.r > 0.0);
            assert!((0.0..=PI).contains(&sph.theta));
            assert!(sph.phi > -PI && sph.phi <= PI);
        }
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            Vector3::new(0.9, -0.2, 0.4),
            Vector3::new(-2.0, 3.0, -1.5),
            Vector3::new(0.0, 5.0, 0.0),
            Vector3::new(1e-6, -1e-6, 1e-6),
        ];
        for position in &samples {
            let sph = cartesian_to_spherical(position);
            let rebuilt = Vector3::new(
                sph.r * sph.theta.sin() * sph.phi.cos(),
                sph.r * sph.theta.sin() * sph.phi.sin(),
                sph.r * sph.theta.cos(),
            );
            assert_relative_eq!(rebuilt.x, position.x, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(rebuilt.y, position.y, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(rebuilt.z, position.z, epsilon = 1e-12, max_relative = 1e-12);
        }
    }
}
