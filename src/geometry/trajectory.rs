use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::{KmPerSec, Radian, AUDAY_TO_KMS};
use crate::geometry::spherical::SphericalPosition;

/// Launch-trajectory description of an object at its close-approach position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryAngles {
    /// Scalar speed in km/s
    pub speed_kms: KmPerSec,
    /// Azimuth of the velocity in the local horizon plane, in (−π, π]
    pub launch_x: Radian,
    /// Flight-path angle between the velocity and the local horizontal, in [−π/2, π/2]
    pub launch_y: Radian,
}

impl TrajectoryAngles {
    fn zero() -> Self {
        TrajectoryAngles {
            speed_kms: 0.0,
            launch_x: 0.0,
            launch_y: 0.0,
        }
    }
}

/// Derive the launch angles of a velocity vector at a given position.
///
/// The flight-path angle is the elevation of the velocity above the local horizontal plane,
/// `arcsin(p·v / (|p||v|))`. The azimuth is measured in the topocentric horizon basis built
/// from the position's spherical angles, `atan2(v·east, v·north)` with
/// `east = (−sin φ, cos φ, 0)` and `north = (−cos θ cos φ, −cos θ sin φ, sin θ)`.
///
/// If either vector has zero magnitude the direction is undefined and all three fields are
/// returned as exact zeros. The dot-product ratio is clamped to [−1, 1] before the inverse
/// sine: for exactly parallel or anti-parallel vectors the ratio can land outside the
/// domain by one ulp.
///
/// Arguments
/// ---------
/// * `position`: position vector in AU
/// * `velocity`: velocity vector in AU/day
/// * `spherical`: the spherical coordinates already computed for `position`
///
/// Return
/// ------
/// * The [`TrajectoryAngles`], with the speed converted to km/s
pub fn launch_angles(
    position: &Vector3<f64>,
    velocity: &Vector3<f64>,
    spherical: &SphericalPosition,
) -> TrajectoryAngles {
    let position_magnitude = position.norm();
    let velocity_magnitude = velocity.norm();
    if position_magnitude == 0.0 || velocity_magnitude == 0.0 {
        return TrajectoryAngles::zero();
    }

    let ratio = position.dot(velocity) / (position_magnitude * velocity_magnitude);
    let launch_y = ratio.clamp(-1.0, 1.0).asin();

    let (theta, phi) = (spherical.theta, spherical.phi);
    let east = Vector3::new(-phi.sin(), phi.cos(), 0.0);
    let north = Vector3::new(
        -theta.cos() * phi.cos(),
        -theta.cos() * phi.sin(),
        theta.sin(),
    );
    let launch_x = velocity.dot(&east).atan2(velocity.dot(&north));

    TrajectoryAngles {
        speed_kms: velocity_magnitude * AUDAY_TO_KMS,
        launch_x,
        launch_y,
    }
}
