//! # Geometry engine
//!
//! Pure conversions from a geocentric Cartesian state vector to spherical coordinates
//! ([`spherical`]) and to a launch-trajectory description ([`trajectory`]). Both are total
//! functions over their domain: the degenerate zero-magnitude cases return exact zeros
//! instead of NaN.

pub mod spherical;
pub mod trajectory;

use nalgebra::Vector3;

use crate::constants::MJD;
use self::spherical::{cartesian_to_spherical, SphericalPosition};
use self::trajectory::{launch_angles, TrajectoryAngles};

/// Geocentric state of an object at a given epoch.
///
/// The position is expressed in astronomical units, the velocity in AU/day, both in the
/// ICRF frame as returned by the Horizons vector query. The velocity is optional: the
/// ephemeris lookup may be asked for the position alone.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// Epoch the state was evaluated at (MJD, UTC frame)
    pub epoch: MJD,
    /// Position vector in AU
    pub position: Vector3<f64>,
    /// Velocity vector in AU/day, when requested from the ephemeris
    pub velocity: Option<Vector3<f64>>,
}

impl StateVector {
    pub fn new(epoch: MJD, position: Vector3<f64>) -> Self {
        StateVector {
            epoch,
            position,
            velocity: None,
        }
    }

    pub fn with_velocity(epoch: MJD, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        StateVector {
            epoch,
            position,
            velocity: Some(velocity),
        }
    }

    /// Spherical coordinates of the position component.
    pub fn spherical(&self) -> SphericalPosition {
        cartesian_to_spherical(&self.position)
    }

    /// Launch-trajectory angles, available only when the state carries a velocity.
    pub fn trajectory(&self) -> Option<TrajectoryAngles> {
        self.velocity
            .as_ref()
            .map(|velocity| launch_angles(&self.position, velocity, &self.spherical()))
    }
}
