use std::f64::consts::PI;

use crate::constants::{Kilometer, KmPerSec, Megaton, DEFAULT_ALBEDO, JOULES_PER_MEGATON};

/// Estimate a diameter from an absolute magnitude.
///
/// Standard H-to-diameter relation: `D_km = 1329 / sqrt(albedo) * 10^(-0.2 H)`.
///
/// Arguments
/// ---------
/// * `h_mag`: absolute magnitude H
/// * `albedo`: geometric albedo
///
/// Return
/// ------
/// * Estimated diameter in km
pub fn estimate_diameter_km(h_mag: f64, albedo: f64) -> Kilometer {
    1329.0 / albedo.sqrt() * 10f64.powf(-0.2 * h_mag)
}

/// Estimate the kinetic impact energy of an object from its absolute magnitude.
///
/// The body is treated as a uniform sphere of the H-derived diameter (default albedo) and
/// the given bulk density; the kinetic energy `½ m v²` is converted from joules to
/// megatons of TNT.
///
/// Arguments
/// ---------
/// * `h_mag`: absolute magnitude H
/// * `v_inf`: relative velocity at infinity in km/s
/// * `density`: bulk density in kg/m³
///
/// Return
/// ------
/// * Estimated impact energy in megatons TNT
pub fn estimate_energy_megatons(h_mag: f64, v_inf: KmPerSec, density: f64) -> Megaton {
    let d_km = estimate_diameter_km(h_mag, DEFAULT_ALBEDO);
    let radius_m = (d_km * 1000.0) / 2.0;
    let mass = (4.0 / 3.0) * PI * radius_m.powi(3) * density;
    let e_joules = 0.5 * mass * (v_inf * 1000.0).powi(2);
    e_joules / JOULES_PER_MEGATON
}

#[cfg(test)]
mod impact_test {
    use approx::assert_relative_eq;

    use crate::constants::{DEFAULT_DENSITY, DEFAULT_V_INF};

    use super::*;

    #[test]
    fn test_estimate_diameter_km() {
        assert_relative_eq!(
            estimate_diameter_km(18.0, 0.14),
            0.8921974201263019,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            estimate_diameter_km(22.0, 0.14),
            0.1414037617489543,
            epsilon = 1e-12
        );
        // A brighter albedo shrinks the estimate for the same H.
        assert_relative_eq!(
            estimate_diameter_km(25.2, 0.25),
            0.024241248110080077,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_diameter_decreases_with_h() {
        let mut previous = f64::INFINITY;
        for h in [10.0, 14.0, 18.0, 22.0, 26.0, 30.0] {
            let d = estimate_diameter_km(h, 0.14);
            assert!(d < previous);
            previous = d;
        }
    }

    #[test]
    fn test_estimate_energy_megatons() {
        assert_relative_eq!(
            estimate_energy_megatons(18.0, DEFAULT_V_INF, DEFAULT_DENSITY),
            38528.219331137276,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            estimate_energy_megatons(22.0, DEFAULT_V_INF, DEFAULT_DENSITY),
            153.38360384383597,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_energy_scales_with_velocity_squared() {
        let slow = estimate_energy_megatons(20.0, 10.0, DEFAULT_DENSITY);
        let fast = estimate_energy_megatons(20.0, 20.0, DEFAULT_DENSITY);
        assert_relative_eq!(fast / slow, 4.0, epsilon = 1e-12);
    }
}
