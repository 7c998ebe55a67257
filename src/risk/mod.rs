//! # Impact-risk estimator
//!
//! Converts the Sentry risk inputs of an object (absolute magnitude, maximum impact
//! probability and relative velocity at infinity) into an estimated impactor diameter,
//! kinetic energy and a coarse Torino-like class. Independent of the geometry engine;
//! the two meet only in the aggregation step.

pub mod impact;
pub mod torino;

use serde::Serialize;

use crate::constants::{Kilometer, KmPerSec, Megaton, DEFAULT_ALBEDO, DEFAULT_DENSITY};
use self::impact::{estimate_diameter_km, estimate_energy_megatons};
use self::torino::approximate_torino;

/// Per-object risk inputs as reported by the Sentry API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInputs {
    /// Absolute magnitude H
    pub h_mag: f64,
    /// Maximum impact probability over all virtual impactors, in [0, 1]
    pub ip_max: f64,
    /// Relative velocity at infinity in km/s
    pub v_inf: KmPerSec,
    /// Official maximum Torino class published by Sentry, when available
    pub ts_max: Option<u8>,
}

/// Derived severity estimate for one object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskEstimate {
    /// Estimated diameter in km, from H at the default albedo
    pub diameter_km: Kilometer,
    /// Estimated kinetic impact energy in megatons TNT
    pub energy_mt: Megaton,
    /// Torino-like class in {0, 1, 2, 3, 4, 5, 6, 8, 10}
    pub torino: u8,
    /// Sentry's official class, for comparison against the estimate
    pub official_torino: Option<u8>,
}

impl RiskEstimate {
    /// Score a set of risk inputs.
    ///
    /// The diameter and energy always use the default albedo and bulk density: measured
    /// physical parameters, when they exist, are reported alongside the estimate rather
    /// than substituted into it.
    pub fn from_inputs(inputs: &RiskInputs) -> Self {
        let energy_mt = estimate_energy_megatons(inputs.h_mag, inputs.v_inf, DEFAULT_DENSITY);
        RiskEstimate {
            diameter_km: estimate_diameter_km(inputs.h_mag, DEFAULT_ALBEDO),
            energy_mt,
            torino: approximate_torino(inputs.ip_max, energy_mt),
            official_torino: inputs.ts_max,
        }
    }
}
