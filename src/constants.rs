//! # Constants and type definitions for Flyby
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `Flyby` library.
//!
//! ## Overview
//!
//! - Astronomical constants and unit conversions (AU ↔ km, days ↔ seconds)
//! - Default physical assumptions of the impact-risk estimator
//! - Core type aliases used across the crate
//!
//! These definitions are used by the geometry engine, the risk estimator, and the JPL
//! data-access layer.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Conversion factor from AU/day to km/s
pub const AUDAY_TO_KMS: f64 = AU / SECONDS_PER_DAY;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2_400_000.5;

// -------------------------------------------------------------------------------------------------
// Impact-risk estimator defaults
// -------------------------------------------------------------------------------------------------

/// Geometric albedo assumed when converting absolute magnitude to diameter
pub const DEFAULT_ALBEDO: f64 = 0.14;

/// Relative velocity at infinity (km/s) assumed when Sentry reports none
pub const DEFAULT_V_INF: f64 = 17.0;

/// Bulk density (kg/m³) assumed for the kinetic-energy estimate
pub const DEFAULT_DENSITY: f64 = 3000.0;

/// Absolute magnitude fallback when Sentry reports none
pub const DEFAULT_H_MAG: f64 = 999.0;

/// Joules per megaton of TNT equivalent
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Velocity in kilometers per second
pub type KmPerSec = f64;
/// Velocity in astronomical units per day
pub type AuPerDay = f64;
/// Impact energy in megatons of TNT equivalent
pub type Megaton = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

/// Primary designation of a small body (e.g. `"99942"`, `"2024 YR4"`)
pub type Designation = String;
