//! # JPL SSD data-access layer
//!
//! Implementations of the per-object lookups against the JPL Solar System Dynamics APIs:
//!
//! - [`cad`] — the close-approach catalog (`cad.api`)
//! - [`horizons`] — geocentric state vectors (`horizons_file.api`)
//! - [`sbdb`] — measured physical parameters (`sbdb.api`)
//! - [`sentry`] — impact-risk inputs (`sentry.api`)
//!
//! All requests go through the shared [`crate::env_state::FlybyEnv`] HTTP client.

pub mod cad;
pub mod horizons;
pub mod sbdb;
pub mod sentry;

use serde_json::Value;

/// Lenient numeric extraction: the SSD APIs serve numbers both as JSON numbers and as
/// quoted strings, sometimes switching between the two across objects.
pub(crate) fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Percent-encode the spaces of a provisional designation (e.g. `"2024 YR4"`) for use in
/// a query string.
pub(crate) fn query_encode(designation: &str) -> String {
    designation.replace(' ', "%20")
}
