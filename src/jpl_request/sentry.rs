use serde_json::Value;

use crate::constants::{DEFAULT_H_MAG, DEFAULT_V_INF};
use crate::env_state::FlybyEnv;
use crate::flyby_errors::FlybyError;
use crate::jpl_request::{query_encode, value_to_f64};
use crate::risk::RiskInputs;

pub const SENTRY_API_URL: &str = "https://ssd-api.jpl.nasa.gov/sentry.api";

/// Sentry has served its per-object summary fields both at the top level of the response
/// and nested under a `summary` object; accept either location.
fn field_f64(data: &Value, name: &str) -> Option<f64> {
    data.get(name)
        .or_else(|| data.get("summary").and_then(|summary| summary.get(name)))
        .and_then(value_to_f64)
}

/// Risk inputs out of a parsed Sentry response.
///
/// An object Sentry does not track answers with an `error` payload: no data. For a
/// tracked object, individually missing fields fall back to the conventional defaults
/// (H = 999, probability 0, velocity 17 km/s) so one absent field does not discard the
/// rest of the entry.
pub(crate) fn extract_risk_inputs(data: &Value) -> Option<RiskInputs> {
    if data.get("error").is_some() {
        return None;
    }
    Some(RiskInputs {
        h_mag: field_f64(data, "h").unwrap_or(DEFAULT_H_MAG),
        ip_max: field_f64(data, "ip_max").unwrap_or(0.0),
        v_inf: field_f64(data, "v_inf").unwrap_or(DEFAULT_V_INF),
        ts_max: field_f64(data, "ts_max").map(|class| class as u8),
    })
}

/// Look up the Sentry risk inputs of an object.
pub(crate) fn lookup_risk_inputs(
    env_state: &FlybyEnv,
    designation: &str,
) -> Result<Option<RiskInputs>, FlybyError> {
    let url = format!("{SENTRY_API_URL}?des={}", query_encode(designation));
    let raw = match env_state.get_from_url(&url) {
        Ok(raw) => raw,
        Err(FlybyError::UreqHttpError(ureq::Error::StatusCode(_))) => return Ok(None),
        Err(err) => return Err(err),
    };
    let data: Value = serde_json::from_str(&raw)?;
    Ok(extract_risk_inputs(&data))
}

#[cfg(test)]
mod sentry_test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_risk_inputs_top_level() {
        let data = json!({
            "des": "99942",
            "fullname": "99942 Apophis (2004 MN4)",
            "h": "19.09",
            "ip_max": "2.7e-5",
            "v_inf": "5.84",
            "ts_max": "0"
        });
        let inputs = extract_risk_inputs(&data).unwrap();
        assert_eq!(inputs.h_mag, 19.09);
        assert_eq!(inputs.ip_max, 2.7e-5);
        assert_eq!(inputs.v_inf, 5.84);
        assert_eq!(inputs.ts_max, Some(0));
    }

    #[test]
    fn test_extract_risk_inputs_nested_summary() {
        let data = json!({
            "summary": {"h": 23.9, "ip_max": 1.2e-3, "v_inf": 13.1, "ts_max": 1},
            "data": []
        });
        let inputs = extract_risk_inputs(&data).unwrap();
        assert_eq!(inputs.h_mag, 23.9);
        assert_eq!(inputs.ip_max, 1.2e-3);
        assert_eq!(inputs.v_inf, 13.1);
        assert_eq!(inputs.ts_max, Some(1));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let data = json!({"des": "433"});
        let inputs = extract_risk_inputs(&data).unwrap();
        assert_eq!(inputs.h_mag, 999.0);
        assert_eq!(inputs.ip_max, 0.0);
        assert_eq!(inputs.v_inf, 17.0);
        assert_eq!(inputs.ts_max, None);
    }

    #[test]
    fn test_untracked_object_is_none() {
        let data = json!({"error": "specified object removed"});
        assert!(extract_risk_inputs(&data).is_none());
    }
}
