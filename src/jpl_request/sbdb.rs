use serde::Deserialize;

use crate::approach::PhysicalParameters;
use crate::env_state::FlybyEnv;
use crate::flyby_errors::FlybyError;
use crate::jpl_request::{query_encode, value_to_f64};

pub const SBDB_API_URL: &str = "https://ssd-api.jpl.nasa.gov/sbdb.api";

/// The slice of the SBDB response this lookup cares about: the physical-parameter list.
#[derive(Debug, Deserialize)]
pub(crate) struct SbdbResponse {
    #[serde(default)]
    phys_par: Vec<PhysParEntry>,
}

#[derive(Debug, Deserialize)]
struct PhysParEntry {
    name: String,
    #[serde(default)]
    value: Option<serde_json::Value>,
}

impl SbdbResponse {
    fn value_of(&self, name: &str) -> Option<f64> {
        self.phys_par
            .iter()
            .find(|entry| entry.name == name)
            .and_then(|entry| entry.value.as_ref())
            .and_then(value_to_f64)
    }
}

/// Physical parameters out of a parsed SBDB response. The published diameter is halved
/// into a radius; `None` when the database measured neither diameter nor density.
pub(crate) fn extract_physical_parameters(response: &SbdbResponse) -> Option<PhysicalParameters> {
    let radius_km = response.value_of("diameter").map(|diameter| diameter / 2.0);
    let density = response.value_of("density");
    if radius_km.is_none() && density.is_none() {
        return None;
    }
    Some(PhysicalParameters { radius_km, density })
}

/// Look up the measured radius and bulk density of an object in the Small-Body Database.
pub(crate) fn lookup_physical_parameters(
    env_state: &FlybyEnv,
    designation: &str,
) -> Result<Option<PhysicalParameters>, FlybyError> {
    let url = format!(
        "{SBDB_API_URL}?sstr={}&phys-par=1",
        query_encode(designation)
    );
    let raw = match env_state.get_from_url(&url) {
        Ok(raw) => raw,
        // SBDB answers an unknown designation with an HTTP error status.
        Err(FlybyError::UreqHttpError(ureq::Error::StatusCode(_))) => return Ok(None),
        Err(err) => return Err(err),
    };
    let response: SbdbResponse = serde_json::from_str(&raw)?;
    Ok(extract_physical_parameters(&response))
}
