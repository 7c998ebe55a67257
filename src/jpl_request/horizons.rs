use itertools::Itertools;
use nalgebra::Vector3;
use regex::Regex;

use crate::constants::MJD;
use crate::env_state::FlybyEnv;
use crate::flyby_errors::FlybyError;
use crate::geometry::StateVector;
use crate::time::mjd_utc_to_jd_tdb;

pub const HORIZONS_API_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons_file.api";

/// One line of the Horizons vector table. Position components are in AU, velocity
/// components in AU/day; the velocity columns exist only for `VEC_TABLE=2` queries.
#[derive(Debug, serde::Deserialize, PartialEq)]
pub(crate) struct StateRecord {
    #[serde(rename = "JDTDB")]
    pub(crate) jd: f64,
    #[serde(rename = "CalendarDate(TDB)")]
    pub(crate) date: String,
    #[serde(rename = "X")]
    pub(crate) x: f64,
    #[serde(rename = "Y")]
    pub(crate) y: f64,
    #[serde(rename = "Z")]
    pub(crate) z: f64,
    #[serde(rename = "VX")]
    pub(crate) vx: Option<f64>,
    #[serde(rename = "VY")]
    pub(crate) vy: Option<f64>,
    #[serde(rename = "VZ")]
    pub(crate) vz: Option<f64>,
}

impl StateRecord {
    pub(crate) fn state_vector(&self, epoch: MJD) -> StateVector {
        let position = Vector3::new(self.x, self.y, self.z);
        match (self.vx, self.vy, self.vz) {
            (Some(vx), Some(vy), Some(vz)) => {
                StateVector::with_velocity(epoch, position, Vector3::new(vx, vy, vz))
            }
            _ => StateVector::new(epoch, position),
        }
    }
}

fn jd_tlist(jd_list: &[f64]) -> String {
    jd_list.iter().join(",")
}

/// Request the JPL Horizons API for the geocentric state vector of a small body.
///
/// Argument
/// --------
/// * `designation`: primary designation of the object
/// * `jd_tdb_list`: query epochs as julian dates in the TDB frame
/// * `include_velocity`: request the velocity components along with the position
///
/// Return
/// ------
/// * The JPL API raw response
pub(crate) fn request_state_vectors(
    env_state: &FlybyEnv,
    designation: &str,
    jd_tdb_list: &[f64],
    include_velocity: bool,
) -> Result<String, FlybyError> {
    let vec_table = if include_velocity { 2 } else { 1 };
    let requested_params = format!(
        "
!$$SOF
COMMAND='DES={designation};'
OBJ_DATA='NO'
MAKE_EPHEM='YES'
TABLE_TYPE='VECTORS'
CENTER='500@399'
TLIST_TYPE=JD
TLIST={}
CSV_FORMAT=YES
REF_SYSTEM=ICRF
OUT_UNITS=AU-D
REF_PLANE=FRAME
VEC_TABLE={vec_table}
",
        jd_tlist(jd_tdb_list)
    );
    env_state.post_form(
        HORIZONS_API_URL,
        [("format", "text"), ("input", requested_params.as_str())],
    )
}

/// Parse the Horizons raw response into state records.
///
/// A response without a `$$SOE` block means Horizons could not resolve the object (or
/// produced no ephemeris for the requested epochs); that is reported as an empty list,
/// not an error. A response that carries the block but does not match the expected table
/// layout is a parse error.
pub(crate) fn deserialize_states(jpl_response: &str) -> Result<Vec<StateRecord>, FlybyError> {
    if !jpl_response.contains("$$SOE") {
        return Ok(Vec::new());
    }

    // regex to match the data part of the jpl horizon response
    let data_regex = Regex::new(r"\$\$SOE\n([^]]*),\n\$\$EOE").unwrap();
    // regex to match the csv header line between the two asterisk rulers
    let header_regex = Regex::new(r"ICRF\n\*{79}\n([^]]*?)\n\*+\n\$\$SOE").unwrap();

    let data_caps = data_regex.captures(jpl_response).ok_or_else(|| {
        FlybyError::HorizonsParseError("no data block between $$SOE and $$EOE".to_string())
    })?;
    let match_data = data_caps[1].replace(' ', "").replace(",\n", "\n");

    let header_caps = header_regex.captures(jpl_response).ok_or_else(|| {
        FlybyError::HorizonsParseError("no csv header before the $$SOE marker".to_string())
    })?;
    let match_header = header_caps[1].replace(' ', "");
    // The header row ends with a separator, which would otherwise read as an empty
    // trailing column.
    let match_header = match_header.strip_suffix(',').unwrap_or(&match_header);

    let data = format!("{match_header}\n{match_data}");
    let mut csv_reader = csv::Reader::from_reader(data.as_bytes());
    csv_reader
        .deserialize::<StateRecord>()
        .map(|record| record.map_err(FlybyError::from))
        .collect()
}

/// Resolve the geocentric state vector of an object at a close-approach epoch.
///
/// The epoch is converted from MJD UTC to the JD TDB argument Horizons expects. Returns
/// `Ok(None)` when the object or epoch is not resolvable.
pub(crate) fn lookup_state_vector(
    env_state: &FlybyEnv,
    designation: &str,
    epoch: MJD,
    include_velocity: bool,
) -> Result<Option<StateVector>, FlybyError> {
    let jd_tdb = mjd_utc_to_jd_tdb(epoch);
    let response = request_state_vectors(env_state, designation, &[jd_tdb], include_velocity)?;
    Ok(deserialize_states(&response)?
        .into_iter()
        .next()
        .map(|record| record.state_vector(epoch)))
}
