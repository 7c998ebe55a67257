use serde::Deserialize;
use tracing::warn;

use crate::approach::CloseApproachRecord;
use crate::flyby_errors::FlybyError;

pub const CAD_API_URL: &str = "https://ssd-api.jpl.nasa.gov/cad.api";

/// Query parameters for the CAD close-approach catalog.
///
/// The defaults select potentially hazardous NEOs approaching Earth, the same filter the
/// catalog is normally browsed with. An optional date window narrows the search; the API
/// accepts `"now"` as well as `YYYY-MM-DD` dates.
#[derive(Debug, Clone)]
pub struct CadQuery {
    pub neo: bool,
    pub pha: bool,
    pub body: String,
    pub date_min: Option<String>,
    pub date_max: Option<String>,
}

impl Default for CadQuery {
    fn default() -> Self {
        CadQuery {
            neo: true,
            pha: true,
            body: "Earth".to_string(),
            date_min: None,
            date_max: None,
        }
    }
}

impl CadQuery {
    pub fn url(&self) -> String {
        let mut url = format!(
            "{CAD_API_URL}?neo={}&pha={}&body={}",
            self.neo, self.pha, self.body
        );
        if let Some(date_min) = &self.date_min {
            url.push_str(&format!("&date-min={date_min}"));
        }
        if let Some(date_max) = &self.date_max {
            url.push_str(&format!("&date-max={date_max}"));
        }
        url
    }
}

/// Tabular payload of the CAD API: column names plus rows of string cells.
#[derive(Debug, Deserialize)]
pub struct CadTable {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<Option<String>>>,
}

impl CadTable {
    /// Extract the close-approach records from the table.
    ///
    /// The `des` and `cd` columns must both be present in the field list; a payload
    /// without them cannot be interpreted at all. Individual rows missing either cell,
    /// or carrying an unparseable date, are skipped with a warning; one bad row must
    /// not cost the rest of the catalog.
    pub fn close_approaches(&self) -> Result<Vec<CloseApproachRecord>, FlybyError> {
        let des_index = self.field_index("des")?;
        let cd_index = self.field_index("cd")?;

        let mut records = Vec::with_capacity(self.data.len());
        for (row_number, row) in self.data.iter().enumerate() {
            let des = row.get(des_index).and_then(|cell| cell.as_deref());
            let cd = row.get(cd_index).and_then(|cell| cell.as_deref());
            let (Some(des), Some(cd)) = (des, cd) else {
                warn!("CAD row {row_number} is missing its designation or date, skipping");
                continue;
            };
            match CloseApproachRecord::new(des, cd) {
                Ok(record) => records.push(record),
                Err(err) => warn!("CAD row {row_number} rejected: {err}"),
            }
        }
        Ok(records)
    }

    fn field_index(&self, name: &str) -> Result<usize, FlybyError> {
        self.fields
            .iter()
            .position(|field| field == name)
            .ok_or_else(|| FlybyError::MissingCadField(name.to_string()))
    }
}
