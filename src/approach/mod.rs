//! # Close-approach records and results
//!
//! Input records from the CAD catalog, per-object physical parameters, and the aggregated
//! per-approach result combining geometry and risk outputs. Aggregation itself lives in
//! [`batch`].

pub mod batch;

use serde::Serialize;

use crate::constants::{Designation, Kilometer, MJD};
use crate::flyby_errors::FlybyError;
use crate::geometry::spherical::SphericalPosition;
use crate::geometry::trajectory::TrajectoryAngles;
use crate::risk::RiskEstimate;
use crate::time::approach_date_to_mjd;

/// One catalogued close approach: the object's primary designation and the approach epoch.
///
/// Validated at construction; a record can only exist with a designation and a parseable
/// date, so malformed catalog rows are rejected before they reach the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproachRecord {
    pub designation: Designation,
    /// Approach date as published by the catalog, `YYYY-Mon-DD HH:MM` UTC
    pub approach_date: String,
    /// The same instant as a Modified Julian Date
    pub epoch: MJD,
}

impl CloseApproachRecord {
    pub fn new(
        designation: impl Into<String>,
        approach_date: impl Into<String>,
    ) -> Result<Self, FlybyError> {
        let designation = designation.into();
        if designation.trim().is_empty() {
            return Err(FlybyError::MalformedRecord(
                "empty object designation".to_string(),
            ));
        }
        let approach_date = approach_date.into();
        let epoch = approach_date_to_mjd(&approach_date)?;
        Ok(CloseApproachRecord {
            designation,
            approach_date,
            epoch,
        })
    }
}

/// Measured physical parameters of an object, from the SBDB lookup.
///
/// Both fields are independently optional: absence means "not measured", never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalParameters {
    /// Radius in km (published diameter halved)
    pub radius_km: Option<Kilometer>,
    /// Bulk density in g/cm³ as published by SBDB
    pub density: Option<f64>,
}

/// The per-object aggregate produced by the batch pipeline.
///
/// Constructed once per close-approach record and read-only thereafter. Trajectory,
/// physical and risk fields are absent when the corresponding upstream data is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseApproachResult {
    pub designation: Designation,
    pub approach_date: String,
    pub epoch: MJD,
    pub position: SphericalPosition,
    pub trajectory: Option<TrajectoryAngles>,
    pub physical: Option<PhysicalParameters>,
    pub risk: Option<RiskEstimate>,
}
