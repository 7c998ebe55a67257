//! # Flyby: environment, catalog query, and per-object JPL lookups
//!
//! This module defines the [`Flyby`](crate::flyby::Flyby) struct, the central façade that wires together:
//!
//! 1. **Environment state** ([`FlybyEnv`](crate::env_state::FlybyEnv)) — the shared HTTP client.
//! 2. **Close-approach catalog access** — a configured [`CadQuery`](crate::jpl_request::cad::CadQuery)
//!    resolved against the CAD API.
//! 3. **Per-object lookups** — Horizons state vectors, SBDB physical parameters and Sentry
//!    risk inputs, exposed through the [`DataAccess`](crate::data_access::DataAccess) trait.
//!
//! Nothing is fetched or computed at construction time: [`Flyby::new`] only wires the
//! pieces, and every fetch happens behind an explicit call. The batch pipeline itself is
//! pure: [`ApproachBatch::build`](crate::approach::batch::ApproachBatch::build) accepts
//! any [`DataAccess`] implementation, of which `Flyby` is the JPL-backed one.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use flyby::flyby::Flyby;
//! use flyby::jpl_request::cad::CadQuery;
//!
//! let flyby = Flyby::new(CadQuery::default());
//!
//! // One round trip for the catalog, then per-object lookups during aggregation.
//! let batch = flyby.build_batch().unwrap();
//!
//! for identifier in batch.list_identifiers() {
//!     let result = batch.get_result(identifier).unwrap();
//!     println!("{identifier}: r = {} AU", result.position.r);
//! }
//! ```

use crate::approach::batch::ApproachBatch;
use crate::approach::{CloseApproachRecord, PhysicalParameters};
use crate::constants::MJD;
use crate::data_access::DataAccess;
use crate::env_state::FlybyEnv;
use crate::flyby_errors::FlybyError;
use crate::geometry::StateVector;
use crate::jpl_request::cad::{CadQuery, CadTable};
use crate::jpl_request::{horizons, sbdb, sentry};
use crate::risk::RiskInputs;

#[derive(Debug, Clone)]
pub struct Flyby {
    env_state: FlybyEnv,
    cad_query: CadQuery,
}

impl Default for Flyby {
    fn default() -> Self {
        Self::new(CadQuery::default())
    }
}

impl Flyby {
    /// Construct a new [`Flyby`] context with the given catalog query.
    ///
    /// Only the HTTP client is initialized here; no network request is made until a
    /// fetch method is called.
    pub fn new(cad_query: CadQuery) -> Self {
        Flyby {
            env_state: FlybyEnv::new(),
            cad_query,
        }
    }

    pub fn cad_query(&self) -> &CadQuery {
        &self.cad_query
    }

    /// Fetch the configured slice of the close-approach catalog.
    ///
    /// Return
    /// ------
    /// * The catalogued close approaches in catalog order, malformed rows skipped.
    pub fn fetch_close_approaches(&self) -> Result<Vec<CloseApproachRecord>, FlybyError> {
        let raw = self.env_state.get_from_url(&self.cad_query.url())?;
        let table: CadTable = serde_json::from_str(&raw)?;
        table.close_approaches()
    }

    /// Fetch the catalog and run the full geometry-and-risk pipeline over it.
    pub fn build_batch(&self) -> Result<ApproachBatch, FlybyError> {
        let records = self.fetch_close_approaches()?;
        Ok(ApproachBatch::build(&records, self))
    }
}

impl DataAccess for Flyby {
    fn state_vector(
        &self,
        designation: &str,
        epoch: MJD,
        include_velocity: bool,
    ) -> Result<Option<StateVector>, FlybyError> {
        horizons::lookup_state_vector(&self.env_state, designation, epoch, include_velocity)
    }

    fn physical_parameters(
        &self,
        designation: &str,
    ) -> Result<Option<PhysicalParameters>, FlybyError> {
        sbdb::lookup_physical_parameters(&self.env_state, designation)
    }

    fn risk_inputs(&self, designation: &str) -> Result<Option<RiskInputs>, FlybyError> {
        sentry::lookup_risk_inputs(&self.env_state, designation)
    }
}
