//! # Close-approach batch aggregation
//!
//! [`ApproachBatch::build`] is the single entry point of the computation pipeline: it
//! folds a list of already-fetched [`CloseApproachRecord`]s and a
//! [`DataAccess`](crate::data_access::DataAccess) collaborator into one
//! [`CloseApproachResult`] per resolvable record, in input order.
//!
//! Missing upstream data never aborts the batch. A record whose ephemeris cannot be
//! resolved contributes no result (there is no position to report); missing physical
//! parameters or risk inputs leave the corresponding result fields absent. Lookup
//! failures are logged and degraded the same way.
//!
//! Per-designation lookup goes through an index built once here, so `get_result` is O(1)
//! however large the batch is.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::approach::{CloseApproachRecord, CloseApproachResult};
use crate::constants::Designation;
use crate::data_access::DataAccess;
use crate::risk::RiskEstimate;

#[derive(Debug, Clone, Default)]
pub struct ApproachBatch {
    results: Vec<CloseApproachResult>,
    by_designation: HashMap<Designation, usize>,
}

impl ApproachBatch {
    /// Run the geometry and risk pipelines over a list of close-approach records.
    ///
    /// Arguments
    /// ---------
    /// * `records`: the catalogued close approaches, in catalog order
    /// * `provider`: the data-access collaborator answering the per-object lookups
    ///
    /// Return
    /// ------
    /// * The aggregated batch. Records whose ephemeris is unavailable are skipped;
    ///   every other upstream gap degrades to an absent field in that record's result.
    pub fn build<P: DataAccess>(records: &[CloseApproachRecord], provider: &P) -> Self {
        let mut results: Vec<CloseApproachResult> = Vec::with_capacity(records.len());
        let mut by_designation: HashMap<Designation, usize> =
            HashMap::with_capacity(records.len());

        for record in records {
            let state = match provider.state_vector(&record.designation, record.epoch, true) {
                Ok(Some(state)) => state,
                Ok(None) => {
                    debug!(
                        "no ephemeris for {} at {}, skipping record",
                        record.designation, record.approach_date
                    );
                    continue;
                }
                Err(err) => {
                    warn!(
                        "ephemeris lookup failed for {}: {err}, skipping record",
                        record.designation
                    );
                    continue;
                }
            };

            let physical = provider
                .physical_parameters(&record.designation)
                .unwrap_or_else(|err| {
                    warn!(
                        "physical parameter lookup failed for {}: {err}",
                        record.designation
                    );
                    None
                });

            let risk = provider
                .risk_inputs(&record.designation)
                .unwrap_or_else(|err| {
                    warn!("risk input lookup failed for {}: {err}", record.designation);
                    None
                })
                .map(|inputs| RiskEstimate::from_inputs(&inputs));

            let index = results.len();
            results.push(CloseApproachResult {
                designation: record.designation.clone(),
                approach_date: record.approach_date.clone(),
                epoch: record.epoch,
                position: state.spherical(),
                trajectory: state.trajectory(),
                physical,
                risk,
            });
            // An object can approach more than once in a batch; the first approach wins
            // the index slot so lookups stay deterministic.
            by_designation
                .entry(record.designation.clone())
                .or_insert(index);
        }

        ApproachBatch {
            results,
            by_designation,
        }
    }

    /// Object identifiers of the aggregated results, in input order.
    pub fn list_identifiers(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|result| result.designation.as_str())
    }

    /// Indexed lookup of a result by designation.
    pub fn get_result(&self, designation: &str) -> Option<&CloseApproachResult> {
        self.by_designation
            .get(designation)
            .map(|&index| &self.results[index])
    }

    pub fn results(&self) -> &[CloseApproachResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
