use crate::approach::PhysicalParameters;
use crate::constants::MJD;
use crate::flyby_errors::FlybyError;
use crate::geometry::StateVector;
use crate::risk::RiskInputs;

/// Per-object lookups the aggregation pipeline consumes.
///
/// `Ok(None)` means the upstream holds no data for the object (a normal outcome: many
/// catalogued objects have no measured physical parameters and are not tracked by
/// Sentry). `Err` means the lookup itself failed; the batch builder degrades both the
/// same way and never aborts the batch.
///
/// [`crate::flyby::Flyby`] implements this against the JPL SSD APIs; tests implement it
/// over in-memory maps.
pub trait DataAccess {
    /// Geocentric state vector of the object at the given epoch, with the velocity
    /// component only when `include_velocity` is set.
    fn state_vector(
        &self,
        designation: &str,
        epoch: MJD,
        include_velocity: bool,
    ) -> Result<Option<StateVector>, FlybyError>;

    /// Measured radius and bulk density, either of which may be absent.
    fn physical_parameters(
        &self,
        designation: &str,
    ) -> Result<Option<PhysicalParameters>, FlybyError>;

    /// Sentry risk inputs: H, maximum impact probability and relative velocity.
    fn risk_inputs(&self, designation: &str) -> Result<Option<RiskInputs>, FlybyError>;
}
