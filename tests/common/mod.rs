use std::collections::{HashMap, HashSet};

use flyby::approach::PhysicalParameters;
use flyby::constants::MJD;
use flyby::data_access::DataAccess;
use flyby::flyby_errors::FlybyError;
use flyby::geometry::StateVector;
use flyby::risk::RiskInputs;

/// In-memory [`DataAccess`] collaborator for batch tests.
///
/// Objects absent from a map answer `Ok(None)`. Designations registered through
/// [`MockProvider::with_broken_lookups`] answer `Err` to every lookup; those registered
/// through [`MockProvider::with_broken_parameters`] only fail the physical-parameter and
/// risk-input lookups, leaving the ephemeris intact.
#[derive(Debug, Default)]
pub struct MockProvider {
    states: HashMap<String, StateVector>,
    physical: HashMap<String, PhysicalParameters>,
    risk: HashMap<String, RiskInputs>,
    broken: HashSet<String>,
    broken_parameters: HashSet<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, designation: &str, state: StateVector) -> Self {
        self.states.insert(designation.to_string(), state);
        self
    }

    pub fn with_physical(mut self, designation: &str, physical: PhysicalParameters) -> Self {
        self.physical.insert(designation.to_string(), physical);
        self
    }

    pub fn with_risk(mut self, designation: &str, risk: RiskInputs) -> Self {
        self.risk.insert(designation.to_string(), risk);
        self
    }

    pub fn with_broken_lookups(mut self, designation: &str) -> Self {
        self.broken.insert(designation.to_string());
        self
    }

    pub fn with_broken_parameters(mut self, designation: &str) -> Self {
        self.broken_parameters.insert(designation.to_string());
        self
    }

    fn fail_if_broken(&self, designation: &str) -> Result<(), FlybyError> {
        if self.broken.contains(designation) {
            return Err(FlybyError::HorizonsParseError(format!(
                "injected lookup failure for {designation}"
            )));
        }
        Ok(())
    }

    fn fail_if_parameters_broken(&self, designation: &str) -> Result<(), FlybyError> {
        self.fail_if_broken(designation)?;
        if self.broken_parameters.contains(designation) {
            return Err(FlybyError::HorizonsParseError(format!(
                "injected parameter lookup failure for {designation}"
            )));
        }
        Ok(())
    }
}

impl DataAccess for MockProvider {
    fn state_vector(
        &self,
        designation: &str,
        _epoch: MJD,
        include_velocity: bool,
    ) -> Result<Option<StateVector>, FlybyError> {
        self.fail_if_broken(designation)?;
        Ok(self.states.get(designation).map(|state| {
            let mut state = state.clone();
            if !include_velocity {
                state.velocity = None;
            }
            state
        }))
    }

    fn physical_parameters(
        &self,
        designation: &str,
    ) -> Result<Option<PhysicalParameters>, FlybyError> {
        self.fail_if_parameters_broken(designation)?;
        Ok(self.physical.get(designation).copied())
    }

    fn risk_inputs(&self, designation: &str) -> Result<Option<RiskInputs>, FlybyError> {
        self.fail_if_parameters_broken(designation)?;
        Ok(self.risk.get(designation).copied())
    }
}
