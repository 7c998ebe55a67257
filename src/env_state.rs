//! # Flyby environment state
//!
//! This module defines [`crate::env_state::FlybyEnv`], the shared environment object used by the
//! JPL data-access layer. It manages a persistent [`ureq::Agent`] HTTP client with a global
//! timeout, and provides small helpers for GET and form-encoded POST requests.
//!
//! The object is cheaply cloneable and passed to the request modules so a single HTTP session
//! is reused across the CAD, Horizons, SBDB and Sentry queries.

use std::time::Duration;

use ureq::Agent;

use crate::flyby_errors::FlybyError;

#[derive(Debug, Clone)]
pub struct FlybyEnv {
    pub http_client: Agent,
}

impl Default for FlybyEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl FlybyEnv {
    /// Create a new environment with an HTTP client configured with default settings.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();
        let agent: Agent = config.into();

        FlybyEnv { http_client: agent }
    }

    pub(crate) fn get_from_url(&self, url: &str) -> Result<String, FlybyError> {
        Ok(self
            .http_client
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?)
    }

    pub(crate) fn post_form<'a, I>(&self, url: &str, form: I) -> Result<String, FlybyError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Ok(self
            .http_client
            .post(url)
            .send_form(form)?
            .body_mut()
            .read_to_string()?)
    }
}
