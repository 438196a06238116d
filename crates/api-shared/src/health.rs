use crate::types::HealthRes;

/// Simple health service shared by the REST API and the CLI.
///
/// Provides a standardised way to report the liveness of the relay.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is alive.
    pub fn check_health() -> HealthRes {
        HealthRes { ok: true }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
