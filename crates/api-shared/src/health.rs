use crate::dto::HealthRes;

/// Simple health service used by the HTTP API
///
/// This service provides a standardised way to check the health status of the symptom checker.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Symptom checker is alive".into(),
        }
    }
}
