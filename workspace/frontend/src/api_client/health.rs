use serde::Deserialize;

use crate::api_client;

/// Mirrors `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    pub data_loaded: bool,
}

impl HealthStatus {
    /// The service can answer prediction requests.
    pub fn is_ready(&self) -> bool {
        self.model_loaded && self.data_loaded
    }
}

pub async fn fetch_health() -> Result<HealthStatus, String> {
    log::trace!("Checking prediction service health");
    api_client::get::<HealthStatus>("/health").await
}
