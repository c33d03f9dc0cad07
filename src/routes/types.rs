use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub urls_stored: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
