use serde::Deserialize;

/// URL configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UrlConfig {
    /// Base URL the service is reachable under (e.g., "http://localhost:3000")
    pub base_url: String,
}

impl UrlConfig {
    /// Validate URL configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("BASE_URL must not be empty".to_string());
        }

        Ok(())
    }
}
