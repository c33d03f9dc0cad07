use serde::Deserialize;
use std::time::Duration;

/// URL validation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Upper bound in seconds for a single DNS reachability lookup
    pub dns_timeout_seconds: u64,
}

impl ValidationConfig {
    /// Validate DNS lookup configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.dns_timeout_seconds < 1 || self.dns_timeout_seconds > 60 {
            return Err("DNS_TIMEOUT_SECONDS must be between 1 and 60".to_string());
        }

        Ok(())
    }

    /// The lookup bound as a `Duration`
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_seconds)
    }
}
