use crate::error::{AppError, AppResult};
use std::env;

pub mod cors;
pub mod server;
pub mod url;
pub mod validation;

pub use self::cors::CorsConfig;
pub use self::server::ServerConfig;
pub use self::url::UrlConfig;
pub use self::validation::ValidationConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub url: UrlConfig,
    pub cors: CorsConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        // SERVER_PORT wins; plain PORT is honored for parity with common
        // hosting environments.
        let server_port = env::var("SERVER_PORT")
            .or_else(|_| env::var("PORT"))
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));

        let dns_timeout_seconds = env::var("DNS_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid DNS_TIMEOUT_SECONDS".to_string()))?;

        // CORS config
        let allowed_origins_str = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let allowed_origins: Vec<String> = if allowed_origins_str == "*" {
            vec!["*".to_string()]
        } else {
            allowed_origins_str
                .split(',')
                .map(|s| s.trim().to_string())
                .collect()
        };

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            url: UrlConfig { base_url },
            cors: CorsConfig { allowed_origins },
            validation: ValidationConfig {
                dns_timeout_seconds,
            },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.url
            .validate()
            .map_err(AppError::Configuration)?;

        self.validation
            .validate()
            .map_err(AppError::Configuration)?;

        Ok(())
    }
}
