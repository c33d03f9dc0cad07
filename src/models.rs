use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short URL
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten; a missing or empty value is rejected
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: Option<String>,
}

/// Response after creating a short URL
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: u64,
}

/// Greeting returned by the hello endpoint
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}
