//! minilink — a minimal URL shortener.
//!
//! Submitted URLs are validated (http/https syntax plus a DNS reachability
//! lookup), stored in an in-memory map under a sequential integer
//! identifier, and later resolved back to the original URL via redirect.
//! Mappings live for the duration of the process; there is no persistence.
//!
//! Configuration is loaded from environment variables via [`config::Config`],
//! with CLI overrides for the listen address.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod validate;
