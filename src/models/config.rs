//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration of the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}
