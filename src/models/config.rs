//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the REST backend.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// CSV file imported into an empty database at startup.
    #[serde(default)]
    pub seed_csv: Option<String>,
}
