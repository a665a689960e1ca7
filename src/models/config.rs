//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::types::PageSize;

fn default_assets_dir() -> String {
    "./assets".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob handed to tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Base URL of the REST backend serving `/api/turfs/search`.
    pub backend_url: String,
    #[serde(default)]
    pub page_size: PageSize,
}
