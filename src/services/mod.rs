pub mod browser;
pub mod server;
pub mod views;

use anyhow::Result;
use std::sync::Arc;

use crate::api::{CachedProvider, LeagueClient};
use crate::config::AppConfig;

/// HTTP client for the league API behind the shared query cache
pub fn build_provider(config: &AppConfig) -> Result<Arc<CachedProvider>> {
    let client = LeagueClient::new(&config.api)?;
    Ok(Arc::new(CachedProvider::new(Arc::new(client), &config.cache)))
}
