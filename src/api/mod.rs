pub mod endpoints;
pub mod handlers;
pub mod league_client;
pub mod provider;
pub mod routes;

pub use league_client::LeagueClient;
pub use provider::{CachedProvider, LeagueDataProvider};
