use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::api::endpoints::Endpoints;
use crate::api::provider::LeagueDataProvider;
use crate::config::ApiSettings;
use crate::domain::{LeaderboardData, MatchAttendanceData, MatchDetail, Season};
use crate::http::ApiClient;

/// League backend API client
pub struct LeagueClient {
    client: ApiClient,
    endpoints: Endpoints,
}

impl LeagueClient {
    /// Create a new league API client
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = ApiClient::new(settings)?;
        let endpoints = Endpoints::new(&settings.base_url);
        Ok(Self { client, endpoints })
    }
}

#[async_trait]
impl LeagueDataProvider for LeagueClient {
    async fn current_season(&self) -> Result<Season> {
        info!("Fetching current season");
        let url = self.endpoints.current_season();
        self.client.get_json(&url, "season").await
    }

    async fn leaderboard(&self, year: i32) -> Result<LeaderboardData> {
        info!("Fetching leaderboard for {}", year);
        let url = self.endpoints.leaderboard(year);
        self.client.get_json(&url, "leaderboard").await
    }

    async fn match_detail(&self, year: i32, week: u32) -> Result<MatchDetail> {
        info!("Fetching match {} of {}", week, year);
        let url = self.endpoints.match_detail(year, week);
        self.client.get_json(&url, "match").await
    }

    async fn attendance(&self, year: i32, week: u32) -> Result<MatchAttendanceData> {
        info!("Fetching attendance for match {} of {}", week, year);
        let url = self.endpoints.attendance(year, week);
        self.client.get_json(&url, "attendance").await
    }
}
