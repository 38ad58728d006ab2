#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futsal_friends::api::{CachedProvider, LeagueDataProvider};
use futsal_friends::config::CacheSettings;
use futsal_friends::domain::{LeaderboardData, MatchAttendanceData, MatchDetail, Season};
use futsal_friends::errors::FetchError;

pub const SEASON: &str = include_str!("../fixtures/season.json");
pub const LEADERBOARD: &str = include_str!("../fixtures/leaderboard.json");
pub const MATCH_SETTLED: &str = include_str!("../fixtures/match_settled.json");
pub const MATCH_UNASSIGNED: &str = include_str!("../fixtures/match_unassigned.json");
pub const ATTENDANCE: &str = include_str!("../fixtures/attendance.json");

pub fn leaderboard() -> LeaderboardData {
    serde_json::from_str(LEADERBOARD).unwrap()
}

pub fn settled_match() -> MatchDetail {
    serde_json::from_str(MATCH_SETTLED).unwrap()
}

pub fn unassigned_match() -> MatchDetail {
    serde_json::from_str(MATCH_UNASSIGNED).unwrap()
}

pub fn attendance() -> MatchAttendanceData {
    serde_json::from_str(ATTENDANCE).unwrap()
}

fn not_found(url: String, message: &str) -> anyhow::Error {
    FetchError::NotFound {
        url,
        message: message.to_string(),
    }
    .into()
}

/// Serves the 2025 season from fixtures: week 1 was played, week 2 has no
/// teams yet, everything else is missing.
#[derive(Default)]
pub struct FixtureProvider {
    pub calls: AtomicUsize,
}

impl FixtureProvider {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl LeagueDataProvider for FixtureProvider {
    async fn current_season(&self) -> Result<Season> {
        self.record();
        Ok(serde_json::from_str(SEASON)?)
    }

    async fn leaderboard(&self, year: i32) -> Result<LeaderboardData> {
        self.record();
        match year {
            2025 => Ok(leaderboard()),
            _ => Err(not_found(format!("/seasons/{year}/leaderboard"), "Season not found")),
        }
    }

    async fn match_detail(&self, year: i32, week: u32) -> Result<MatchDetail> {
        self.record();
        match (year, week) {
            (2025, 1) => Ok(settled_match()),
            (2025, 2) => Ok(unassigned_match()),
            _ => Err(not_found(
                format!("/seasons/{year}/matches/{week}"),
                "Match not found",
            )),
        }
    }

    async fn attendance(&self, year: i32, week: u32) -> Result<MatchAttendanceData> {
        self.record();
        match (year, week) {
            (2025, 1) => Ok(attendance()),
            _ => Err(not_found(
                format!("/seasons/{year}/matches/{week}/attendance"),
                "Match not found",
            )),
        }
    }
}

pub fn cached(inner: Arc<FixtureProvider>) -> Arc<CachedProvider> {
    Arc::new(CachedProvider::new(inner, &CacheSettings::default()))
}
