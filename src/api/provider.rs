use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::cache::{QueryCache, ResourceKey};
use crate::config::CacheSettings;
use crate::domain::{LeaderboardData, MatchAttendanceData, MatchDetail, Season};

/// Source of resolved league payloads, implemented by the HTTP client,
/// the caching decorator and test doubles
#[async_trait]
pub trait LeagueDataProvider: Send + Sync {
    /// Get the currently active season
    async fn current_season(&self) -> Result<Season>;

    /// Get the ranked leaderboard of a season
    async fn leaderboard(&self, year: i32) -> Result<LeaderboardData>;

    /// Get teams, scores and third-time attendees of one match week
    async fn match_detail(&self, year: i32, week: u32) -> Result<MatchDetail>;

    /// Get regular and invited attendance of one match week
    async fn attendance(&self, year: i32, week: u32) -> Result<MatchAttendanceData>;
}

#[derive(Debug, Clone)]
enum Payload {
    Season(Season),
    Leaderboard(LeaderboardData),
    Match(MatchDetail),
    Attendance(MatchAttendanceData),
}

/// Wraps another provider with a keyed in-memory cache.
/// Failed requests are never cached.
pub struct CachedProvider {
    inner: Arc<dyn LeagueDataProvider>,
    cache: Mutex<QueryCache<Payload>>,
}

impl CachedProvider {
    pub fn new(inner: Arc<dyn LeagueDataProvider>, settings: &CacheSettings) -> Self {
        Self {
            inner,
            cache: Mutex::new(QueryCache::new(settings.lifetime(), settings.capacity)),
        }
    }

    pub async fn invalidate(&self, key: &ResourceKey) -> bool {
        self.cache.lock().await.invalidate(key)
    }

    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }

    async fn lookup(&self, key: &ResourceKey) -> Option<Payload> {
        let hit = self.cache.lock().await.get(key);
        match &hit {
            Some(_) => debug!("Cache hit for {}", key),
            None => debug!("Cache miss for {}", key),
        }
        hit
    }

    async fn store(&self, key: ResourceKey, payload: Payload) {
        self.cache.lock().await.insert(key, payload);
    }
}

#[async_trait]
impl LeagueDataProvider for CachedProvider {
    async fn current_season(&self) -> Result<Season> {
        let key = ResourceKey::CurrentSeason;
        if let Some(Payload::Season(season)) = self.lookup(&key).await {
            return Ok(season);
        }
        let season = self.inner.current_season().await?;
        self.store(key, Payload::Season(season.clone())).await;
        Ok(season)
    }

    async fn leaderboard(&self, year: i32) -> Result<LeaderboardData> {
        let key = ResourceKey::Leaderboard { year };
        if let Some(Payload::Leaderboard(data)) = self.lookup(&key).await {
            return Ok(data);
        }
        let data = self.inner.leaderboard(year).await?;
        self.store(key, Payload::Leaderboard(data.clone())).await;
        Ok(data)
    }

    async fn match_detail(&self, year: i32, week: u32) -> Result<MatchDetail> {
        let key = ResourceKey::Match { year, week };
        if let Some(Payload::Match(detail)) = self.lookup(&key).await {
            return Ok(detail);
        }
        let detail = self.inner.match_detail(year, week).await?;
        self.store(key, Payload::Match(detail.clone())).await;
        Ok(detail)
    }

    async fn attendance(&self, year: i32, week: u32) -> Result<MatchAttendanceData> {
        let key = ResourceKey::Attendance { year, week };
        if let Some(Payload::Attendance(data)) = self.lookup(&key).await {
            return Ok(data);
        }
        let data = self.inner.attendance(year, week).await?;
        self.store(key, Payload::Attendance(data.clone())).await;
        Ok(data)
    }
}
