use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::api::LeagueDataProvider;
use crate::domain::Season;
use crate::views::{
    self, AttendanceView, LeaderboardView, MatchView, RenderedView, Route,
};

/// Fetches a page's payload and hands it to the view assembler
#[derive(Clone)]
pub struct ViewService {
    provider: Arc<dyn LeagueDataProvider>,
}

impl ViewService {
    pub fn new(provider: Arc<dyn LeagueDataProvider>) -> Self {
        Self { provider }
    }

    pub async fn current_season(&self) -> Result<Season> {
        self.provider.current_season().await
    }

    /// Route the root entry redirects to
    pub async fn initial_route(&self) -> Result<Route> {
        let season = self.current_season().await?;
        let route = views::initial_route(&season);
        info!("Active season is {} ({}), starting at {}", season.name, season.year, route);
        Ok(route)
    }

    pub async fn leaderboard(&self, year: i32) -> Result<LeaderboardView> {
        let data = self.provider.leaderboard(year).await?;
        Ok(views::assemble_leaderboard(&data)?)
    }

    pub async fn match_view(&self, year: i32, week: u32) -> Result<MatchView> {
        let detail = self.provider.match_detail(year, week).await?;
        Ok(views::assemble_match(year, week, &detail))
    }

    pub async fn attendance(&self, year: i32, week: u32) -> Result<AttendanceView> {
        let data = self.provider.attendance(year, week).await?;
        Ok(views::assemble_attendance(year, &data))
    }

    /// Load any page; the root lands on the current season's leaderboard
    pub async fn load(&self, route: Route) -> Result<RenderedView> {
        match route {
            Route::Root => {
                let season = self.current_season().await?;
                self.leaderboard(season.year).await.map(RenderedView::Leaderboard)
            }
            Route::Leaderboard { year } => self.leaderboard(year).await.map(RenderedView::Leaderboard),
            Route::Match { year, week } => self.match_view(year, week).await.map(RenderedView::Match),
            Route::Attendance { year, week } => {
                self.attendance(year, week).await.map(RenderedView::Attendance)
            }
        }
    }
}
