use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    views::{get_attendance, get_current_season, get_leaderboard, get_match, root_redirect},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/api/season/current", get(get_current_season))
        .route("/season/:year/leaderboard", get(get_leaderboard))
        .route("/season/:year/match/:week", get(get_match))
        .route("/season/:year/match/:week/attendance", get(get_attendance))
        .with_state(state)
}
