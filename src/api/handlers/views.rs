use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect},
};
use std::sync::Arc;

use super::{error_response, AppState};

pub async fn root_redirect(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.views.initial_route().await {
        Ok(route) => Redirect::temporary(&route.to_string()).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_current_season(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.views.current_season().await {
        Ok(season) => Json(season).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    match state.views.leaderboard(year).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_match(
    State(state): State<Arc<AppState>>,
    Path((year, week)): Path<(i32, u32)>,
) -> impl IntoResponse {
    if week == 0 {
        return (StatusCode::BAD_REQUEST, "Match weeks start at 1").into_response();
    }
    match state.views.match_view(year, week).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_attendance(
    State(state): State<Arc<AppState>>,
    Path((year, week)): Path<(i32, u32)>,
) -> impl IntoResponse {
    if week == 0 {
        return (StatusCode::BAD_REQUEST, "Match weeks start at 1").into_response();
    }
    match state.views.attendance(year, week).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => error_response(e),
    }
}
