mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use common::FixtureProvider;
use futsal_friends::api::handlers::AppState;
use futsal_friends::api::routes::create_router;
use futsal_friends::services::views::ViewService;

fn app() -> axum::Router {
    let provider = common::cached(Arc::new(FixtureProvider::default()));
    create_router(Arc::new(AppState::new(ViewService::new(provider))))
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = get(uri).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn root_redirects_to_current_leaderboard() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/season/2025/leaderboard"
    );
}

#[tokio::test]
async fn current_season_is_exposed() {
    let (status, body) = get_json("/api/season/current").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2025);
    assert_eq!(body["name"], "Liga Amigos 2025");
}

#[tokio::test]
async fn leaderboard_page_returns_tiered_rows() {
    let (status, body) = get_json("/season/2025/leaderboard").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0]["tier"], "champion");
    assert_eq!(rows[6]["tier"], "qualified");
    assert_eq!(rows[7]["tier"], "relegation");
    assert_eq!(rows[0]["playerName"], "Ana Ruiz");
}

#[tokio::test]
async fn match_page_carries_comparison() {
    let (status, body) = get_json("/season/2025/match/1").await;

    assert_eq!(status, StatusCode::OK);
    let teams = &body["teams"];
    assert_eq!(teams["state"], "compared");
    assert_eq!(teams["outcome"]["kind"], "win");
    assert_eq!(teams["outcome"]["side"], "black");
    assert_eq!(teams["ratingSource"], "preMatch");
    assert_eq!(teams["first"]["result"], "winner");
    assert_eq!(teams["first"]["players"][0]["isGoalkeeper"], true);
}

#[tokio::test]
async fn unassigned_match_page_has_no_comparison() {
    let (status, body) = get_json("/season/2025/match/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teams"]["state"], "notAssigned");
    assert!(body["teams"].get("first").is_none());
}

#[tokio::test]
async fn attendance_page_counts_attendees() {
    let (status, body) = get_json("/season/2025/match/1/attendance").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalAttended"], 2);
    assert_eq!(body["regular"]["players"][2]["attended"], Value::Null);
}

#[tokio::test]
async fn missing_pages_are_not_found() {
    assert_eq!(get("/season/2025/match/9").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get("/season/2019/leaderboard").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn week_zero_is_a_bad_request() {
    assert_eq!(get("/season/2025/match/0").await.status(), StatusCode::BAD_REQUEST);
}
