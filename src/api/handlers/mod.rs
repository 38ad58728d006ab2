use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::errors::{FetchError, ViewError};
use crate::services::views::ViewService;

pub mod views;

pub struct AppState {
    pub views: ViewService,
}

impl AppState {
    pub fn new(views: ViewService) -> Self {
        Self { views }
    }
}

/// Map a failed page load onto a status and plain text body
pub fn error_response(err: anyhow::Error) -> Response {
    if let Some(fetch) = err.downcast_ref::<FetchError>() {
        return match fetch {
            FetchError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, message.clone()).into_response()
            }
            FetchError::Status { .. } => {
                error!("Upstream request failed: {:#}", err);
                (StatusCode::BAD_GATEWAY, fetch.to_string()).into_response()
            }
        };
    }

    if let Some(view) = err.downcast_ref::<ViewError>() {
        error!("Upstream payload rejected: {}", view);
        return (StatusCode::BAD_GATEWAY, view.to_string()).into_response();
    }

    error!("Page load failed: {:#}", err);
    (StatusCode::BAD_GATEWAY, format!("Failed to load page: {}", err)).into_response()
}
