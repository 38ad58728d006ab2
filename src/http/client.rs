use anyhow::{Context, Result};
use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::config::ApiSettings;
use crate::errors::{FetchError, fetch_context, parse_context};

const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// JSON GET client with optional bearer token pass-through
pub struct ApiClient {
    client: Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = Self::build_client(&settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            token: settings.token.clone(),
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, data_type: &str) -> Result<T> {
        let response = self.send_get_request(url).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(url, status, &body).into());
        }

        response
            .json::<T>()
            .await
            .with_context(|| parse_context(data_type))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        debug!("GET {}", url);
        let mut request = self
            .client
            .get(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request.send().await.with_context(|| fetch_context(url))
    }

    fn status_error(url: &str, status: StatusCode, body: &str) -> FetchError {
        let message = error_message(body);
        if status == StatusCode::NOT_FOUND {
            FetchError::NotFound {
                url: url.to_string(),
                message,
            }
        } else {
            FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// Pull a human readable message out of an error body.
/// The backend uses `detail`; other proxies use `message`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "detail"]
                .iter()
                .find_map(|field| value.get(*field).and_then(Value::as_str).map(str::to_string))
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_backend_error_messages() {
        assert_eq!(
            error_message(r#"{"detail":"Match not found for year 2025 week 9"}"#),
            "Match not found for year 2025 week 9"
        );
        assert_eq!(error_message(r#"{"message":"nope"}"#), "nope");
        assert_eq!(error_message("<html>502</html>"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error_message(r#"{"detail":[{"loc":["path"]}]}"#), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn not_found_is_distinguished() {
        let err = ApiClient::status_error("http://x/api", StatusCode::NOT_FOUND, r#"{"detail":"gone"}"#);
        assert_eq!(
            err,
            FetchError::NotFound {
                url: "http://x/api".to_string(),
                message: "gone".to_string()
            }
        );

        let err = ApiClient::status_error("http://x/api", StatusCode::BAD_GATEWAY, "");
        assert!(matches!(err, FetchError::Status { status: 502, .. }));
    }
}
