use thiserror::Error;

/// Errors raised while deriving views from an already fetched payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("invalid rank {0}: leaderboard ranks start at 1")]
    InvalidRank(i64),

    #[error("leaderboard rank out of sequence at row {row}: expected {expected}, found {found}")]
    RankSequence { row: usize, expected: i64, found: i64 },
}

/// Errors returned by the league API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{message}")]
    NotFound { url: String, message: String },

    #[error("request to {url} failed with status {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
