use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Passed through as a bearer token, never inspected
    pub token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: "FutsalFriendsClient/0.1".to_string(),
            timeout_secs: 30,
            token: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub lifetime_secs: u64,
    pub capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            lifetime_secs: 60,
            capacity: 64,
        }
    }
}

impl CacheSettings {
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_secs)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub cache: CacheSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            cache: CacheSettings::default(),
        }
    }

    pub fn with_api_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.api.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_cache_lifetime(mut self, secs: u64) -> Self {
        self.cache.lifetime_secs = secs;
        self
    }
}
