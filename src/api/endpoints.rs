const API_PREFIX: &str = "/api/v1";

/// URL builders for the league backend
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn current_season(&self) -> String {
        format!("{}{}/seasons/current", self.base_url, API_PREFIX)
    }

    pub fn leaderboard(&self, year: i32) -> String {
        format!("{}{}/seasons/{}/leaderboard", self.base_url, API_PREFIX, year)
    }

    pub fn match_detail(&self, year: i32, week: u32) -> String {
        format!(
            "{}{}/seasons/{}/matches/{}",
            self.base_url, API_PREFIX, year, week
        )
    }

    pub fn attendance(&self, year: i32, week: u32) -> String {
        format!("{}/attendance", self.match_detail(year, week))
    }
}
