use serde::Serialize;

use crate::errors::ViewError;

/// Last rank that still qualifies
pub const LAST_QUALIFYING_RANK: i64 = 7;

/// Visual tier of a leaderboard position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Champion,
    Qualified,
    Relegation,
}

impl Tier {
    pub fn as_str(&self) -> &str {
        match self {
            Tier::Champion => "champion",
            Tier::Qualified => "qualified",
            Tier::Relegation => "relegation",
        }
    }
}

/// Map a 1-based leaderboard rank to its tier
pub fn classify(rank: i64) -> Result<Tier, ViewError> {
    match rank {
        r if r < 1 => Err(ViewError::InvalidRank(r)),
        1 => Ok(Tier::Champion),
        2..=LAST_QUALIFYING_RANK => Ok(Tier::Qualified),
        _ => Ok(Tier::Relegation),
    }
}
