use std::fmt;

/// Identifies one upstream resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    CurrentSeason,
    Leaderboard { year: i32 },
    Match { year: i32, week: u32 },
    Attendance { year: i32, week: u32 },
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKey::CurrentSeason => write!(f, "season/current"),
            ResourceKey::Leaderboard { year } => write!(f, "leaderboard/{}", year),
            ResourceKey::Match { year, week } => write!(f, "match/{}/{}", year, week),
            ResourceKey::Attendance { year, week } => write!(f, "attendance/{}/{}", year, week),
        }
    }
}
