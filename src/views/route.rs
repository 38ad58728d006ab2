use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use crate::cache::ResourceKey;

/// Page routes of the league client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Leaderboard { year: i32 },
    Match { year: i32, week: u32 },
    Attendance { year: i32, week: u32 },
}

impl Route {
    /// Resource that has to be fetched to render this page
    pub fn resource_key(&self) -> ResourceKey {
        match *self {
            Route::Root => ResourceKey::CurrentSeason,
            Route::Leaderboard { year } => ResourceKey::Leaderboard { year },
            Route::Match { year, week } => ResourceKey::Match { year, week },
            Route::Attendance { year, week } => ResourceKey::Attendance { year, week },
        }
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Root),
            ["season", year, "leaderboard"] => Ok(Route::Leaderboard {
                year: parse_year(year)?,
            }),
            ["season", year, "match", week] => Ok(Route::Match {
                year: parse_year(year)?,
                week: parse_week(week)?,
            }),
            ["season", year, "match", week, "attendance"] => Ok(Route::Attendance {
                year: parse_year(year)?,
                week: parse_week(week)?,
            }),
            _ => bail!("Unknown route: {}", path),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Root => write!(f, "/"),
            Route::Leaderboard { year } => write!(f, "/season/{}/leaderboard", year),
            Route::Match { year, week } => write!(f, "/season/{}/match/{}", year, week),
            Route::Attendance { year, week } => {
                write!(f, "/season/{}/match/{}/attendance", year, week)
            }
        }
    }
}

fn parse_year(raw: &str) -> Result<i32> {
    raw.parse()
        .with_context(|| format!("Invalid season year: {}", raw))
}

fn parse_week(raw: &str) -> Result<u32> {
    let week: u32 = raw
        .parse()
        .with_context(|| format!("Invalid match week: {}", raw))?;
    if week == 0 {
        bail!("Match weeks start at 1");
    }
    Ok(week)
}
