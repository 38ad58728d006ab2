use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::domain::{Attendance, MatchStatus, PlayerType, TeamSide};

use super::outcome::Outcome;
use super::strength::RatingSource;
use super::tier::Tier;

/// Date split into display components; wording and locale are left to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayDate {
    pub iso: NaiveDateTime,
    pub weekday: String,
    pub month: String,
    pub day: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
}

impl DisplayDate {
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self {
            iso: datetime,
            weekday: datetime.format("%A").to_string(),
            month: datetime.format("%B").to_string(),
            day: datetime.day(),
            year: datetime.year(),
            hour: datetime.hour(),
            minute: datetime.minute(),
        }
    }

    /// e.g. "Friday, March 14, 2025 at 07:30 PM"
    pub fn long_form(&self) -> String {
        self.iso.format("%A, %B %-d, %Y at %I:%M %p").to_string()
    }
}

// --- Leaderboard ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRowView {
    pub rank: i64,
    pub tier: Tier,
    pub player_id: String,
    pub player_name: String,
    pub points: i64,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub third_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub season_name: String,
    pub season_year: i32,
    pub total_matches: u32,
    pub rows: Vec<LeaderboardRowView>,
}

impl LeaderboardView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// --- Match ---

/// How a team card should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardResult {
    Winner,
    Loser,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLine {
    pub id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub is_goalkeeper: bool,
    pub player_type: PlayerType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCard {
    pub side: TeamSide,
    pub display_name: String,
    pub score: Option<u32>,
    pub result: CardResult,
    /// Unrounded; round when rendering
    pub total_rating: f64,
    pub players: Vec<PlayerLine>,
}

impl TeamCard {
    pub fn rounded_total(&self) -> i64 {
        self.total_rating.round() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamComparison {
    pub outcome: Outcome,
    pub rating_source: RatingSource,
    pub first: TeamCard,
    pub second: TeamCard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum TeamsSection {
    /// No rosters yet
    NotAssigned,
    /// Some rosters exist but not one per side
    Partial { teams: Vec<TeamCard> },
    Compared(TeamComparison),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub match_id: String,
    pub season_year: i32,
    pub match_week: u32,
    pub date: DisplayDate,
    pub status: MatchStatus,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub teams: TeamsSection,
    pub third_time_attendees: Vec<String>,
}

impl MatchView {
    pub fn teams_not_assigned(&self) -> bool {
        matches!(self.teams, TeamsSection::NotAssigned)
    }

    pub fn comparison(&self) -> Option<&TeamComparison> {
        match &self.teams {
            TeamsSection::Compared(comparison) => Some(comparison),
            _ => None,
        }
    }
}

// --- Attendance ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceLine {
    pub player_id: String,
    pub player_name: String,
    pub attended: Attendance,
    pub current_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceGroup {
    pub title: String,
    pub players: Vec<AttendanceLine>,
    pub attended_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceView {
    pub match_id: String,
    pub season_year: i32,
    pub match_week: u32,
    pub date: DisplayDate,
    pub regular: AttendanceGroup,
    pub invited: AttendanceGroup,
    pub total_attended: usize,
}

/// Any assembled page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderedView {
    Leaderboard(LeaderboardView),
    Match(MatchView),
    Attendance(AttendanceView),
}
