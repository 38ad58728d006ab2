use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::dates::{deserialize_datetime, deserialize_optional_datetime};

/// Season as returned by `/seasons/current`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: bool,
}

// --- Leaderboard ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: String,
    pub player_name: String,
    pub current_rating: f64,
    pub matches_completed: u32,
    pub matches_attended: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub third_time_attended: u32,
    pub total_points: i64,
    #[serde(default)]
    pub attendance_rate: f64,
}

/// One ranked leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub player_stats: PlayerStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardData {
    pub season_id: String,
    pub season_name: String,
    pub season_year: i32,
    pub entries: Vec<LeaderboardEntry>,
    pub total_matches: u32,
}

// --- Matches ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Unplayable,
    #[serde(other)]
    Unknown,
}

impl MatchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Confirmed => "confirmed",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
            MatchStatus::Unplayable => "unplayable",
            MatchStatus::Unknown => "unknown",
        }
    }
}

/// Which of the two teams a roster belongs to. The backend calls them
/// "black" and "pink"; the tag never implies an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    #[serde(rename = "black")]
    First,
    #[serde(rename = "pink")]
    Second,
}

impl TeamSide {
    pub fn opposite(self) -> Self {
        match self {
            TeamSide::First => TeamSide::Second,
            TeamSide::Second => TeamSide::First,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TeamSide::First => "Black Team",
            TeamSide::Second => "Pink Team",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    #[default]
    Regular,
    Invited,
}

pub const GOALKEEPER_POSITION: &str = "goalkeeper";

/// A rostered player with both rating snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub id: String,
    pub name: String,
    /// Rating locked in when the match was played
    #[serde(rename = "rating", default)]
    pub pre_match_rating: Option<f64>,
    #[serde(default)]
    pub current_rating: Option<f64>,
    #[serde(default)]
    pub player_type: PlayerType,
    #[serde(default)]
    pub position: Option<String>,
}

impl PlayerRating {
    pub fn is_goalkeeper(&self) -> bool {
        self.position.as_deref() == Some(GOALKEEPER_POSITION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub id: String,
    #[serde(rename = "name")]
    pub side: TeamSide,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub players: Vec<PlayerRating>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdTimeAttendee {
    pub id: String,
    pub name: String,
}

/// Match detail as returned by `/seasons/{year}/matches/{week}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetail {
    pub id: String,
    pub season_id: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub match_date: NaiveDateTime,
    pub status: MatchStatus,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub rsvp_deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub teams: Vec<TeamRoster>,
    #[serde(default)]
    pub third_time_attendees: Vec<ThirdTimeAttendee>,
}

// --- Attendance ---

/// Tri-state attendance as recorded by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Attendance {
    Attended,
    Absent,
    Unknown,
}

impl From<Option<bool>> for Attendance {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Attendance::Attended,
            Some(false) => Attendance::Absent,
            None => Attendance::Unknown,
        }
    }
}

impl From<Attendance> for Option<bool> {
    fn from(value: Attendance) -> Self {
        match value {
            Attendance::Attended => Some(true),
            Attendance::Absent => Some(false),
            Attendance::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub player_id: String,
    pub player_name: String,
    #[serde(default)]
    pub player_type: PlayerType,
    #[serde(default = "unknown_attendance")]
    pub attended: Attendance,
    #[serde(default)]
    pub current_rating: Option<f64>,
}

fn unknown_attendance() -> Attendance {
    Attendance::Unknown
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAttendanceData {
    pub match_id: String,
    pub match_week: u32,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub match_date: NaiveDateTime,
    #[serde(default)]
    pub regular_players: Vec<AttendanceRecord>,
    #[serde(default)]
    pub invited_players: Vec<AttendanceRecord>,
}
