use log::warn;
use serde::Serialize;

use crate::domain::{TeamRoster, TeamSide};

/// How far a pair of rosters has been scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Settled { a: u32, b: u32 },
    Pending,
    /// Only one side reports a score
    Ambiguous { scored: TeamSide },
}

pub fn settlement(team_a: &TeamRoster, team_b: &TeamRoster) -> Settlement {
    match (team_a.score, team_b.score) {
        (Some(a), Some(b)) => Settlement::Settled { a, b },
        (None, None) => Settlement::Pending,
        (Some(_), None) => Settlement::Ambiguous {
            scored: team_a.side,
        },
        (None, Some(_)) => Settlement::Ambiguous {
            scored: team_b.side,
        },
    }
}

/// Result of a match as far as the client can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "side", rename_all = "lowercase")]
pub enum Outcome {
    Unsettled,
    Draw,
    Win(TeamSide),
}

/// Winner slot of a settled match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Side(TeamSide),
    Draw,
}

impl Outcome {
    pub fn has_settled_result(&self) -> bool {
        !matches!(self, Outcome::Unsettled)
    }

    pub fn winner(&self) -> Option<Winner> {
        match self {
            Outcome::Unsettled => None,
            Outcome::Draw => Some(Winner::Draw),
            Outcome::Win(side) => Some(Winner::Side(*side)),
        }
    }
}

/// Decide the outcome from raw scores only. A half-scored pair counts as
/// unsettled.
pub fn resolve(team_a: &TeamRoster, team_b: &TeamRoster) -> Outcome {
    match settlement(team_a, team_b) {
        Settlement::Settled { a, b } if a == b => Outcome::Draw,
        Settlement::Settled { a, b } if a > b => Outcome::Win(team_a.side),
        Settlement::Settled { .. } => Outcome::Win(team_b.side),
        Settlement::Pending => Outcome::Unsettled,
        Settlement::Ambiguous { scored } => {
            warn!(
                "Unsettled match ambiguity: only {} has a score, treating match as unsettled",
                scored.display_name()
            );
            Outcome::Unsettled
        }
    }
}
