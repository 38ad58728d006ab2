use serde::Serialize;

use crate::domain::{PlayerRating, TeamRoster};

use super::outcome::Outcome;

/// Which rating snapshot a team total is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingSource {
    /// Locked in when the match was played
    PreMatch,
    /// Live rating at query time
    Current,
}

impl RatingSource {
    /// Settled matches show strength as played, pending ones as of now.
    pub fn for_outcome(outcome: &Outcome) -> Self {
        Self::from_use_current(!outcome.has_settled_result())
    }

    pub fn from_use_current(use_current_rating: bool) -> Self {
        if use_current_rating {
            RatingSource::Current
        } else {
            RatingSource::PreMatch
        }
    }

    pub fn select(self, player: &PlayerRating) -> Option<f64> {
        match self {
            RatingSource::PreMatch => player.pre_match_rating,
            RatingSource::Current => player.current_rating,
        }
    }
}

/// Sum the roster's ratings from `source`; unrated players add nothing.
///
/// Values are summed in sorted order so any permutation of the roster yields
/// a bit-identical total.
pub fn aggregate(roster: &TeamRoster, source: RatingSource) -> f64 {
    let mut values: Vec<f64> = roster
        .players
        .iter()
        .filter_map(|player| source.select(player))
        .collect();

    values.sort_by(f64::total_cmp);
    values.iter().sum()
}
