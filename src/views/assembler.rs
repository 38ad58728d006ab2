use log::warn;

use crate::domain::{
    AttendanceRecord, Attendance, LeaderboardData, MatchAttendanceData, MatchDetail, Season,
    TeamRoster, TeamSide,
};
use crate::errors::ViewError;

use super::models::{
    AttendanceGroup, AttendanceLine, AttendanceView, CardResult, DisplayDate,
    LeaderboardRowView, LeaderboardView, MatchView, PlayerLine, TeamCard, TeamComparison,
    TeamsSection,
};
use super::outcome::{self, Outcome, Winner};
use super::roster;
use super::route::Route;
use super::strength::{self, RatingSource};
use super::tier;

/// Build the leaderboard page. Ranks must run 1, 2, 3, ... without gaps.
pub fn assemble_leaderboard(data: &LeaderboardData) -> Result<LeaderboardView, ViewError> {
    let mut rows = Vec::with_capacity(data.entries.len());
    let mut previous_points: Option<i64> = None;

    for (idx, entry) in data.entries.iter().enumerate() {
        let tier = tier::classify(entry.rank)?;
        let expected = idx as i64 + 1;
        if entry.rank != expected {
            return Err(ViewError::RankSequence {
                row: idx,
                expected,
                found: entry.rank,
            });
        }

        let stats = &entry.player_stats;
        if let Some(previous) = previous_points {
            if stats.total_points > previous {
                warn!(
                    "Leaderboard for {} not sorted by points at rank {} ({} > {})",
                    data.season_year, entry.rank, stats.total_points, previous
                );
            }
        }
        previous_points = Some(stats.total_points);

        rows.push(LeaderboardRowView {
            rank: entry.rank,
            tier,
            player_id: stats.player_id.clone(),
            player_name: stats.player_name.clone(),
            points: stats.total_points,
            played: stats.matches_attended,
            wins: stats.wins,
            draws: stats.draws,
            losses: stats.losses,
            third_time: stats.third_time_attended,
        });
    }

    Ok(LeaderboardView {
        season_name: data.season_name.clone(),
        season_year: data.season_year,
        total_matches: data.total_matches,
        rows,
    })
}

pub fn assemble_match(season_year: i32, match_week: u32, detail: &MatchDetail) -> MatchView {
    MatchView {
        match_id: detail.id.clone(),
        season_year,
        match_week,
        date: DisplayDate::from_datetime(detail.match_date),
        status: detail.status,
        location: detail.location.clone(),
        notes: detail.notes.clone(),
        teams: assemble_teams(&detail.teams),
        third_time_attendees: detail
            .third_time_attendees
            .iter()
            .map(|attendee| attendee.name.clone())
            .collect(),
    }
}

fn assemble_teams(teams: &[TeamRoster]) -> TeamsSection {
    if teams.is_empty() {
        return TeamsSection::NotAssigned;
    }

    let first = find_side(teams, TeamSide::First);
    let second = find_side(teams, TeamSide::Second);

    match (first, second) {
        (Some(first), Some(second)) if teams.len() == 2 => {
            TeamsSection::Compared(compare(first, second))
        }
        _ => {
            warn!(
                "Match has {} roster(s) that do not pair up one per side, skipping comparison",
                teams.len()
            );
            let source = RatingSource::for_outcome(&Outcome::Unsettled);
            let cards = teams
                .iter()
                .map(|team| team_card(team, source, CardResult::Neutral))
                .collect();
            TeamsSection::Partial { teams: cards }
        }
    }
}

fn find_side(teams: &[TeamRoster], side: TeamSide) -> Option<&TeamRoster> {
    teams.iter().find(|team| team.side == side)
}

fn compare(first: &TeamRoster, second: &TeamRoster) -> TeamComparison {
    let outcome = outcome::resolve(first, second);
    let source = RatingSource::for_outcome(&outcome);

    TeamComparison {
        outcome,
        rating_source: source,
        first: team_card(first, source, card_result(&outcome, first.side)),
        second: team_card(second, source, card_result(&outcome, second.side)),
    }
}

fn card_result(outcome: &Outcome, side: TeamSide) -> CardResult {
    match outcome.winner() {
        Some(Winner::Side(winner)) if winner == side => CardResult::Winner,
        Some(Winner::Side(_)) => CardResult::Loser,
        Some(Winner::Draw) | None => CardResult::Neutral,
    }
}

fn team_card(team: &TeamRoster, source: RatingSource, result: CardResult) -> TeamCard {
    let players = roster::order(team.players.clone())
        .into_iter()
        .map(|player| PlayerLine {
            rating: source.select(&player),
            is_goalkeeper: player.is_goalkeeper(),
            player_type: player.player_type,
            id: player.id,
            name: player.name,
        })
        .collect();

    TeamCard {
        side: team.side,
        display_name: team.side.display_name().to_string(),
        score: team.score,
        result,
        total_rating: strength::aggregate(team, source),
        players,
    }
}

pub fn assemble_attendance(season_year: i32, data: &MatchAttendanceData) -> AttendanceView {
    let regular = attendance_group("Regular Players", &data.regular_players);
    let invited = attendance_group("Invited Players", &data.invited_players);
    let total_attended = regular.attended_count + invited.attended_count;

    AttendanceView {
        match_id: data.match_id.clone(),
        season_year,
        match_week: data.match_week,
        date: DisplayDate::from_datetime(data.match_date),
        regular,
        invited,
        total_attended,
    }
}

fn attendance_group(title: &str, records: &[AttendanceRecord]) -> AttendanceGroup {
    let players: Vec<AttendanceLine> = records
        .iter()
        .map(|record| AttendanceLine {
            player_id: record.player_id.clone(),
            player_name: record.player_name.clone(),
            attended: record.attended,
            current_rating: record.current_rating,
        })
        .collect();

    let attended_count = players
        .iter()
        .filter(|line| line.attended == Attendance::Attended)
        .count();

    AttendanceGroup {
        title: title.to_string(),
        players,
        attended_count,
    }
}

/// Where the root entry lands: the active season's leaderboard
pub fn initial_route(season: &Season) -> Route {
    Route::Leaderboard { year: season.year }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        LeaderboardEntry, MatchStatus, PlayerRating, PlayerStats, PlayerType, ThirdTimeAttendee,
    };
    use chrono::NaiveDate;

    fn stats(id: &str, points: i64) -> PlayerStats {
        PlayerStats {
            player_id: id.to_string(),
            player_name: id.to_uppercase(),
            current_rating: 3.0,
            matches_completed: 4,
            matches_attended: 3,
            wins: 2,
            draws: 0,
            losses: 1,
            third_time_attended: 1,
            total_points: points,
            attendance_rate: 75.0,
        }
    }

    fn leaderboard(ranks: &[i64]) -> LeaderboardData {
        LeaderboardData {
            season_id: "s1".to_string(),
            season_name: "Spring 2025".to_string(),
            season_year: 2025,
            entries: ranks
                .iter()
                .map(|&rank| LeaderboardEntry {
                    rank,
                    player_stats: stats(&format!("p{rank}"), 20 - rank),
                })
                .collect(),
            total_matches: 4,
        }
    }

    fn player(id: &str, position: Option<&str>, pre: Option<f64>, current: Option<f64>) -> PlayerRating {
        PlayerRating {
            id: id.to_string(),
            name: id.to_string(),
            pre_match_rating: pre,
            current_rating: current,
            player_type: PlayerType::Regular,
            position: position.map(str::to_string),
        }
    }

    fn team(side: TeamSide, score: Option<u32>, players: Vec<PlayerRating>) -> TeamRoster {
        TeamRoster {
            id: format!("team-{side:?}"),
            side,
            score,
            players,
            average_rating: None,
        }
    }

    fn match_detail(teams: Vec<TeamRoster>) -> MatchDetail {
        MatchDetail {
            id: "m1".to_string(),
            season_id: "s1".to_string(),
            match_date: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(19, 30, 0)
                .unwrap(),
            status: MatchStatus::Completed,
            rsvp_deadline: None,
            location: Some("Hala Koło".to_string()),
            notes: None,
            teams,
            third_time_attendees: vec![ThirdTimeAttendee {
                id: "p9".to_string(),
                name: "Zed".to_string(),
            }],
        }
    }

    #[test]
    fn leaderboard_rows_get_tiers() {
        let view = assemble_leaderboard(&leaderboard(&[1, 2, 3])).unwrap();
        let tiers: Vec<_> = view.rows.iter().map(|row| row.tier).collect();
        assert_eq!(tiers, vec![tier::Tier::Champion, tier::Tier::Qualified, tier::Tier::Qualified]);
        assert!(view.rows.windows(2).all(|pair| pair[1].rank == pair[0].rank + 1));
    }

    #[test]
    fn leaderboard_with_gap_is_rejected() {
        let err = assemble_leaderboard(&leaderboard(&[1, 2, 4])).unwrap_err();
        assert_eq!(
            err,
            ViewError::RankSequence {
                row: 2,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn leaderboard_with_zero_rank_is_invalid() {
        let err = assemble_leaderboard(&leaderboard(&[0, 1])).unwrap_err();
        assert_eq!(err, ViewError::InvalidRank(0));
    }

    #[test]
    fn empty_leaderboard_is_flagged() {
        let view = assemble_leaderboard(&leaderboard(&[])).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn match_without_teams_is_not_assigned() {
        let view = assemble_match(2025, 1, &match_detail(Vec::new()));
        assert!(view.teams_not_assigned());
        assert!(view.comparison().is_none());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["teams"], serde_json::json!({ "state": "notAssigned" }));
    }

    #[test]
    fn settled_match_uses_pre_match_ratings() {
        let detail = match_detail(vec![
            team(
                TeamSide::Second,
                Some(1),
                vec![player("p3", None, Some(2.0), Some(9.0))],
            ),
            team(
                TeamSide::First,
                Some(3),
                vec![
                    player("p1", None, Some(3.5), Some(1.0)),
                    player("p2", Some("goalkeeper"), None, Some(4.0)),
                ],
            ),
        ]);

        let view = assemble_match(2025, 2, &detail);
        let comparison = view.comparison().expect("both sides present");

        assert_eq!(comparison.outcome, Outcome::Win(TeamSide::First));
        assert_eq!(comparison.rating_source, RatingSource::PreMatch);
        assert_eq!(comparison.first.side, TeamSide::First);
        assert_eq!(comparison.first.result, CardResult::Winner);
        assert_eq!(comparison.second.result, CardResult::Loser);
        assert_eq!(comparison.first.total_rating, 3.5);
        assert_eq!(comparison.second.total_rating, 2.0);

        let names: Vec<_> = comparison.first.players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(names, vec!["p2", "p1"]);
        assert_eq!(comparison.first.players[0].rating, None);
        assert_eq!(view.third_time_attendees, vec!["Zed".to_string()]);
    }

    #[test]
    fn pending_match_uses_current_ratings() {
        let detail = match_detail(vec![
            team(TeamSide::First, None, vec![player("p1", None, Some(3.0), Some(3.75))]),
            team(TeamSide::Second, None, vec![player("p2", None, Some(2.0), None)]),
        ]);

        let comparison = assemble_match(2025, 3, &detail).comparison().cloned().unwrap();
        assert_eq!(comparison.outcome, Outcome::Unsettled);
        assert_eq!(comparison.rating_source, RatingSource::Current);
        assert_eq!(comparison.first.total_rating, 3.75);
        assert_eq!(comparison.second.total_rating, 0.0);
        assert_eq!(comparison.first.result, CardResult::Neutral);
    }

    #[test]
    fn draw_leaves_both_cards_neutral() {
        let detail = match_detail(vec![
            team(TeamSide::First, Some(2), Vec::new()),
            team(TeamSide::Second, Some(2), Vec::new()),
        ]);
        let comparison = assemble_match(2025, 4, &detail).comparison().cloned().unwrap();
        assert_eq!(comparison.outcome, Outcome::Draw);
        assert_eq!(comparison.first.result, CardResult::Neutral);
        assert_eq!(comparison.second.result, CardResult::Neutral);
    }

    #[test]
    fn single_team_is_partial() {
        let detail = match_detail(vec![team(TeamSide::First, None, Vec::new())]);
        let view = assemble_match(2025, 5, &detail);
        assert!(!view.teams_not_assigned());
        match view.teams {
            TeamsSection::Partial { teams } => assert_eq!(teams.len(), 1),
            other => panic!("expected partial section, got {other:?}"),
        }
    }

    #[test]
    fn attendance_counts_only_confirmed_attendees() {
        let record = |id: &str, attended: Attendance| AttendanceRecord {
            player_id: id.to_string(),
            player_name: id.to_string(),
            player_type: PlayerType::Regular,
            attended,
            current_rating: Some(3.0),
        };
        let data = MatchAttendanceData {
            match_id: "m1".to_string(),
            match_week: 6,
            match_date: NaiveDate::from_ymd_opt(2025, 4, 1)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
            regular_players: vec![
                record("a", Attendance::Attended),
                record("b", Attendance::Absent),
                record("c", Attendance::Unknown),
            ],
            invited_players: vec![record("d", Attendance::Attended)],
        };

        let view = assemble_attendance(2025, &data);
        assert_eq!(view.regular.attended_count, 1);
        assert_eq!(view.invited.attended_count, 1);
        assert_eq!(view.total_attended, 2);
        assert_eq!(view.regular.players[2].attended, Attendance::Unknown);
        assert_eq!(view.date.weekday, "Tuesday");
    }

    #[test]
    fn root_entry_points_at_active_season_leaderboard() {
        let season = Season {
            id: "s1".to_string(),
            name: "Spring 2025".to_string(),
            year: 2025,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: None,
            is_active: true,
        };
        assert_eq!(initial_route(&season), Route::Leaderboard { year: 2025 });
    }
}
