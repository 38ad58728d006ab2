use colored::{ColoredString, Colorize};
use std::fmt::{self, Write as _};

use crate::domain::Attendance;
use crate::views::{
    AttendanceGroup, AttendanceView, CardResult, LeaderboardView, MatchView, Outcome,
    RenderedView, TeamCard, TeamsSection, Tier,
};

pub fn render(view: &RenderedView) -> Result<String, fmt::Error> {
    match view {
        RenderedView::Leaderboard(board) => render_leaderboard(board),
        RenderedView::Match(match_view) => render_match(match_view),
        RenderedView::Attendance(attendance) => render_attendance(attendance),
    }
}

fn rank_badge(rank: i64, tier: Tier) -> ColoredString {
    let label = format!("{:>4}", rank);
    match tier {
        Tier::Champion => label.black().on_yellow().bold(),
        Tier::Qualified => label.black().on_green(),
        Tier::Relegation => label.white().on_red(),
    }
}

fn rating_text(rating: Option<f64>) -> String {
    rating
        .map(|value| format!("{}", value.round() as i64))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn render_leaderboard(view: &LeaderboardView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", view.season_name.bold())?;
    writeln!(
        out,
        "Season {} · {} matches played\n",
        view.season_year, view.total_matches
    )?;

    if view.is_empty() {
        writeln!(out, "No leaderboard data available")?;
        return Ok(out);
    }

    writeln!(
        out,
        "{:>4}  {:<24} {:>6} {:>6} {:>4} {:>4} {:>4} {:>8}",
        "Rank", "Player", "Points", "Played", "Won", "Draw", "Lost", "3rd Time"
    )?;
    for row in &view.rows {
        writeln!(
            out,
            "{}  {:<24} {:>6} {:>6} {:>4} {:>4} {:>4} {:>8}",
            rank_badge(row.rank, row.tier),
            row.player_name,
            row.points.to_string().bold(),
            row.played,
            row.wins.to_string().green(),
            row.draws,
            row.losses.to_string().red(),
            row.third_time.to_string().blue(),
        )?;
    }
    Ok(out)
}

fn score_text(score: Option<u32>) -> String {
    score
        .map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn write_team_card(out: &mut String, card: &TeamCard) -> fmt::Result {
    let title = match card.result {
        CardResult::Winner => format!("{}  Winner", card.display_name).green().bold(),
        CardResult::Loser => card.display_name.red(),
        CardResult::Neutral => card.display_name.normal(),
    };
    writeln!(out, "{}", title)?;
    writeln!(
        out,
        "  Score: {}   Total Rank: {}",
        score_text(card.score),
        card.rounded_total()
    )?;

    if card.players.is_empty() {
        writeln!(out, "  No players assigned yet")?;
        return Ok(());
    }
    for player in &card.players {
        let marker = if player.is_goalkeeper { "GK" } else { "  " };
        writeln!(
            out,
            "  {} {:<24} {} pts",
            marker,
            player.name,
            rating_text(player.rating)
        )?;
    }
    Ok(())
}

pub fn render_match(view: &MatchView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{}",
        format!("Match Details - Week {}", view.match_week).bold()
    )?;
    writeln!(out, "{}", view.date.long_form())?;
    writeln!(out, "Status: {}", view.status.as_str())?;
    if let Some(location) = &view.location {
        writeln!(out, "Location: {}", location)?;
    }
    writeln!(out)?;

    match &view.teams {
        TeamsSection::NotAssigned => {
            writeln!(out, "Teams have not been assigned yet for this match")?;
        }
        TeamsSection::Partial { teams } => {
            for card in teams {
                write_team_card(&mut out, card)?;
                writeln!(out)?;
            }
        }
        TeamsSection::Compared(comparison) => {
            let headline = match comparison.outcome {
                Outcome::Unsettled => "Not played yet".to_string(),
                Outcome::Draw => "Draw".to_string(),
                Outcome::Win(side) => format!("{} won", side.display_name()),
            };
            writeln!(
                out,
                "{} {}  VS  {} {}   ({})\n",
                comparison.first.display_name,
                score_text(comparison.first.score).bold(),
                score_text(comparison.second.score).bold(),
                comparison.second.display_name,
                headline
            )?;
            write_team_card(&mut out, &comparison.first)?;
            writeln!(out)?;
            write_team_card(&mut out, &comparison.second)?;
        }
    }

    if !view.third_time_attendees.is_empty() {
        writeln!(out, "\n{}", "Third Time Attendance".bold())?;
        writeln!(out, "  {}", view.third_time_attendees.join(", ").blue())?;
    }

    if let Some(notes) = &view.notes {
        writeln!(out, "\n{}\n  {}", "Notes".bold(), notes)?;
    }
    Ok(out)
}

fn attendance_badge(attended: Attendance) -> ColoredString {
    match attended {
        Attendance::Attended => "Yes".green(),
        Attendance::Absent => "No".red(),
        Attendance::Unknown => "N/A".dimmed(),
    }
}

fn write_attendance_group(out: &mut String, group: &AttendanceGroup) -> fmt::Result {
    writeln!(out, "{}", group.title.bold())?;
    if group.players.is_empty() {
        writeln!(out, "  No {} for this match", group.title.to_lowercase())?;
        return Ok(());
    }

    let noun = if group.players.len() == 1 { "player" } else { "players" };
    writeln!(out, "  {} {}", group.players.len(), noun)?;
    for line in &group.players {
        writeln!(
            out,
            "  {:<24} {:<4} {}",
            line.player_name,
            attendance_badge(line.attended),
            rating_text(line.current_rating)
        )?;
    }
    Ok(())
}

pub fn render_attendance(view: &AttendanceView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{}",
        format!("Match Attendance - Week {}", view.match_week).bold()
    )?;
    writeln!(out, "{}\n", view.date.long_form())?;
    writeln!(
        out,
        "Regular attended: {}   Invited attended: {}   Total attended: {}\n",
        view.regular.attended_count, view.invited.attended_count, view.total_attended
    )?;

    write_attendance_group(&mut out, &view.regular)?;
    writeln!(out)?;
    write_attendance_group(&mut out, &view.invited)?;
    Ok(out)
}
