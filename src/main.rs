use anyhow::Result;

use futsal_friends::cli::{Cli, Command};
use futsal_friends::{
    handle_attendance, handle_browse, handle_completions, handle_leaderboard, handle_match,
    handle_season, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let global = &cli.global;
    match &cli.command {
        Command::Season => handle_season(global),
        Command::Leaderboard { year } => handle_leaderboard(global, *year),
        Command::Match { year, week } => handle_match(global, *year, *week),
        Command::Attendance { year, week } => handle_attendance(global, *year, *week),
        Command::Browse => handle_browse(global),
        Command::Serve { port } => handle_serve(global, *port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
