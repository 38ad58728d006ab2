use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::settings::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(author, version, about = "Futsal league client: standings, matches and attendance")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct GlobalArgs {
    /// Base URL of the league backend
    #[arg(long, global = true, env = "LEAGUE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer token forwarded to the backend
    #[arg(long, global = true, env = "LEAGUE_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Seconds a fetched payload stays cached
    #[arg(long, global = true, env = "LEAGUE_CACHE_TTL_SECS")]
    pub cache_ttl: Option<u64>,

    /// Print view models as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Show the active season and the page it opens on
    Season,
    /// Show a season leaderboard
    Leaderboard {
        /// Season year (defaults to the active season)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Show teams, scores and ratings of one match week
    Match {
        /// Season year
        year: i32,
        /// Match week, starting at 1
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        week: u32,
    },
    /// Show attendance of one match week
    Attendance {
        /// Season year
        year: i32,
        /// Match week, starting at 1
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        week: u32,
    },
    /// Navigate page routes interactively
    Browse,
    /// Start the JSON view server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
