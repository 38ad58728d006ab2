pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod render;
pub mod services;
pub mod views;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::{Cli, GlobalArgs};

use crate::config::settings::AppConfig;
use crate::render::{OutputFormat, format_view};
use crate::services::browser::BrowseService;
use crate::services::build_provider;
use crate::services::server::ServerService;
use crate::services::views::ViewService;
use crate::views::{RenderedView, Route};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(global: &GlobalArgs) -> AppConfig {
    let config = AppConfig::new()
        .with_api_url(global.api_url.as_str())
        .with_token(global.token.clone());
    match global.cache_ttl {
        Some(secs) => config.with_cache_lifetime(secs),
        None => config,
    }
}

fn output_format(global: &GlobalArgs) -> OutputFormat {
    if global.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn view_service(config: &AppConfig) -> Result<ViewService> {
    Ok(ViewService::new(build_provider(config)?))
}

fn print_view(view: &RenderedView, format: OutputFormat) -> Result<()> {
    println!("{}", format_view(view, format)?);
    Ok(())
}

async fn show_season(global: &GlobalArgs) -> Result<()> {
    let service = view_service(&build_config(global))?;
    let season = service.current_season().await?;
    if global.json {
        println!("{}", serde_json::to_string_pretty(&season)?);
        return Ok(());
    }

    println!("{} ({})", season.name, season.year);
    println!("Starts {}", season.start_date.format("%B %-d, %Y"));
    if let Some(end) = season.end_date {
        println!("Ends {}", end.format("%B %-d, %Y"));
    }
    println!("Opens on {}", views::initial_route(&season));
    Ok(())
}

async fn show_page(global: &GlobalArgs, route: Route) -> Result<()> {
    let service = view_service(&build_config(global))?;
    let view = service.load(route).await?;
    print_view(&view, output_format(global))
}

pub fn handle_season(global: &GlobalArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(show_season(global))
}

pub fn handle_leaderboard(global: &GlobalArgs, year: Option<i32>) -> Result<()> {
    let route = match year {
        Some(year) => Route::Leaderboard { year },
        None => Route::Root,
    };
    handle_page(global, route)
}

pub fn handle_match(global: &GlobalArgs, year: i32, week: u32) -> Result<()> {
    handle_page(global, Route::Match { year, week })
}

pub fn handle_attendance(global: &GlobalArgs, year: i32, week: u32) -> Result<()> {
    handle_page(global, Route::Attendance { year, week })
}

fn handle_page(global: &GlobalArgs, route: Route) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(show_page(global, route))
}

pub fn handle_browse(global: &GlobalArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let provider = build_provider(&build_config(global))?;
    let service = BrowseService::new(provider, output_format(global));
    runtime.block_on(service.run())
}

pub fn handle_serve(global: &GlobalArgs, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, build_config(global));
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
