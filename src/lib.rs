pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod feed;
pub mod ranking;
pub mod services;
pub mod views;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::SqliteStore;
use crate::ranking::LeaderboardEntry;
use crate::services::{LeagueService, SeedingService, ServerService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env()?;
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init(players: &Path, matches: &Path) -> Result<()> {
    let config = AppConfig::from_env()?;
    let service = SeedingService::new(config.server.database_path);
    service.run(players, matches)
}

pub fn handle_standings() -> Result<()> {
    let config = AppConfig::from_env()?;
    let store = open_store(&config)?;
    let board = LeagueService::new(&store, &config).leaderboard()?;

    println!(
        "{}",
        format!(
            "{:>4}  {:<24} {:>4} {:>4} {:>6}",
            "#", "Player", "W", "L", "+/-"
        )
        .bold()
    );
    for entry in &board {
        println!("{}", standings_line(entry));
    }
    Ok(())
}

fn standings_line(entry: &LeaderboardEntry) -> String {
    let name = entry.display_name.as_deref().unwrap_or(&entry.player_id);
    let line = format!(
        "{:>4}  {:<24} {:>4} {:>4} {:>+6}",
        entry.rank, name, entry.wins, entry.losses, entry.point_diff
    );
    match entry.rank {
        1 => line.green().bold().to_string(),
        _ if entry.wins == 0 && entry.losses == 0 => line.dimmed().to_string(),
        _ => line,
    }
}

pub fn handle_export_ical(player: &str, output: Option<&Path>) -> Result<()> {
    let config = AppConfig::from_env()?;
    let store = open_store(&config)?;
    let ics = LeagueService::new(&store, &config).ical_for_player(player)?;

    match output {
        Some(path) => {
            fs::write(path, ics)
                .with_context(|| format!("Failed to write calendar to {}", path.display()))?;
            log::info!("Calendar for {} written to {}", player, path.display());
        }
        None => print!("{}", ics),
    }
    Ok(())
}

pub fn handle_feed_token(player: &str) -> Result<()> {
    let config = AppConfig::from_env()?;
    println!("{}", feed::feed_token(player, &config.feed));
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

fn open_store(config: &AppConfig) -> Result<SqliteStore> {
    let pool = database::create_pool(&config.server.database_path)?;
    Ok(SqliteStore::new(pool))
}
