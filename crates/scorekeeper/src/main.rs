//! Scorekeeper - console scorekeeping for interval-structured games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, anyhow};
use clap::Parser;
use cli::{Cli, Command};
use scorekeeper::{Console, Menu, SportCatalog};
use std::io::{self, BufRead, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the scoreboard.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let catalog = SportCatalog::load(cli.sports.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(catalog, cli.json, &mut console),
        Command::Play { sport, players } => {
            run_game(catalog, &sport, players, cli.json, &mut console)
        }
        Command::Sports { toml } => list_sports(&catalog, toml, &mut console),
    }
}

/// Run the interactive sport menu
#[instrument(skip_all)]
fn run_menu<R: BufRead, W: Write>(
    catalog: SportCatalog,
    json: bool,
    console: &mut Console<R, W>,
) -> Result<()> {
    info!("Starting scorekeeper menu");
    let games = Menu::new(catalog).with_json(json).run(console)?;
    info!(games = games.len(), "Menu closed");
    Ok(())
}

/// Score a single game of the named sport
#[instrument(skip(catalog, json, console))]
fn run_game<R: BufRead, W: Write>(
    catalog: SportCatalog,
    sport: &str,
    players: Option<usize>,
    json: bool,
    console: &mut Console<R, W>,
) -> Result<()> {
    let preset = catalog
        .find(sport)
        .cloned()
        .ok_or_else(|| anyhow!("Unknown sport: {}", sport))?;
    let menu = Menu::new(catalog).with_json(json);
    menu.play(&preset, players, console)?;
    Ok(())
}

/// Print the sport catalog
fn list_sports<R: BufRead, W: Write>(
    catalog: &SportCatalog,
    toml: bool,
    console: &mut Console<R, W>,
) -> Result<()> {
    if toml {
        console.say(catalog.to_toml()?)?;
        return Ok(());
    }
    for preset in catalog.sports() {
        let players = match preset.fixed_players() {
            Some(players) => players.to_string(),
            None => format!("{}-{}", preset.min_players(), preset.max_players()),
        };
        console.say(format!(
            "{}  {:<10} {:>4} {}s, {} {}s{}",
            preset.key(),
            preset.name(),
            preset.intervals(),
            preset.interval_name(),
            players,
            if *preset.team_sport() { "team" } else { "player" },
            if *preset.overtime() { ", overtime" } else { "" },
        ))?;
    }
    Ok(())
}
