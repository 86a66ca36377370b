//! Command-line interface for scorekeeper.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scorekeeper - keep score of football, tennis, golf and friends
#[derive(Parser, Debug)]
#[command(name = "scorekeeper")]
#[command(about = "Console scorekeeper for interval-structured games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Sport catalog TOML file. Built-in sports are used when absent
    #[arg(long, global = true)]
    pub sports: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Also print final scoreboards as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to the menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick sports from the interactive menu
    Menu,

    /// Score a single game
    Play {
        /// Sport name or menu key
        sport: String,

        /// Number of teams or players
        #[arg(short, long)]
        players: Option<usize>,
    },

    /// List the sport catalog
    Sports {
        /// Print the catalog as TOML
        #[arg(long)]
        toml: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_menu() {
        let cli = Cli::parse_from(["scorekeeper"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.json);
    }

    #[test]
    fn test_play_with_players() {
        let cli = Cli::parse_from(["scorekeeper", "play", "golf", "--players", "3", "--json"]);
        assert_eq!(
            cli.command,
            Some(Command::Play {
                sport: "golf".to_string(),
                players: Some(3)
            })
        );
        assert!(cli.json);
    }

    #[test]
    fn test_global_sports_file() {
        let cli = Cli::parse_from(["scorekeeper", "sports", "--sports", "my.toml", "--toml"]);
        assert_eq!(cli.sports, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.command, Some(Command::Sports { toml: true }));
    }
}
