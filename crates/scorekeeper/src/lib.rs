//! Console scorekeeper for interval-structured games.
//!
//! Wraps the [`scorekeeper_rules`] engine in a line-oriented console: a sport
//! menu built from a TOML catalog, per-game sessions that parse score
//! requests, and scoreboard output.
//!
//! # Example
//!
//! ```
//! use scorekeeper::{Console, Menu, SportCatalog};
//! use std::io::Cursor;
//!
//! let script = "f\n1 7\n+\n+\n+\n2 3\n+\nq\n";
//! let mut console = Console::new(Cursor::new(script), Vec::new());
//! let games = Menu::new(SportCatalog::builtin()).run(&mut console)?;
//!
//! assert_eq!(games.len(), 1);
//! assert_eq!(games[0].run_total(1), 7);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;

pub use config::{ConfigError, RESERVED_KEYS, SportCatalog};
pub use console::{Console, GameSession, INVALID_REQUEST, Menu, Request, RequestError};
