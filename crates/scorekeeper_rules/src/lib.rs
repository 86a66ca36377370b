//! Interval scoring for turn-based sports.
//!
//! A game is split into intervals (quarters, holes, games). Scores are kept
//! per team per interval; after each interval the engine decides whether the
//! game is over, whether a tie among the leaders sends it to overtime, or
//! whether play simply moves on.
//!
//! # Architecture
//!
//! - **Table**: [`IntervalScoreTable`], one append-only row per interval
//! - **Engine**: [`ScoringEngine`], generic over a [`SportRules`] policy
//! - **Rules**: [`StandardRules`] (manual advance) and [`TennisRules`]
//!   (win-by-two games, [`TennisScoreLabel`] vocabulary)
//! - **Presentation**: [`Scoreboard`] built through [`Present`]
//!
//! # Example
//!
//! ```
//! use scorekeeper_rules::{Advance, ScoringEngine, Sport, StandardRules};
//!
//! let sport = Sport::new("Football", true, 2, 4, "Quarter", true)?;
//! let mut game = ScoringEngine::new(sport, StandardRules);
//! game.add_score(1, 7)?;
//! assert_eq!(game.advance_interval()?, Advance::Next(2));
//! assert_eq!(game.run_total(1), 7);
//! # Ok::<(), scorekeeper_rules::ScoringError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod any;
mod engine;
mod error;
mod phase;
mod preset;
mod scoreboard;
mod sport;
mod table;

pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use any::AnyEngine;
pub use engine::{GAME_OVER_TEXT, ScoringEngine};
pub use phase::{Advance, Ending, GamePhase};

// Crate-level exports - Game parameters
pub use preset::{EntryMode, SportPreset};
pub use sport::Sport;
pub use table::IntervalScoreTable;

// Crate-level exports - Rules
pub use rules::{RuleSet, SportRules, StandardRules, TennisRules, TennisScoreLabel};

// Crate-level exports - Presentation
pub use scoreboard::{Present, Scoreboard, ScoreboardRow, UNPAIRED_CELL};

// Crate-level exports - Errors
pub use error::ScoringError;
