//! Scoring error types.

use derive_more::{Display, Error};

/// Errors raised by the scoring engine and sport presets.
///
/// Out-of-range team ids are deliberately absent: `add_score` ignores them
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScoringError {
    /// A mutation was attempted after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// A sport was declared without teams or without intervals.
    #[display("Invalid game setup: {teams} teams, {intervals} intervals")]
    InvalidSetup {
        /// Declared number of teams.
        teams: usize,
        /// Declared number of intervals.
        intervals: usize,
    },

    /// Fewer players than the sport allows.
    #[display("{sport} needs at least {min} players, got {players}")]
    TooFewPlayers {
        /// Sport name.
        sport: String,
        /// Requested player count.
        players: usize,
        /// Minimum player count.
        min: usize,
    },

    /// More players than the sport allows.
    #[display("{sport} allows at most {max} players, got {players}")]
    TooManyPlayers {
        /// Sport name.
        sport: String,
        /// Requested player count.
        players: usize,
        /// Maximum player count.
        max: usize,
    },
}
