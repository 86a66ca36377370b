//! Game phases and interval transitions.

use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Ending {
    /// The rules found no qualifying tie after the last interval.
    Completed,
    /// The scorer quit early.
    Quit,
}

/// Where a game stands.
///
/// `Over` is terminal: nothing but an explicit reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Playing one of the nominal intervals.
    Active,
    /// Playing past the nominal intervals after a tie among the leaders.
    Overtime,
    /// The game has ended.
    Over(Ending),
}

impl GamePhase {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Over(_))
    }
}

/// Result of advancing past the current interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advance {
    /// Play moved on to the given regular interval.
    Next(usize),
    /// Play moved on to the given overtime interval.
    Overtime(usize),
    /// The game is over.
    Completed,
}

impl std::fmt::Display for Advance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advance::Next(interval) => write!(f, "Advanced to interval {}", interval),
            Advance::Overtime(interval) => write!(f, "Advanced to overtime interval {}", interval),
            Advance::Completed => write!(f, "Game completed"),
        }
    }
}
