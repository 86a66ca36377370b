//! Fixed parameters of one game of a sport.

use crate::error::ScoringError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Fixed parameters for a single game, chosen once per play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Sport {
    /// Sport name (e.g. "Football").
    name: String,
    /// Team sport (true) or individual sport (false).
    team_sport: bool,
    /// Number of teams or players taking part.
    teams: usize,
    /// Nominal number of intervals (4 quarters, 18 holes).
    intervals: usize,
    /// What one interval is called ("Quarter", "Hole").
    interval_name: String,
    /// Whether a tie among the leaders extends the game.
    overtime: bool,
}

impl Sport {
    /// Creates a sport, rejecting zero teams or zero intervals.
    #[instrument(skip(name, interval_name), fields(name = %name.as_ref()))]
    pub fn new(
        name: impl AsRef<str>,
        team_sport: bool,
        teams: usize,
        intervals: usize,
        interval_name: impl Into<String>,
        overtime: bool,
    ) -> Result<Self, ScoringError> {
        if teams == 0 || intervals == 0 {
            return Err(ScoringError::InvalidSetup { teams, intervals });
        }
        Ok(Self {
            name: name.as_ref().to_string(),
            team_sport,
            teams,
            intervals,
            interval_name: interval_name.into(),
            overtime,
        })
    }

    /// Word used for a competitor in prompts: "team" or "player".
    pub fn competitor(&self) -> &'static str {
        if self.team_sport { "team" } else { "player" }
    }
}
