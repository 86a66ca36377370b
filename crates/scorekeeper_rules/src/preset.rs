//! Sport presets: the parameters a scorer picks a game from.

use crate::any::AnyEngine;
use crate::error::ScoringError;
use crate::rules::RuleSet;
use crate::sport::Sport;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the scorer reports points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntryMode {
    /// The scorer types a team id and the points scored.
    #[default]
    EnterPoints,
    /// The scorer types a team id and the team gets one point.
    OnePoint,
}

impl EntryMode {
    /// Points credited per entry when the scorer does not type them.
    pub const DEFAULT_POINTS: i64 = 1;
}

/// A named sport with everything needed to start a game of it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SportPreset {
    /// Sport name.
    name: String,
    /// Menu key that selects this sport.
    key: char,
    /// Team sport (true) or individual sport (false).
    #[serde(default = "default_team_sport")]
    team_sport: bool,
    /// Fewest teams or players.
    #[serde(default = "default_players")]
    min_players: usize,
    /// Most teams or players.
    #[serde(default = "default_players")]
    max_players: usize,
    /// Nominal number of intervals.
    intervals: usize,
    /// What one interval is called.
    interval_name: String,
    /// Whether a tie among the leaders extends the game.
    #[serde(default)]
    overtime: bool,
    /// Rule set used for termination and tie-breaks.
    #[serde(default)]
    rules: RuleSet,
    /// How points are entered.
    #[serde(default)]
    entry: EntryMode,
}

fn default_team_sport() -> bool {
    true
}

fn default_players() -> usize {
    2
}

impl SportPreset {
    /// American football: two teams, four quarters, overtime on a tie.
    pub fn football() -> Self {
        Self {
            name: "Football".to_string(),
            key: 'f',
            team_sport: true,
            min_players: 2,
            max_players: 2,
            intervals: 4,
            interval_name: "Quarter".to_string(),
            overtime: true,
            rules: RuleSet::Standard,
            entry: EntryMode::EnterPoints,
        }
    }

    /// Tennis: two to four players on a six-game board, one point per entry.
    pub fn tennis() -> Self {
        Self {
            name: "Tennis".to_string(),
            key: 't',
            team_sport: true,
            min_players: 2,
            max_players: 4,
            intervals: 6,
            interval_name: "Game".to_string(),
            overtime: true,
            rules: RuleSet::Tennis,
            entry: EntryMode::OnePoint,
        }
    }

    /// Golf: one to four players over eighteen holes, no playoff.
    pub fn golf() -> Self {
        Self {
            name: "Golf".to_string(),
            key: 'g',
            team_sport: false,
            min_players: 1,
            max_players: 4,
            intervals: 18,
            interval_name: "Hole".to_string(),
            overtime: false,
            rules: RuleSet::Standard,
            entry: EntryMode::EnterPoints,
        }
    }

    /// The built-in presets, in menu order.
    pub fn builtin() -> Vec<Self> {
        vec![Self::football(), Self::tennis(), Self::golf()]
    }

    /// The player count when the preset allows only one.
    pub fn fixed_players(&self) -> Option<usize> {
        (self.min_players == self.max_players).then_some(self.min_players)
    }

    /// Builds the game parameters for a player count.
    ///
    /// # Errors
    ///
    /// Returns an error when the count is outside the preset's range or the
    /// preset declares no intervals.
    #[instrument(skip(self), fields(sport = %self.name))]
    pub fn sport(&self, players: usize) -> Result<Sport, ScoringError> {
        if players < self.min_players {
            return Err(ScoringError::TooFewPlayers {
                sport: self.name.clone(),
                players,
                min: self.min_players,
            });
        }
        if players > self.max_players {
            return Err(ScoringError::TooManyPlayers {
                sport: self.name.clone(),
                players,
                max: self.max_players,
            });
        }
        Sport::new(
            &self.name,
            self.team_sport,
            players,
            self.intervals,
            self.interval_name.clone(),
            self.overtime,
        )
    }

    /// Starts a game of this sport.
    #[instrument(skip(self), fields(sport = %self.name, rules = %self.rules))]
    pub fn start(&self, players: usize) -> Result<AnyEngine, ScoringError> {
        let sport = self.sport(players)?;
        debug!("Creating engine");
        Ok(AnyEngine::new(sport, self.rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_football_has_fixed_teams() {
        assert_eq!(SportPreset::football().fixed_players(), Some(2));
        assert_eq!(SportPreset::golf().fixed_players(), None);
    }

    #[test]
    fn test_player_range_is_enforced() {
        let tennis = SportPreset::tennis();
        assert!(matches!(
            tennis.sport(1),
            Err(ScoringError::TooFewPlayers { min: 2, .. })
        ));
        assert!(matches!(
            tennis.sport(5),
            Err(ScoringError::TooManyPlayers { max: 4, .. })
        ));
        assert_eq!(*tennis.sport(4).unwrap().teams(), 4);
    }

    #[test]
    fn test_start_picks_rule_set() {
        let game = SportPreset::tennis().start(2).unwrap();
        assert_eq!(game.rule_set(), RuleSet::Tennis);
        let game = SportPreset::golf().start(3).unwrap();
        assert_eq!(game.rule_set(), RuleSet::Standard);
    }
}
