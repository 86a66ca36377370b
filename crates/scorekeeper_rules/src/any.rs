//! Engine wrapper for a rule set chosen at runtime.

use crate::engine::ScoringEngine;
use crate::error::ScoringError;
use crate::phase::{Advance, Ending, GamePhase};
use crate::rules::{RuleSet, SportRules, StandardRules, TennisRules};
use crate::scoreboard::{Present, Scoreboard};
use crate::sport::Sport;
use serde::Serialize;
use tracing::instrument;

/// A scoring engine under any of the supported rule sets.
///
/// Sports are picked from a catalog at runtime, so the console works with
/// this enum while the typed engines stay available for rule-specific
/// queries such as tennis wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnyEngine {
    /// Football, golf and other manually advanced sports.
    Standard(ScoringEngine<StandardRules>),
    /// Tennis.
    Tennis(ScoringEngine<TennisRules>),
}

impl From<ScoringEngine<StandardRules>> for AnyEngine {
    fn from(engine: ScoringEngine<StandardRules>) -> Self {
        AnyEngine::Standard(engine)
    }
}

impl From<ScoringEngine<TennisRules>> for AnyEngine {
    fn from(engine: ScoringEngine<TennisRules>) -> Self {
        AnyEngine::Tennis(engine)
    }
}

macro_rules! each_engine {
    ($self:expr, $engine:ident => $body:expr) => {
        match $self {
            AnyEngine::Standard($engine) => $body,
            AnyEngine::Tennis($engine) => $body,
        }
    };
}

impl AnyEngine {
    /// Starts a game of `sport` under the named rule set.
    #[instrument(skip(sport), fields(sport = %sport.name()))]
    pub fn new(sport: Sport, rules: RuleSet) -> Self {
        match rules {
            RuleSet::Standard => ScoringEngine::new(sport, StandardRules).into(),
            RuleSet::Tennis => ScoringEngine::new(sport, TennisRules).into(),
        }
    }

    /// The rule set in force.
    pub fn rule_set(&self) -> RuleSet {
        each_engine!(self, engine => engine.rules().kind())
    }

    /// See [`ScoringEngine::add_score`].
    pub fn add_score(&mut self, team: usize, points: i64) -> Result<(), ScoringError> {
        each_engine!(self, engine => engine.add_score(team, points))
    }

    /// See [`ScoringEngine::advance_interval`].
    pub fn advance_interval(&mut self) -> Result<Advance, ScoringError> {
        each_engine!(self, engine => engine.advance_interval())
    }

    /// See [`ScoringEngine::advance_if_over`].
    pub fn advance_if_over(&mut self) -> Result<Option<Advance>, ScoringError> {
        each_engine!(self, engine => engine.advance_if_over())
    }

    /// See [`ScoringEngine::quit`].
    pub fn quit(&mut self) {
        each_engine!(self, engine => engine.quit())
    }

    /// See [`ScoringEngine::reset`].
    pub fn reset(&mut self) {
        each_engine!(self, engine => engine.reset())
    }

    /// See [`ScoringEngine::score`].
    pub fn score(&self, team: usize, interval: usize) -> Option<i64> {
        each_engine!(self, engine => engine.score(team, interval))
    }

    /// See [`ScoringEngine::run_total`].
    pub fn run_total(&self, team: usize) -> i64 {
        each_engine!(self, engine => engine.run_total(team))
    }

    /// Games won for tennis, running point total otherwise.
    pub fn standing(&self, team: usize) -> i64 {
        match self {
            AnyEngine::Standard(engine) => engine.run_total(team),
            AnyEngine::Tennis(engine) => {
                i64::try_from(engine.total_wins(team)).unwrap_or(i64::MAX)
            }
        }
    }

    /// See [`ScoringEngine::is_interval_over`].
    pub fn is_interval_over(&self, interval: usize) -> bool {
        each_engine!(self, engine => engine.is_interval_over(interval))
    }

    /// Whether the rules end intervals without the scorer's help.
    pub fn auto_advance(&self) -> bool {
        each_engine!(self, engine => engine.rules().auto_advance())
    }

    /// See [`ScoringEngine::interval_text`].
    pub fn interval_text(&self, interval: usize) -> String {
        each_engine!(self, engine => engine.interval_text(interval))
    }

    /// See [`ScoringEngine::current_interval_text`].
    pub fn current_interval_text(&self) -> String {
        each_engine!(self, engine => engine.current_interval_text())
    }

    /// See [`ScoringEngine::current_interval`].
    pub fn current_interval(&self) -> usize {
        each_engine!(self, engine => engine.current_interval())
    }

    /// See [`ScoringEngine::is_game_over`].
    pub fn is_game_over(&self) -> bool {
        each_engine!(self, engine => engine.is_game_over())
    }

    /// See [`ScoringEngine::ending`].
    pub fn ending(&self) -> Option<Ending> {
        each_engine!(self, engine => engine.ending())
    }

    /// See [`ScoringEngine::phase`].
    pub fn phase(&self) -> GamePhase {
        each_engine!(self, engine => engine.phase())
    }

    /// See [`ScoringEngine::teams`].
    pub fn teams(&self) -> usize {
        each_engine!(self, engine => engine.teams())
    }

    /// See [`ScoringEngine::sport`].
    pub fn sport(&self) -> &Sport {
        each_engine!(self, engine => engine.sport())
    }
}

impl Present for AnyEngine {
    fn scoreboard(&self) -> Scoreboard {
        each_engine!(self, engine => engine.scoreboard())
    }
}
