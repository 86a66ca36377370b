//! Structural checks on the engine's score table.
//!
//! The engine runs [`EngineInvariants`] through `debug_assert!` after each
//! add, advance and reset.

use crate::engine::ScoringEngine;
use crate::rules::SportRules;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: play is always on interval 1 or later.
pub struct IntervalStartsAtOne;

impl<R: SportRules> Invariant<ScoringEngine<R>> for IntervalStartsAtOne {
    fn holds(game: &ScoringEngine<R>) -> bool {
        game.current_interval() >= 1
    }

    fn description() -> &'static str {
        "Current interval is at least 1"
    }
}

/// Invariant: one table row per interval played.
pub struct RowsTrackInterval;

impl<R: SportRules> Invariant<ScoringEngine<R>> for RowsTrackInterval {
    fn holds(game: &ScoringEngine<R>) -> bool {
        game.table().len() == game.current_interval()
    }

    fn description() -> &'static str {
        "Score table has exactly one row per interval played"
    }
}

/// Invariant: every row has one cell per team.
pub struct RowsMatchTeams;

impl<R: SportRules> Invariant<ScoringEngine<R>> for RowsMatchTeams {
    fn holds(game: &ScoringEngine<R>) -> bool {
        let teams = *game.sport().teams();
        game.table().teams() == teams && game.table().rows().iter().all(|row| row.len() == teams)
    }

    fn description() -> &'static str {
        "Every score row has one cell per team"
    }
}

/// All scoring engine invariants as a composable set.
pub type EngineInvariants = (IntervalStartsAtOne, RowsTrackInterval, RowsMatchTeams);
