//! Tennis rules: an interval is one game, won by two points from Game up.
//!
//! Teams are paired as (1, 2), (3, 4); each pair plays its own game on the
//! same interval and the interval ends only when every pair has finished.

use super::label::FORTY;
use super::{RuleSet, SportRules};
use crate::table::IntervalScoreTable;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Rules for tennis singles and doubles boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TennisRules;

impl TennisRules {
    /// Opposing pairs `(2k+1, 2k+2)` for a board of `teams` teams.
    ///
    /// An odd last team has no opponent and is left out.
    pub fn pairs(teams: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..teams / 2).map(|k| (2 * k + 1, 2 * k + 2))
    }

    /// Opponent of a team: even ids play the id below, odd ids the id above.
    ///
    /// `None` when the opponent would fall outside `[1, teams]`.
    pub fn opponent(team: usize, teams: usize) -> Option<usize> {
        if team == 0 || team > teams {
            return None;
        }
        let other = if team % 2 == 0 { team - 1 } else { team + 1 };
        (other <= teams).then_some(other)
    }

    /// Whether a single game between two point totals is decided.
    pub fn game_decided(first: i64, second: i64) -> bool {
        first.abs_diff(second) > 1 && first.max(second) > FORTY
    }
}

impl SportRules for TennisRules {
    fn kind(&self) -> RuleSet {
        RuleSet::Tennis
    }

    #[instrument(skip(self, table))]
    fn is_interval_over(&self, table: &IntervalScoreTable, interval: usize) -> bool {
        let mut pairs = Self::pairs(table.teams()).peekable();
        if pairs.peek().is_none() {
            return false;
        }
        pairs.all(|(first, second)| {
            match (table.get(first, interval), table.get(second, interval)) {
                (Some(a), Some(b)) => {
                    let decided = Self::game_decided(a, b);
                    trace!(first, second, a, b, decided, "Checked pair");
                    decided
                }
                _ => false,
            }
        })
    }

    fn auto_advance(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(scores: &[i64]) -> IntervalScoreTable {
        let mut table = IntervalScoreTable::new(scores.len());
        for (index, points) in scores.iter().enumerate() {
            table.add(index + 1, 1, *points);
        }
        table
    }

    #[test]
    fn test_single_pair_decisions() {
        let rules = TennisRules;
        assert!(rules.is_interval_over(&board(&[4, 2]), 1));
        assert!(!rules.is_interval_over(&board(&[3, 2]), 1));
        assert!(!rules.is_interval_over(&board(&[5, 4]), 1));
        assert!(rules.is_interval_over(&board(&[6, 4]), 1));
        assert!(rules.is_interval_over(&board(&[0, 4]), 1));
        assert!(!rules.is_interval_over(&board(&[3, 1]), 1));
    }

    #[test]
    fn test_every_pair_must_finish() {
        let rules = TennisRules;
        assert!(!rules.is_interval_over(&board(&[4, 0, 2, 2]), 1));
        assert!(rules.is_interval_over(&board(&[4, 0, 2, 4]), 1));
    }

    #[test]
    fn test_odd_team_is_ignored() {
        assert!(TennisRules.is_interval_over(&board(&[4, 1, 0]), 1));
    }

    #[test]
    fn test_no_pairs_never_ends() {
        assert!(!TennisRules.is_interval_over(&board(&[9]), 1));
    }

    #[test]
    fn test_missing_interval_is_not_over() {
        assert!(!TennisRules.is_interval_over(&board(&[4, 0]), 2));
    }

    #[test]
    fn test_opponents() {
        assert_eq!(TennisRules::opponent(1, 2), Some(2));
        assert_eq!(TennisRules::opponent(2, 2), Some(1));
        assert_eq!(TennisRules::opponent(4, 4), Some(3));
        assert_eq!(TennisRules::opponent(3, 3), None);
        assert_eq!(TennisRules::opponent(0, 4), None);
    }

    #[test]
    fn test_pairs() {
        let pairs: Vec<_> = TennisRules::pairs(4).collect();
        assert_eq!(pairs, vec![(1, 2), (3, 4)]);
        assert_eq!(TennisRules::pairs(3).count(), 1);
    }
}
