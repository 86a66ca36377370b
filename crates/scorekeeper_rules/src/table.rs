//! Per-interval score storage.

use serde::Serialize;
use tracing::instrument;

/// Ordered score rows, one per interval, each holding one cell per team.
///
/// Rows are append-only. Team ids and interval numbers are 1-based at this
/// boundary; lookups outside the table return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalScoreTable {
    teams: usize,
    rows: Vec<Vec<i64>>,
}

impl IntervalScoreTable {
    /// Creates a table for `teams` teams holding a single all-zero row.
    #[instrument]
    pub fn new(teams: usize) -> Self {
        Self {
            teams,
            rows: vec![vec![0; teams]],
        }
    }

    /// Number of teams (width of every row).
    pub fn teams(&self) -> usize {
        self.teams
    }

    /// Number of interval rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in interval order.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Appends a fresh all-zero row.
    #[instrument(skip(self), fields(rows = self.rows.len()))]
    pub fn push_row(&mut self) {
        self.rows.push(vec![0; self.teams]);
    }

    /// Drops every row and starts over with one zero row.
    pub(crate) fn clear(&mut self) {
        self.rows = vec![vec![0; self.teams]];
    }

    /// Adds `points` to a team's cell in the given interval.
    ///
    /// Returns false (and changes nothing) when either index is out of range.
    #[instrument(skip(self))]
    pub fn add(&mut self, team: usize, interval: usize, points: i64) -> bool {
        match self.cell_mut(team, interval) {
            Some(cell) => {
                *cell = cell.saturating_add(points);
                true
            }
            None => false,
        }
    }

    /// Score of a team in one interval.
    pub fn get(&self, team: usize, interval: usize) -> Option<i64> {
        if team == 0 || interval == 0 {
            return None;
        }
        self.rows.get(interval - 1)?.get(team - 1).copied()
    }

    /// Sum of a team's scores over every interval, or 0 for an unknown team.
    pub fn total(&self, team: usize) -> i64 {
        if team == 0 || team > self.teams {
            return 0;
        }
        self.rows
            .iter()
            .filter_map(|row| row.get(team - 1))
            .fold(0i64, |sum, &cell| sum.saturating_add(cell))
    }

    /// Running totals of every team, in team order.
    pub fn totals(&self) -> Vec<i64> {
        (1..=self.teams).map(|team| self.total(team)).collect()
    }

    fn cell_mut(&mut self, team: usize, interval: usize) -> Option<&mut i64> {
        if team == 0 || interval == 0 {
            return None;
        }
        self.rows.get_mut(interval - 1)?.get_mut(team - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_skips_short_rows() {
        let table = IntervalScoreTable {
            teams: 2,
            rows: vec![vec![5], vec![1, 2]],
        };
        assert_eq!(table.total(1), 6);
        assert_eq!(table.total(2), 2);
    }

    #[test]
    fn test_new_table_has_one_zero_row() {
        let table = IntervalScoreTable::new(3);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0], vec![0, 0, 0]);
    }

    #[test]
    fn test_add_and_get() {
        let mut table = IntervalScoreTable::new(2);
        assert!(table.add(2, 1, 7));
        assert!(table.add(2, 1, 3));
        assert_eq!(table.get(2, 1), Some(10));
        assert_eq!(table.get(1, 1), Some(0));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut table = IntervalScoreTable::new(2);
        assert!(!table.add(0, 1, 5));
        assert!(!table.add(3, 1, 5));
        assert!(!table.add(1, 2, 5));
        assert_eq!(table.totals(), vec![0, 0]);
        assert_eq!(table.get(1, 2), None);
        assert_eq!(table.get(0, 1), None);
    }

    #[test]
    fn test_totals_span_rows() {
        let mut table = IntervalScoreTable::new(2);
        table.add(1, 1, 3);
        table.push_row();
        table.add(1, 2, 4);
        table.add(2, 2, -1);
        assert_eq!(table.total(1), 7);
        assert_eq!(table.total(2), -1);
        assert_eq!(table.total(5), 0);
    }

    #[test]
    fn test_addition_saturates() {
        let mut table = IntervalScoreTable::new(1);
        table.add(1, 1, i64::MAX);
        table.add(1, 1, 1);
        assert_eq!(table.get(1, 1), Some(i64::MAX));
    }
}
