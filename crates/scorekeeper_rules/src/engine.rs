//! Generic interval scoring engine.
//!
//! The engine is a plain value: it owns the score table and the interval
//! counter, applies scores to the current interval, and on each advance asks
//! its [`SportRules`] whether the game is over.

use crate::error::ScoringError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::phase::{Advance, Ending, GamePhase};
use crate::rules::{SportRules, TennisRules, TennisScoreLabel, leaders_tied};
use crate::sport::Sport;
use crate::table::IntervalScoreTable;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Text shown in place of the interval once the game has ended.
pub const GAME_OVER_TEXT: &str = "Game over";

/// Scoring state for one game of a sport.
///
/// Invariants:
/// - `current_interval >= 1`
/// - the table holds exactly `current_interval` rows
/// - every row holds one cell per team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringEngine<R> {
    sport: Sport,
    rules: R,
    table: IntervalScoreTable,
    current_interval: usize,
    ending: Option<Ending>,
}

impl<R: SportRules> ScoringEngine<R> {
    /// Starts a game on the first interval with an all-zero row.
    #[instrument(skip(sport), fields(sport = %sport.name()))]
    pub fn new(sport: Sport, rules: R) -> Self {
        info!(teams = sport.teams(), intervals = sport.intervals(), "Starting game");
        let table = IntervalScoreTable::new(*sport.teams());
        Self {
            sport,
            rules,
            table,
            current_interval: 1,
            ending: None,
        }
    }

    /// Adds points to a team in the current interval.
    ///
    /// Team ids outside `[1, teams]` are ignored. Points are not validated
    /// and may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::GameOver`] once the game has ended.
    #[instrument(skip(self), fields(sport = %self.sport.name(), interval = self.current_interval))]
    pub fn add_score(&mut self, team: usize, points: i64) -> Result<(), ScoringError> {
        if self.ending.is_some() {
            warn!("Score rejected, game is over");
            return Err(ScoringError::GameOver);
        }
        if !self.table.add(team, self.current_interval, points) {
            debug!(teams = self.table.teams(), "Ignoring score for unknown team");
            return Ok(());
        }
        debug!(total = self.run_total(team), "Score added");
        self.assert_invariants();
        Ok(())
    }

    /// Closes the current interval.
    ///
    /// The game ends when the nominal interval count has been reached and
    /// there is no tie among the leaders that overtime could settle.
    /// Otherwise a fresh zero row is opened.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::GameOver`] once the game has ended.
    #[instrument(skip(self), fields(sport = %self.sport.name(), interval = self.current_interval))]
    pub fn advance_interval(&mut self) -> Result<Advance, ScoringError> {
        if self.ending.is_some() {
            warn!("Advance rejected, game is over");
            return Err(ScoringError::GameOver);
        }

        let regulation_done = self.current_interval >= *self.sport.intervals();
        if regulation_done && !(*self.sport.overtime() && self.leaders_tied()) {
            self.ending = Some(Ending::Completed);
            info!(totals = ?self.table.totals(), "Game completed");
            return Ok(Advance::Completed);
        }

        self.table.push_row();
        self.current_interval += 1;
        self.assert_invariants();

        if self.in_overtime() {
            info!(interval = self.current_interval, "Overtime interval started");
            Ok(Advance::Overtime(self.current_interval))
        } else {
            debug!(interval = self.current_interval, "Interval started");
            Ok(Advance::Next(self.current_interval))
        }
    }

    /// Advances when the rules say the current interval ended on score.
    ///
    /// Returns `Ok(None)` when nothing happened, including after game over.
    #[instrument(skip(self))]
    pub fn advance_if_over(&mut self) -> Result<Option<Advance>, ScoringError> {
        if self.ending.is_some() || !self.is_interval_over(self.current_interval) {
            return Ok(None);
        }
        self.advance_interval().map(Some)
    }

    /// Ends the game immediately. A game that already ended keeps its ending.
    #[instrument(skip(self), fields(sport = %self.sport.name()))]
    pub fn quit(&mut self) {
        if self.ending.is_none() {
            info!(interval = self.current_interval, "Game quit");
            self.ending = Some(Ending::Quit);
        }
    }

    /// Restarts the game on the first interval with every score cleared.
    #[instrument(skip(self), fields(sport = %self.sport.name()))]
    pub fn reset(&mut self) {
        info!("Game reset");
        self.table.clear();
        self.current_interval = 1;
        self.ending = None;
        self.assert_invariants();
    }

    /// Score of a team in one interval, if both exist.
    pub fn score(&self, team: usize, interval: usize) -> Option<i64> {
        if interval > self.current_interval {
            return None;
        }
        self.table.get(team, interval)
    }

    /// Sum of a team's scores over every interval played, 0 for an unknown team.
    pub fn run_total(&self, team: usize) -> i64 {
        self.table.total(team)
    }

    /// Whether an interval ended on score alone.
    pub fn is_interval_over(&self, interval: usize) -> bool {
        self.rules.is_interval_over(&self.table, interval)
    }

    /// Whether two or more teams share the leading running total.
    pub fn leaders_tied(&self) -> bool {
        leaders_tied(&self.rules, &self.table.totals())
    }

    /// Human label for an interval, e.g. "2nd Quarter" or "5th (OT) Quarter".
    pub fn interval_text(&self, interval: usize) -> String {
        let mut text = ordinal(interval);
        if interval > *self.sport.intervals() {
            text.push_str(" (OT)");
        }
        format!("{} {}", text, self.sport.interval_name())
    }

    /// Label for the current interval, or "Game over" once the game ended.
    pub fn current_interval_text(&self) -> String {
        if self.ending.is_some() {
            GAME_OVER_TEXT.to_string()
        } else {
            self.interval_text(self.current_interval)
        }
    }

    /// Returns true once the game has ended, by completion or quit.
    pub fn is_game_over(&self) -> bool {
        self.ending.is_some()
    }

    /// How the game ended, if it has.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Current phase of the game.
    pub fn phase(&self) -> GamePhase {
        match self.ending {
            Some(ending) => GamePhase::Over(ending),
            None if self.in_overtime() => GamePhase::Overtime,
            None => GamePhase::Active,
        }
    }

    /// Returns true when play has gone past the nominal interval count.
    pub fn in_overtime(&self) -> bool {
        self.current_interval > *self.sport.intervals()
    }

    /// The 1-based interval being played.
    pub fn current_interval(&self) -> usize {
        self.current_interval
    }

    /// Number of teams in the game.
    pub fn teams(&self) -> usize {
        self.table.teams()
    }

    /// The sport being scored.
    pub fn sport(&self) -> &Sport {
        &self.sport
    }

    /// The rules in force.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The raw score table.
    pub fn table(&self) -> &IntervalScoreTable {
        &self.table
    }

    fn assert_invariants(&self) {
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Scoring engine invariants violated"
        );
    }
}

impl ScoringEngine<TennisRules> {
    /// Number of finished games a team won against its opponent.
    ///
    /// Only intervals the rules consider over count; the game in progress
    /// never does. Teams without an opponent have no wins.
    #[instrument(skip(self))]
    pub fn total_wins(&self, team: usize) -> usize {
        let Some(opponent) = TennisRules::opponent(team, self.teams()) else {
            return 0;
        };
        (1..=self.current_interval)
            .filter(|&interval| self.is_interval_over(interval))
            .filter(|&interval| self.score(team, interval) > self.score(opponent, interval))
            .count()
    }

    /// How a team stands against its opponent in one interval.
    pub fn score_label(&self, team: usize, interval: usize) -> Option<TennisScoreLabel> {
        let opponent = TennisRules::opponent(team, self.teams())?;
        let own = self.score(team, interval)?;
        let other = self.score(opponent, interval)?;
        Some(TennisScoreLabel::score(own, other))
    }
}

/// English ordinal used in interval labels: 1st, 2nd, 3rd, then Nth.
fn ordinal(n: usize) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{}th", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StandardRules;

    fn football() -> ScoringEngine<StandardRules> {
        let sport = Sport::new("Football", true, 2, 4, "Quarter", true).unwrap();
        ScoringEngine::new(sport, StandardRules)
    }

    #[test]
    fn test_starts_on_first_interval() {
        let game = football();
        assert_eq!(game.current_interval(), 1);
        assert_eq!(game.table().len(), 1);
        assert_eq!(game.phase(), GamePhase::Active);
        assert_eq!(game.current_interval_text(), "1st Quarter");
    }

    #[test]
    fn test_interval_text() {
        let game = football();
        assert_eq!(game.interval_text(2), "2nd Quarter");
        assert_eq!(game.interval_text(3), "3rd Quarter");
        assert_eq!(game.interval_text(4), "4th Quarter");
        assert_eq!(game.interval_text(5), "5th (OT) Quarter");
    }

    #[test]
    fn test_score_beyond_current_interval_is_absent() {
        let game = football();
        assert_eq!(game.score(1, 1), Some(0));
        assert_eq!(game.score(1, 2), None);
        assert_eq!(game.score(3, 1), None);
    }

    #[test]
    fn test_overtime_phase() {
        let mut game = football();
        for _ in 0..4 {
            game.advance_interval().unwrap();
        }
        assert_eq!(game.phase(), GamePhase::Overtime);
        assert!(game.in_overtime());
        assert_eq!(game.current_interval_text(), "5th (OT) Quarter");
    }

    #[test]
    fn test_quit_keeps_completed_ending() {
        let sport = Sport::new("Golf", false, 1, 1, "Hole", false).unwrap();
        let mut game = ScoringEngine::new(sport, StandardRules);
        assert_eq!(game.advance_interval(), Ok(Advance::Completed));
        game.quit();
        assert_eq!(game.ending(), Some(Ending::Completed));
    }

    #[test]
    fn test_reset_after_quit() {
        let mut game = football();
        game.add_score(1, 3).unwrap();
        game.advance_interval().unwrap();
        game.quit();
        assert_eq!(game.current_interval_text(), GAME_OVER_TEXT);

        game.reset();
        assert_eq!(game.phase(), GamePhase::Active);
        assert_eq!(game.current_interval(), 1);
        assert_eq!(game.run_total(1), 0);
        assert!(game.add_score(2, 7).is_ok());
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(18), "18th");
    }
}
