//! Scoreboard rendering.
//!
//! Presentation is a pure read of engine state: teams across the top,
//! intervals down the side, a totals row at the bottom.

use crate::engine::ScoringEngine;
use crate::rules::{StandardRules, TennisRules};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// One labelled row of the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct ScoreboardRow {
    /// Row label (interval name or totals caption).
    label: String,
    /// One cell per team, in team order.
    cells: Vec<String>,
}

/// Tennis cell for a player left without an opponent.
pub const UNPAIRED_CELL: &str = "-";

/// A rendered view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Current interval text, or "Game over".
    title: String,
    /// Column headers, one per team.
    headers: Vec<String>,
    /// One row per interval played.
    rows: Vec<ScoreboardRow>,
    /// Totals row: points for most sports, games won for tennis.
    totals: ScoreboardRow,
    #[serde(skip)]
    #[getter(skip)]
    label_width: usize,
    #[serde(skip)]
    #[getter(skip)]
    cell_width: usize,
}

/// Builds a scoreboard from a game.
pub trait Present {
    /// Renders the current state of the game.
    fn scoreboard(&self) -> Scoreboard;
}

impl Present for ScoringEngine<StandardRules> {
    #[instrument(skip(self), fields(sport = %self.sport().name()))]
    fn scoreboard(&self) -> Scoreboard {
        let noun = if *self.sport().team_sport() { "Team" } else { "Player" };
        let rows = (1..=self.current_interval())
            .map(|interval| {
                let cells = (1..=self.teams())
                    .map(|team| self.score(team, interval).unwrap_or_default().to_string())
                    .collect();
                ScoreboardRow::new(self.interval_text(interval), cells)
            })
            .collect();
        let totals = (1..=self.teams())
            .map(|team| self.run_total(team).to_string())
            .collect();

        Scoreboard {
            title: self.current_interval_text(),
            headers: headers(noun, self.teams()),
            rows,
            totals: ScoreboardRow::new(totals_label(self.is_game_over()), totals),
            label_width: 17,
            cell_width: 10,
        }
    }
}

impl Present for ScoringEngine<TennisRules> {
    #[instrument(skip(self), fields(sport = %self.sport().name()))]
    fn scoreboard(&self) -> Scoreboard {
        let noun = if *self.sport().team_sport() { "Team" } else { "Person" };
        let rows = (1..=self.current_interval())
            .map(|interval| {
                let cells = (1..=self.teams())
                    .map(|team| {
                        self.score_label(team, interval)
                            .map(|label| label.to_string())
                            .unwrap_or_else(|| UNPAIRED_CELL.to_string())
                    })
                    .collect();
                ScoreboardRow::new(self.interval_text(interval), cells)
            })
            .collect();
        let wins = (1..=self.teams())
            .map(|team| self.total_wins(team).to_string())
            .collect();

        Scoreboard {
            title: self.current_interval_text(),
            headers: headers(noun, self.teams()),
            rows,
            totals: ScoreboardRow::new(totals_label(self.is_game_over()), wins),
            label_width: 15,
            cell_width: 13,
        }
    }
}

fn headers(noun: &str, teams: usize) -> Vec<String> {
    (1..=teams).map(|team| format!("{} {}", noun, team)).collect()
}

fn totals_label(game_over: bool) -> String {
    if game_over {
        "Final score:".to_string()
    } else {
        "Current score:".to_string()
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.label_width;
        let cell_width = self.cell_width.max(1);

        writeln!(f, "{}", self.title)?;
        writeln!(f)?;

        write!(f, "{:label_width$}", "")?;
        for header in &self.headers {
            write!(f, " {:>cell_width$}", header)?;
        }
        writeln!(f)?;

        write!(f, "{:label_width$}", "")?;
        for _ in &self.headers {
            write!(f, " {}", "-".repeat(cell_width))?;
        }
        writeln!(f)?;

        for row in self.rows.iter().chain(std::iter::once(&self.totals)) {
            write!(f, "{:<label_width$}", row.label)?;
            for cell in &row.cells {
                write!(f, " {:>cell_width$}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
