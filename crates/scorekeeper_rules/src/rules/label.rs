//! Tennis score vocabulary.
//!
//! A label is derived from a raw point pair and never stored. The first five
//! labels follow the point count directly; past Forty the label depends on
//! the opponent's points.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Points at which a player is on Forty.
pub const FORTY: i64 = 3;

/// Points at which a game can be won.
pub const GAME: i64 = 4;

/// How one side of a tennis game stands against the other.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum TennisScoreLabel {
    /// No points.
    Love,
    /// One point.
    Fifteen,
    /// Two points.
    Thirty,
    /// Three points.
    Forty,
    /// Game won.
    Game,
    /// Level at Forty or beyond.
    Deuce,
    /// One point ahead past Forty.
    Advantage,
    /// Behind past Forty.
    Disadvantage,
}

/// Labels reached by points alone, indexed by point count.
const BY_POINTS: [TennisScoreLabel; 5] = [
    TennisScoreLabel::Love,
    TennisScoreLabel::Fifteen,
    TennisScoreLabel::Thirty,
    TennisScoreLabel::Forty,
    TennisScoreLabel::Game,
];

impl TennisScoreLabel {
    /// Label for `points` when the score alone decides it (0..=4).
    pub fn from_points(points: i64) -> Option<Self> {
        usize::try_from(points)
            .ok()
            .and_then(|index| BY_POINTS.get(index))
            .copied()
    }

    /// How `own` points stand against `other` points.
    ///
    /// Rules apply in order and a later rule overwrites an earlier one:
    /// the points-only label first, then a two-point lead (Game from Game
    /// points up), a two-point deficit (Disadvantage from Forty up), a level
    /// score (Deuce from Forty up), and a one-point gap (Advantage or
    /// Disadvantage from Forty up).
    #[instrument]
    pub fn score(own: i64, other: i64) -> Self {
        let mut label = Self::from_points(own).unwrap_or(Self::Love);

        let lead = own.saturating_sub(other);
        if lead > 1 {
            if own >= GAME {
                label = Self::Game;
            }
        } else if lead < -1 {
            if own >= FORTY {
                label = Self::Disadvantage;
            }
        } else if lead == 0 {
            if own >= FORTY {
                label = Self::Deuce;
            }
        } else if own >= FORTY {
            label = if lead > 0 {
                Self::Advantage
            } else {
                Self::Disadvantage
            };
        }

        label
    }
}
