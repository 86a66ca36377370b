//! Sport-specific scoring policies.
//!
//! The engine owns the score table and the interval counter; a rule set
//! decides the two things that differ between sports:
//!
//! - **Termination**: whether an interval ended on score alone
//!   ([`SportRules::is_interval_over`]). Sports that answer `false` wait for
//!   the scorer to advance the interval by hand.
//! - **Tie-break**: whether a running total counts as tied with the leader
//!   ([`SportRules::ties`]), which decides whether overtime is played.

pub mod label;
pub mod standard;
pub mod tennis;

pub use label::TennisScoreLabel;
pub use standard::StandardRules;
pub use tennis::TennisRules;

use crate::table::IntervalScoreTable;
use serde::{Deserialize, Serialize};

/// Policy injected into the scoring engine at construction.
pub trait SportRules: std::fmt::Debug + Clone {
    /// Which rule set this is.
    fn kind(&self) -> RuleSet;

    /// Whether the given 1-based interval has ended on score alone.
    fn is_interval_over(&self, _table: &IntervalScoreTable, _interval: usize) -> bool {
        false
    }

    /// Whether a team total counts as tied with the leading total.
    fn ties(&self, leader: i64, total: i64) -> bool {
        leader == total
    }

    /// Whether the engine advances by itself once an interval is over.
    fn auto_advance(&self) -> bool {
        false
    }
}

/// Rule set names, as used in sport catalogs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RuleSet {
    /// Manual interval advance, overtime on a tie among the leaders.
    #[default]
    Standard,
    /// Win-by-two games with auto advance.
    Tennis,
}

/// Returns true when two or more teams share the highest total.
///
/// Totals are scanned in team order; a total the policy ties with the
/// current leader marks a tie, a strictly higher total becomes the new
/// leader and clears it.
pub fn leaders_tied<R: SportRules>(rules: &R, totals: &[i64]) -> bool {
    let mut leader: Option<i64> = None;
    let mut tied = false;
    for &total in totals {
        match leader {
            Some(max) if rules.ties(max, total) => tied = true,
            Some(max) if total > max => {
                leader = Some(total);
                tied = false;
            }
            Some(_) => {}
            None => leader = Some(total),
        }
    }
    tied
}
