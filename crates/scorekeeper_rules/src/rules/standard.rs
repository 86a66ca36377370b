//! Default rules: the scorer ends each interval, ties among the leaders go to overtime.

use super::{RuleSet, SportRules};
use serde::{Deserialize, Serialize};

/// Rules for football, golf and any sport the scorer advances by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRules;

impl SportRules for StandardRules {
    fn kind(&self) -> RuleSet {
        RuleSet::Standard
    }
}
