//! Identity records for individual playoff matches and scheduled breaks.

use crate::models::outcome::MatchOrder;
use serde::{Deserialize, Serialize};

/// Key under which a match is published to external result services (e.g. `sf7m1`, `f1m2`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ExternalMatchKey {
    /// "sf" for pre-final matches, "f" for the final series.
    pub comp_level: String,
    pub set_number: u32,
    pub match_number: u32,
}

impl ExternalMatchKey {
    pub fn new(comp_level: impl Into<String>, set_number: u32, match_number: u32) -> Self {
        Self {
            comp_level: comp_level.into(),
            set_number,
            match_number,
        }
    }
}

impl std::fmt::Display for ExternalMatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}m{}", self.comp_level, self.set_number, self.match_number)
    }
}

/// One match within a matchup.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSpec {
    /// e.g. "Match 7", "Final 1", "Overtime 1".
    pub long_name: String,
    /// e.g. "M7", "F1", "O1".
    pub short_name: String,
    /// Round label such as "Round 2 Upper"; empty for the final series.
    pub name_detail: String,
    pub order: MatchOrder,
    pub duration_sec: u32,
    /// Whether a tied score is broken by the scoring tiebreakers before being reported.
    pub use_tiebreak_criteria: bool,
    /// Overtime matches start hidden and are only shown once needed.
    pub is_hidden: bool,
    /// Id of the matchup this match belongs to.
    pub matchup_id: String,
    pub external_key: ExternalMatchKey,
}

impl MatchSpec {
    /// Long name plus round detail, used in "Advances to ..." text.
    pub fn display_name(&self) -> String {
        if self.name_detail.is_empty() {
            self.long_name.clone()
        } else {
            format!("{} \u{2013} {}", self.long_name, self.name_detail)
        }
    }
}

/// A scheduled pause in the playoff running order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BreakSpec {
    /// The break follows the match with this order.
    pub after_order: MatchOrder,
    pub duration_sec: u32,
    pub description: String,
}

impl BreakSpec {
    pub fn new(after_order: MatchOrder, duration_sec: u32, description: impl Into<String>) -> Self {
        Self {
            after_order,
            duration_sec,
            description: description.into(),
        }
    }
}
