//! Read-only views of a tournament for display and JSON output.

use crate::models::match_spec::{BreakSpec, MatchSpec};
use crate::models::matchup::Matchup;
use crate::models::outcome::{AllianceId, MatchStatus};
use crate::models::tournament::PlayoffType;
use serde::{Deserialize, Serialize};

/// One match with its current alliances and status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    #[serde(flatten)]
    pub spec: MatchSpec,
    pub red_alliance_id: AllianceId,
    pub blue_alliance_id: AllianceId,
    pub status: MatchStatus,
}

/// Derived state of one matchup plus its advancement text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchupView {
    pub id: String,
    pub red_alliance_id: AllianceId,
    pub blue_alliance_id: AllianceId,
    pub red_wins: u32,
    pub blue_wins: u32,
    pub ties: u32,
    pub is_complete: bool,
    pub winning_alliance_id: AllianceId,
    pub losing_alliance_id: AllianceId,
    pub red_status: String,
    pub blue_status: String,
}

impl MatchupView {
    pub fn new(matchup: &Matchup, red_status: String, blue_status: String) -> Self {
        Self {
            id: matchup.id.clone(),
            red_alliance_id: matchup.red_alliance_id,
            blue_alliance_id: matchup.blue_alliance_id,
            red_wins: matchup.red_wins,
            blue_wins: matchup.blue_wins,
            ties: matchup.ties,
            is_complete: matchup.is_complete,
            winning_alliance_id: matchup.winning_alliance_id,
            losing_alliance_id: matchup.losing_alliance_id,
            red_status,
            blue_status,
        }
    }
}

/// Whole-bracket view: matches in order, matchups in order of their first match, and breaks.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub playoff_type: PlayoffType,
    pub num_alliances: u32,
    pub matches: Vec<MatchView>,
    pub matchups: Vec<MatchupView>,
    pub breaks: Vec<BreakSpec>,
    /// Set once the final is decided.
    pub winning_alliance_id: Option<AllianceId>,
}
