//! Alliance sides, per-match results, and per-match display status.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Alliance number from alliance selection. Zero means "not yet known".
pub type AllianceId = u32;

/// Sentinel for an alliance slot whose source has not resolved.
pub const NO_ALLIANCE: AllianceId = 0;

/// Global 1-based match ordinal, used as the key for results.
pub type MatchOrder = u32;

/// Recorded results for the playoff, keyed by match order. A missing key means "not yet scored".
pub type PlayoffResults = HashMap<MatchOrder, PlayoffMatchResult>;

/// Which side of a matchup.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alliance {
    #[default]
    Red,
    Blue,
}

/// Classified outcome of a single scored match, supplied by the scoring module.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffMatchResult {
    RedWon,
    BlueWon,
    Tie,
}

impl PlayoffMatchResult {
    /// The winning side, or None for a tie.
    pub fn winner(self) -> Option<Alliance> {
        match self {
            PlayoffMatchResult::RedWon => Some(Alliance::Red),
            PlayoffMatchResult::BlueWon => Some(Alliance::Blue),
            PlayoffMatchResult::Tie => None,
        }
    }
}

/// What a schedule display should show for one match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Still to be played (or the next one needed).
    #[default]
    Scheduled,
    /// Not needed: an overtime not yet reached, or any match after the matchup was decided.
    Hidden,
    RedWon,
    BlueWon,
    Tie,
}

impl From<PlayoffMatchResult> for MatchStatus {
    fn from(result: PlayoffMatchResult) -> Self {
        match result {
            PlayoffMatchResult::RedWon => MatchStatus::RedWon,
            PlayoffMatchResult::BlueWon => MatchStatus::BlueWon,
            PlayoffMatchResult::Tie => MatchStatus::Tie,
        }
    }
}
