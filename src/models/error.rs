//! Errors raised while building or traversing a playoff bracket.

use crate::models::outcome::MatchOrder;

/// Errors that can occur during bracket operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayoffError {
    /// Alliance count outside the range the bracket supports.
    InvalidAllianceCount(u32),
    /// A matchup was reached again while its own sources were still being visited.
    CycleDetected(String),
    /// More than one matchup claims the same match order.
    DuplicateMatchOrder(MatchOrder),
    /// No playoff type with this name.
    UnknownPlayoffType(String),
}

impl std::fmt::Display for PlayoffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayoffError::InvalidAllianceCount(_) => {
                write!(f, "double-elimination bracket must have between 2 and 8 alliances")
            }
            PlayoffError::CycleDetected(id) => {
                write!(f, "matchup {} is part of a cycle in the bracket", id)
            }
            PlayoffError::DuplicateMatchOrder(order) => {
                write!(f, "match order {} belongs to more than one matchup", order)
            }
            PlayoffError::UnknownPlayoffType(name) => write!(f, "unknown playoff type: {}", name),
        }
    }
}

impl std::error::Error for PlayoffError {}
