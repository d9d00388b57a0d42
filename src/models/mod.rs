//! Data structures for the playoff bracket: results, match specs, matchups, and the tournament.

mod bracket;
mod error;
mod match_spec;
mod matchup;
mod outcome;
mod snapshot;
mod tournament;

pub use bracket::Bracket;
pub use error::PlayoffError;
pub use match_spec::{BreakSpec, ExternalMatchKey, MatchSpec};
pub use matchup::{AllianceSource, Matchup, MatchupIndex};
pub use outcome::{
    Alliance, AllianceId, MatchOrder, MatchStatus, PlayoffMatchResult, PlayoffResults, NO_ALLIANCE,
};
pub use snapshot::{MatchView, MatchupView, TournamentSnapshot};
pub use tournament::{PlayoffTournament, PlayoffType};
