//! Playoff bracket engine: double-elimination bracket for 2 to 8 alliances with a best-of-three final.

pub mod logic;
pub mod models;

pub use logic::{double_elimination_bracket, MAX_ALLIANCES, MIN_ALLIANCES};
pub use models::{
    Alliance, AllianceId, AllianceSource, Bracket, BreakSpec, ExternalMatchKey, MatchOrder,
    MatchSpec, MatchStatus, MatchView, Matchup, MatchupIndex, MatchupView, PlayoffError,
    PlayoffMatchResult, PlayoffResults, PlayoffTournament, PlayoffType, TournamentSnapshot,
    NO_ALLIANCE,
};
