//! Arena holding every matchup of a bracket, rooted at the final.

use crate::models::match_spec::BreakSpec;
use crate::models::matchup::{AllianceSource, Matchup, MatchupIndex};
use crate::models::outcome::AllianceId;

/// All matchups of a bracket, including ones pruned from the reachable set.
#[derive(Clone, Debug)]
pub struct Bracket {
    matchups: Vec<Matchup>,
    root: MatchupIndex,
    breaks: Vec<BreakSpec>,
}

impl Bracket {
    pub(crate) fn new(matchups: Vec<Matchup>, root: MatchupIndex, breaks: Vec<BreakSpec>) -> Self {
        Self {
            matchups,
            root,
            breaks,
        }
    }

    pub fn root(&self) -> MatchupIndex {
        self.root
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    pub fn matchup(&self, idx: MatchupIndex) -> &Matchup {
        &self.matchups[idx.0]
    }

    pub(crate) fn matchup_mut(&mut self, idx: MatchupIndex) -> &mut Matchup {
        &mut self.matchups[idx.0]
    }

    pub fn breaks(&self) -> &[BreakSpec] {
        &self.breaks
    }

    pub fn resolve(&self, source: &AllianceSource) -> AllianceId {
        source.resolve(&self.matchups)
    }
}
