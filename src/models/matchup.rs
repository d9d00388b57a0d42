//! Matchup nodes of the bracket DAG and the sources that feed them.

use crate::models::match_spec::MatchSpec;
use crate::models::outcome::{Alliance, AllianceId, MatchStatus, PlayoffResults, NO_ALLIANCE};
use serde::{Deserialize, Serialize};

/// Position of a matchup in its bracket's arena.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MatchupIndex(pub usize);

/// Where the alliance occupying one side of a matchup comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllianceSource {
    /// Seed number from alliance selection.
    Selection(AllianceId),
    /// Winner of another matchup.
    Winner(MatchupIndex),
    /// Loser of another matchup.
    Loser(MatchupIndex),
}

impl AllianceSource {
    /// Alliance currently occupying this slot, or `NO_ALLIANCE` if the upstream matchup is undecided.
    pub fn resolve(&self, matchups: &[Matchup]) -> AllianceId {
        match *self {
            AllianceSource::Selection(seed) => seed,
            AllianceSource::Winner(idx) => matchups[idx.0].winning_alliance_id,
            AllianceSource::Loser(idx) => matchups[idx.0].losing_alliance_id,
        }
    }

    /// Highest seed that could end up in this slot, ignoring results.
    ///
    /// A reduced bracket only ever drops its highest seeds, so the larger of an upstream matchup's
    /// nominal seeds is the one that decides whether that matchup is a bye.
    pub fn nominal_seed(&self, matchups: &[Matchup]) -> AllianceId {
        match *self {
            AllianceSource::Selection(seed) => seed,
            AllianceSource::Winner(idx) | AllianceSource::Loser(idx) => {
                let upstream = &matchups[idx.0];
                upstream
                    .red_source
                    .nominal_seed(matchups)
                    .max(upstream.blue_source.nominal_seed(matchups))
            }
        }
    }

    /// The matchup this source depends on, if any.
    pub fn upstream(&self) -> Option<MatchupIndex> {
        match *self {
            AllianceSource::Selection(_) => None,
            AllianceSource::Winner(idx) | AllianceSource::Loser(idx) => Some(idx),
        }
    }
}

/// A node in the bracket: two alliances play one or more matches until one side has enough wins.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    /// Stable id such as "M7" or "F".
    pub id: String,
    pub red_source: AllianceSource,
    pub blue_source: AllianceSource,
    pub num_wins_to_advance: u32,
    /// Matches in the order they are played.
    pub match_specs: Vec<MatchSpec>,

    pub red_alliance_id: AllianceId,
    pub blue_alliance_id: AllianceId,
    pub red_wins: u32,
    pub blue_wins: u32,
    pub ties: u32,
    /// Results consumed from the front of `match_specs`, ties included.
    pub num_matches_played: u32,
    pub is_complete: bool,
    pub winning_alliance_id: AllianceId,
    pub losing_alliance_id: AllianceId,
}

impl Matchup {
    pub fn new(
        id: impl Into<String>,
        red_source: AllianceSource,
        blue_source: AllianceSource,
        num_wins_to_advance: u32,
        match_specs: Vec<MatchSpec>,
    ) -> Self {
        Self {
            id: id.into(),
            red_source,
            blue_source,
            num_wins_to_advance,
            match_specs,
            red_alliance_id: NO_ALLIANCE,
            blue_alliance_id: NO_ALLIANCE,
            red_wins: 0,
            blue_wins: 0,
            ties: 0,
            num_matches_played: 0,
            is_complete: false,
            winning_alliance_id: NO_ALLIANCE,
            losing_alliance_id: NO_ALLIANCE,
        }
    }

    /// Recompute derived state from the resolved alliances and the full result map.
    ///
    /// Results are consumed in match order and consumption stops at the first unscored match or
    /// once a side has enough wins. Nothing is counted until both alliances are known.
    pub fn update(
        &mut self,
        red_alliance_id: AllianceId,
        blue_alliance_id: AllianceId,
        results: &PlayoffResults,
    ) {
        self.red_alliance_id = red_alliance_id;
        self.blue_alliance_id = blue_alliance_id;
        self.red_wins = 0;
        self.blue_wins = 0;
        self.ties = 0;
        self.num_matches_played = 0;
        self.is_complete = false;
        self.winning_alliance_id = NO_ALLIANCE;
        self.losing_alliance_id = NO_ALLIANCE;

        if !self.alliances_resolved() {
            return;
        }

        for spec in &self.match_specs {
            if self.red_wins >= self.num_wins_to_advance
                || self.blue_wins >= self.num_wins_to_advance
            {
                break;
            }
            let Some(result) = results.get(&spec.order) else {
                break;
            };
            match result.winner() {
                Some(Alliance::Red) => self.red_wins += 1,
                Some(Alliance::Blue) => self.blue_wins += 1,
                None => self.ties += 1,
            }
            self.num_matches_played += 1;
        }

        if self.red_wins >= self.num_wins_to_advance {
            self.is_complete = true;
            self.winning_alliance_id = red_alliance_id;
            self.losing_alliance_id = blue_alliance_id;
        } else if self.blue_wins >= self.num_wins_to_advance {
            self.is_complete = true;
            self.winning_alliance_id = blue_alliance_id;
            self.losing_alliance_id = red_alliance_id;
        }
    }

    /// Display status of the match at `position` within this matchup.
    pub fn match_status(&self, position: usize, results: &PlayoffResults) -> MatchStatus {
        let Some(spec) = self.match_specs.get(position) else {
            return MatchStatus::Hidden;
        };
        let played = self.num_matches_played as usize;
        if position < played {
            return results
                .get(&spec.order)
                .map(|r| MatchStatus::from(*r))
                .unwrap_or_default();
        }
        if self.is_complete || (spec.is_hidden && position > played) {
            return MatchStatus::Hidden;
        }
        MatchStatus::Scheduled
    }

    /// Whether both sides are known.
    pub fn alliances_resolved(&self) -> bool {
        self.red_alliance_id != NO_ALLIANCE && self.blue_alliance_id != NO_ALLIANCE
    }

    pub fn first_match(&self) -> Option<&MatchSpec> {
        self.match_specs.first()
    }
}
