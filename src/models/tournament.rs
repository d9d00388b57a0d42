//! PlayoffTournament: the bracket plus the lookups consumers need between updates.

use crate::logic::{
    collect_match_groups, collect_match_specs, double_elimination_bracket, match_owners,
    status_text, successor_map, update_bracket, Successors,
};
use crate::models::bracket::Bracket;
use crate::models::error::PlayoffError;
use crate::models::match_spec::{BreakSpec, MatchSpec};
use crate::models::matchup::{Matchup, MatchupIndex};
use crate::models::outcome::{
    Alliance, AllianceId, MatchOrder, MatchStatus, PlayoffResults, NO_ALLIANCE,
};
use crate::models::snapshot::{MatchView, MatchupView, TournamentSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Playoff format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffType {
    #[default]
    DoubleElimination,
}

impl std::fmt::Display for PlayoffType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayoffType::DoubleElimination => write!(f, "double_elimination"),
        }
    }
}

impl std::str::FromStr for PlayoffType {
    type Err = PlayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "double_elimination" => Ok(PlayoffType::DoubleElimination),
            _ => Err(PlayoffError::UnknownPlayoffType(s.to_string())),
        }
    }
}

/// One tournament's bracket. State changes only through `update`.
#[derive(Clone, Debug)]
pub struct PlayoffTournament {
    playoff_type: PlayoffType,
    num_alliances: u32,
    bracket: Bracket,
    /// Reachable matches sorted by order.
    match_specs: Vec<MatchSpec>,
    match_groups: HashMap<String, MatchupIndex>,
    match_owners: HashMap<MatchOrder, MatchupIndex>,
    successors: HashMap<MatchupIndex, Successors>,
    /// Results from the most recent update (for match status).
    results: PlayoffResults,
}

impl PlayoffTournament {
    /// Build the bracket for `num_alliances` and resolve the initial seeding.
    pub fn new(playoff_type: PlayoffType, num_alliances: u32) -> Result<Self, PlayoffError> {
        let bracket = match playoff_type {
            PlayoffType::DoubleElimination => double_elimination_bracket(num_alliances)?,
        };
        let match_specs = collect_match_specs(&bracket)?;
        let match_groups = collect_match_groups(&bracket)?;
        let match_owners = match_owners(&bracket)?;
        let successors = successor_map(&bracket)?;
        log::debug!(
            "Built {} bracket for {} alliances: {} matchups, {} matches",
            playoff_type,
            num_alliances,
            match_groups.len(),
            match_specs.len()
        );

        let mut tournament = Self {
            playoff_type,
            num_alliances,
            bracket,
            match_specs,
            match_groups,
            match_owners,
            successors,
            results: PlayoffResults::new(),
        };
        tournament.update(&PlayoffResults::new())?;
        Ok(tournament)
    }

    /// Recompute the whole bracket from `results`. The outcome depends only on `results`.
    pub fn update(&mut self, results: &PlayoffResults) -> Result<(), PlayoffError> {
        update_bracket(&mut self.bracket, results)?;
        self.results = results.clone();
        Ok(())
    }

    pub fn playoff_type(&self) -> PlayoffType {
        self.playoff_type
    }

    pub fn num_alliances(&self) -> u32 {
        self.num_alliances
    }

    pub fn final_matchup(&self) -> &Matchup {
        self.bracket.matchup(self.bracket.root())
    }

    /// Reachable matches in playing order.
    pub fn match_specs(&self) -> &[MatchSpec] {
        &self.match_specs
    }

    /// Reachable matchups keyed by id.
    pub fn match_groups(&self) -> HashMap<&str, &Matchup> {
        self.match_groups
            .iter()
            .map(|(id, idx)| (id.as_str(), self.bracket.matchup(*idx)))
            .collect()
    }

    pub fn breaks(&self) -> &[BreakSpec] {
        self.bracket.breaks()
    }

    /// Reachable matchup with this id.
    pub fn matchup(&self, id: &str) -> Option<&Matchup> {
        self.match_groups.get(id).map(|idx| self.bracket.matchup(*idx))
    }

    /// Matchup containing the match with this order.
    pub fn matchup_for_match(&self, order: MatchOrder) -> Option<&Matchup> {
        self.match_owners
            .get(&order)
            .map(|idx| self.bracket.matchup(*idx))
    }

    /// (red, blue) alliances for a match; zero for a side not yet decided.
    pub fn alliances_for_match(&self, order: MatchOrder) -> Option<(AllianceId, AllianceId)> {
        self.matchup_for_match(order)
            .map(|m| (m.red_alliance_id, m.blue_alliance_id))
    }

    /// Advancement text for one side of a matchup; empty while undecided.
    pub fn status_text(&self, matchup_id: &str, side: Alliance) -> Option<String> {
        let idx = *self.match_groups.get(matchup_id)?;
        Some(status_text(&self.bracket, &self.successors, idx, side))
    }

    /// Advancement text for (red, blue) of a matchup.
    pub fn status_texts(&self, matchup_id: &str) -> Option<(String, String)> {
        Some((
            self.status_text(matchup_id, Alliance::Red)?,
            self.status_text(matchup_id, Alliance::Blue)?,
        ))
    }

    /// Display status of a match, or None if the order is not part of this bracket.
    pub fn match_status(&self, order: MatchOrder) -> Option<MatchStatus> {
        let matchup = self.matchup_for_match(order)?;
        let position = matchup.match_specs.iter().position(|s| s.order == order)?;
        Some(matchup.match_status(position, &self.results))
    }

    /// Reachable matches a schedule display should list right now.
    pub fn visible_match_specs(&self) -> Vec<&MatchSpec> {
        self.match_specs
            .iter()
            .filter(|s| self.match_status(s.order) != Some(MatchStatus::Hidden))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.final_matchup().is_complete
    }

    /// Tournament winner, once the final is decided.
    pub fn winning_alliance_id(&self) -> Option<AllianceId> {
        let final_matchup = self.final_matchup();
        if final_matchup.is_complete && final_matchup.winning_alliance_id != NO_ALLIANCE {
            Some(final_matchup.winning_alliance_id)
        } else {
            None
        }
    }

    /// Serializable view of every reachable match and matchup.
    pub fn snapshot(&self) -> TournamentSnapshot {
        let matches = self
            .match_specs
            .iter()
            .map(|spec| {
                let (red_alliance_id, blue_alliance_id) =
                    self.alliances_for_match(spec.order).unwrap_or_default();
                MatchView {
                    spec: spec.clone(),
                    red_alliance_id,
                    blue_alliance_id,
                    status: self.match_status(spec.order).unwrap_or_default(),
                }
            })
            .collect();

        let mut matchups: Vec<&Matchup> = self.match_groups().into_values().collect();
        matchups.sort_by_key(|m| m.first_match().map(|s| s.order));
        let matchups = matchups
            .into_iter()
            .map(|m| {
                let (red_status, blue_status) = self.status_texts(&m.id).unwrap_or_default();
                MatchupView::new(m, red_status, blue_status)
            })
            .collect();

        TournamentSnapshot {
            playoff_type: self.playoff_type,
            num_alliances: self.num_alliances,
            matches,
            matchups,
            breaks: self.breaks().to_vec(),
            winning_alliance_id: self.winning_alliance_id(),
        }
    }
}
