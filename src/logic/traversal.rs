//! Depth-first walks of the bracket from the final: reachability, spec collection, and updates.

use crate::models::{
    Bracket, MatchOrder, MatchSpec, MatchupIndex, PlayoffError, PlayoffResults,
};
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, PartialEq)]
enum Visit {
    InProgress,
    Done,
}

/// Matchups reachable from the root, each listed after its red and then blue sources.
pub fn reachable_matchups(bracket: &Bracket) -> Result<Vec<MatchupIndex>, PlayoffError> {
    let mut visits = HashMap::new();
    let mut ordered = Vec::new();
    visit(bracket, bracket.root(), &mut visits, &mut ordered)?;
    Ok(ordered)
}

fn visit(
    bracket: &Bracket,
    idx: MatchupIndex,
    visits: &mut HashMap<MatchupIndex, Visit>,
    ordered: &mut Vec<MatchupIndex>,
) -> Result<(), PlayoffError> {
    match visits.get(&idx) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            return Err(PlayoffError::CycleDetected(bracket.matchup(idx).id.clone()));
        }
        None => {}
    }
    visits.insert(idx, Visit::InProgress);

    let matchup = bracket.matchup(idx);
    for source in [matchup.red_source, matchup.blue_source] {
        if let Some(upstream) = source.upstream() {
            visit(bracket, upstream, visits, ordered)?;
        }
    }

    visits.insert(idx, Visit::Done);
    ordered.push(idx);
    Ok(())
}

/// Every reachable match, sorted by order.
pub fn collect_match_specs(bracket: &Bracket) -> Result<Vec<MatchSpec>, PlayoffError> {
    let mut specs: Vec<MatchSpec> = reachable_matchups(bracket)?
        .into_iter()
        .flat_map(|idx| bracket.matchup(idx).match_specs.iter().cloned())
        .collect();
    specs.sort_by_key(|s| s.order);
    if let Some(pair) = specs.windows(2).find(|w| w[0].order == w[1].order) {
        return Err(PlayoffError::DuplicateMatchOrder(pair[0].order));
    }
    Ok(specs)
}

/// Distinct reachable matchups keyed by id.
pub fn collect_match_groups(
    bracket: &Bracket,
) -> Result<HashMap<String, MatchupIndex>, PlayoffError> {
    Ok(reachable_matchups(bracket)?
        .into_iter()
        .map(|idx| (bracket.matchup(idx).id.clone(), idx))
        .collect())
}

/// Which reachable matchup owns each match order.
pub fn match_owners(bracket: &Bracket) -> Result<HashMap<MatchOrder, MatchupIndex>, PlayoffError> {
    let mut owners = HashMap::new();
    for idx in reachable_matchups(bracket)? {
        for spec in &bracket.matchup(idx).match_specs {
            if owners.insert(spec.order, idx).is_some() {
                return Err(PlayoffError::DuplicateMatchOrder(spec.order));
            }
        }
    }
    Ok(owners)
}

/// Recompute every reachable matchup from scratch against `results`.
///
/// Sources are always updated before their consumers, so a single pass settles the bracket.
pub fn update_bracket(bracket: &mut Bracket, results: &PlayoffResults) -> Result<(), PlayoffError> {
    let ordered = reachable_matchups(bracket)?;

    let known: HashSet<MatchOrder> = ordered
        .iter()
        .flat_map(|idx| bracket.matchup(*idx).match_specs.iter().map(|s| s.order))
        .collect();
    for order in results.keys().filter(|o| !known.contains(o)) {
        log::debug!("Ignoring result for match order {} (not in this bracket)", order);
    }

    for idx in ordered {
        let (red, blue) = {
            let matchup = bracket.matchup(idx);
            (
                bracket.resolve(&matchup.red_source),
                bracket.resolve(&matchup.blue_source),
            )
        };
        bracket.matchup_mut(idx).update(red, blue, results);
    }
    log::debug!("Updated bracket with {} result(s)", results.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllianceSource, Matchup};

    fn cyclic_bracket() -> Bracket {
        let a = Matchup::new(
            "A",
            AllianceSource::Selection(1),
            AllianceSource::Winner(MatchupIndex(1)),
            1,
            Vec::new(),
        );
        let b = Matchup::new(
            "B",
            AllianceSource::Winner(MatchupIndex(0)),
            AllianceSource::Selection(2),
            1,
            Vec::new(),
        );
        Bracket::new(vec![a, b], MatchupIndex(1), Vec::new())
    }

    #[test]
    fn cycle_is_reported_by_traversal_and_update() {
        let mut bracket = cyclic_bracket();
        assert_eq!(
            reachable_matchups(&bracket),
            Err(PlayoffError::CycleDetected("B".to_string()))
        );
        assert!(matches!(
            update_bracket(&mut bracket, &PlayoffResults::new()),
            Err(PlayoffError::CycleDetected(_))
        ));
    }

    #[test]
    fn shared_upstream_is_visited_once() {
        let root = Matchup::new(
            "F",
            AllianceSource::Winner(MatchupIndex(0)),
            AllianceSource::Loser(MatchupIndex(0)),
            1,
            Vec::new(),
        );
        let first = Matchup::new(
            "M1",
            AllianceSource::Selection(1),
            AllianceSource::Selection(2),
            1,
            Vec::new(),
        );
        let bracket = Bracket::new(vec![first, root], MatchupIndex(1), Vec::new());
        assert_eq!(
            reachable_matchups(&bracket).unwrap(),
            vec![MatchupIndex(0), MatchupIndex(1)]
        );
    }
}
