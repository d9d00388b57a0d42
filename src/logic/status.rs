//! Advancement text shown for each alliance once a matchup is decided.

use crate::models::{Alliance, AllianceSource, Bracket, MatchupIndex, PlayoffError};
use std::collections::HashMap;

/// Downstream matchups consuming a matchup's winner and loser.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Successors {
    pub winner: Option<MatchupIndex>,
    pub loser: Option<MatchupIndex>,
}

/// Map each reachable matchup to the reachable matchups that consume its outcome.
///
/// Built from the sources as they stand after pruning, so a bypassed bye never appears.
pub fn successor_map(
    bracket: &Bracket,
) -> Result<HashMap<MatchupIndex, Successors>, PlayoffError> {
    let reachable = super::traversal::reachable_matchups(bracket)?;
    let mut map: HashMap<MatchupIndex, Successors> =
        reachable.iter().map(|idx| (*idx, Successors::default())).collect();

    for consumer in reachable {
        let matchup = bracket.matchup(consumer);
        for source in [matchup.red_source, matchup.blue_source] {
            match source {
                AllianceSource::Winner(prev) => {
                    map.entry(prev).or_default().winner = Some(consumer);
                }
                AllianceSource::Loser(prev) => {
                    map.entry(prev).or_default().loser = Some(consumer);
                }
                AllianceSource::Selection(_) => {}
            }
        }
    }
    Ok(map)
}

/// Text for `side` of the matchup at `idx`; empty until the matchup is complete.
pub fn status_text(
    bracket: &Bracket,
    successors: &HashMap<MatchupIndex, Successors>,
    idx: MatchupIndex,
    side: Alliance,
) -> String {
    let matchup = bracket.matchup(idx);
    if !matchup.is_complete {
        return String::new();
    }
    let won = match side {
        Alliance::Red => matchup.red_wins >= matchup.num_wins_to_advance,
        Alliance::Blue => matchup.blue_wins >= matchup.num_wins_to_advance,
    };
    let next = successors.get(&idx).copied().unwrap_or_default();

    if won {
        match next.winner {
            Some(consumer) => advances_to(bracket, consumer),
            None => "Tournament Winner".to_string(),
        }
    } else {
        match (next.loser, next.winner) {
            (Some(consumer), _) => advances_to(bracket, consumer),
            (None, None) => "Tournament Finalist".to_string(),
            (None, Some(_)) => "Eliminated".to_string(),
        }
    }
}

fn advances_to(bracket: &Bracket, consumer: MatchupIndex) -> String {
    match bracket.matchup(consumer).first_match() {
        Some(spec) => format!("Advances to {}", spec.display_name()),
        None => format!("Advances to {}", bracket.matchup(consumer).id),
    }
}
