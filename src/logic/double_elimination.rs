//! Double-elimination bracket for 2 to 8 alliances, culminating in a best-of-three final.

use crate::models::{
    AllianceSource, Bracket, BreakSpec, ExternalMatchKey, MatchOrder, MatchSpec, Matchup,
    MatchupIndex, PlayoffError,
};

/// Largest bracket supported; smaller brackets are pruned versions of this one.
pub const MAX_ALLIANCES: u32 = 8;
pub const MIN_ALLIANCES: u32 = 2;

const FINAL_MATCH_DURATION_SEC: u32 = 300;

/// Build the bracket and its scheduled breaks.
///
/// Matchups that become byes because their higher seed does not exist are bypassed: their
/// consumers read the surviving source directly, leaving the bye unreachable from the final.
pub fn double_elimination_bracket(num_alliances: u32) -> Result<Bracket, PlayoffError> {
    if !(MIN_ALLIANCES..=MAX_ALLIANCES).contains(&num_alliances) {
        return Err(PlayoffError::InvalidAllianceCount(num_alliances));
    }
    use AllianceSource::Selection;
    let mut b = BracketBuilder::new(num_alliances);

    // Round 1
    let m1 = b.pre_final(1, "Round 1 Upper", 540, Selection(1), Selection(8));
    let m2 = b.pre_final(2, "Round 1 Upper", 540, Selection(4), Selection(5));
    let m3 = b.pre_final(3, "Round 1 Upper", 540, Selection(2), Selection(7));
    let m4 = b.pre_final(4, "Round 1 Upper", 540, Selection(3), Selection(6));

    // Round 2
    let m5 = b.pre_final(5, "Round 2 Lower", 540, b.loser(m1), b.loser(m2));
    let m6 = b.pre_final(6, "Round 2 Lower", 540, b.loser(m3), b.loser(m4));
    let m7 = b.pre_final(7, "Round 2 Upper", 540, b.winner(m1), b.winner(m2));
    let m8 = b.pre_final(8, "Round 2 Upper", 300, b.winner(m3), b.winner(m4));

    // Round 3
    let m9 = b.pre_final(9, "Round 3 Lower", 540, b.loser(m7), b.winner(m6));
    let m10 = b.pre_final(10, "Round 3 Lower", 300, b.loser(m8), b.winner(m5));

    // Round 4
    let m11 = b.pre_final(11, "Round 4 Upper", 540, b.winner(m7), b.winner(m8));
    let m12 = b.pre_final(12, "Round 4 Lower", 300, b.winner(m10), b.winner(m9));

    // Round 5
    let m13 = b.pre_final(13, "Round 5 Lower", 300, b.loser(m11), b.winner(m12));

    let root = b.final_series(14, b.winner(m11), b.winner(m13));

    let breaks = vec![
        BreakSpec::new(9, 360, "Field Break"),
        BreakSpec::new(11, 360, "Field Break"),
        BreakSpec::new(13, 900, "Awards Break"),
        BreakSpec::new(14, 900, "Awards Break"),
        BreakSpec::new(15, 900, "Awards Break"),
        BreakSpec::new(16, 900, "Awards Break"),
    ];

    Ok(Bracket::new(b.matchups, root, breaks))
}

struct BracketBuilder {
    num_alliances: u32,
    matchups: Vec<Matchup>,
}

impl BracketBuilder {
    fn new(num_alliances: u32) -> Self {
        Self {
            num_alliances,
            matchups: Vec::with_capacity(14),
        }
    }

    fn push(&mut self, matchup: Matchup) -> MatchupIndex {
        self.matchups.push(matchup);
        MatchupIndex(self.matchups.len() - 1)
    }

    fn pre_final(
        &mut self,
        number: u32,
        name_detail: &str,
        duration_sec: u32,
        red: AllianceSource,
        blue: AllianceSource,
    ) -> MatchupIndex {
        let id = format!("M{}", number);
        let spec = MatchSpec {
            long_name: format!("Match {}", number),
            short_name: id.clone(),
            name_detail: name_detail.to_string(),
            order: number,
            duration_sec,
            use_tiebreak_criteria: true,
            is_hidden: false,
            matchup_id: id.clone(),
            external_key: ExternalMatchKey::new("sf", number, 1),
        };
        self.push(Matchup::new(id, red, blue, 1, vec![spec]))
    }

    /// Three scheduled finals followed by three hidden overtimes, all in one matchup.
    fn final_series(
        &mut self,
        first_order: MatchOrder,
        red: AllianceSource,
        blue: AllianceSource,
    ) -> MatchupIndex {
        let specs = (1..=6)
            .map(|i| {
                let is_overtime = i > 3;
                let (long_name, short_name) = if is_overtime {
                    (format!("Overtime {}", i - 3), format!("O{}", i - 3))
                } else {
                    (format!("Final {}", i), format!("F{}", i))
                };
                MatchSpec {
                    long_name,
                    short_name,
                    name_detail: String::new(),
                    order: first_order + i - 1,
                    duration_sec: FINAL_MATCH_DURATION_SEC,
                    use_tiebreak_criteria: is_overtime,
                    is_hidden: is_overtime,
                    matchup_id: "F".to_string(),
                    external_key: ExternalMatchKey::new("f", 1, i),
                }
            })
            .collect();
        self.push(Matchup::new("F", red, blue, 2, specs))
    }

    fn winner(&self, prev: MatchupIndex) -> AllianceSource {
        self.source(prev, true)
    }

    fn loser(&self, prev: MatchupIndex) -> AllianceSource {
        self.source(prev, false)
    }

    /// Source for the winner or loser of `prev`, skipping `prev` if it is a bye.
    fn source(&self, prev: MatchupIndex, use_winner: bool) -> AllianceSource {
        let n = self.num_alliances;
        let matchup = &self.matchups[prev.0];
        let red_seed = matchup.red_source.nominal_seed(&self.matchups);
        let blue_seed = matchup.blue_source.nominal_seed(&self.matchups);

        if blue_seed > n && (red_seed <= n || red_seed > blue_seed) {
            log::trace!("{} is a bye for its red source ({} vs {})", matchup.id, red_seed, blue_seed);
            return if use_winner {
                matchup.red_source
            } else {
                matchup.blue_source
            };
        }
        if red_seed > n && (blue_seed <= n || blue_seed > red_seed) {
            log::trace!("{} is a bye for its blue source ({} vs {})", matchup.id, red_seed, blue_seed);
            return if use_winner {
                matchup.blue_source
            } else {
                matchup.red_source
            };
        }

        if use_winner {
            AllianceSource::Winner(prev)
        } else {
            AllianceSource::Loser(prev)
        }
    }
}
