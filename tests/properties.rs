//! Randomised checks of bracket invariants over every bracket size.

use playoff_bracket::{
    PlayoffMatchResult, PlayoffResults, PlayoffTournament, PlayoffType, TournamentSnapshot,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 200;

fn tournament(num_alliances: u32) -> PlayoffTournament {
    PlayoffTournament::new(PlayoffType::DoubleElimination, num_alliances).unwrap()
}

fn random_result(rng: &mut StdRng) -> PlayoffMatchResult {
    match rng.gen_range(0..10) {
        0 => PlayoffMatchResult::Tie,
        1..=5 => PlayoffMatchResult::RedWon,
        _ => PlayoffMatchResult::BlueWon,
    }
}

/// Results for most of the 19 match orders, so runs usually reach the final.
fn random_results(rng: &mut StdRng) -> PlayoffResults {
    let mut results = PlayoffResults::new();
    for order in 1..=19 {
        if rng.gen_bool(0.9) {
            results.insert(order, random_result(rng));
        }
    }
    results
}

fn snapshot_for(num_alliances: u32, results: &PlayoffResults) -> TournamentSnapshot {
    let mut t = tournament(num_alliances);
    t.update(results).unwrap();
    t.snapshot()
}

#[test]
fn update_is_a_pure_function_of_results() {
    let mut rng = StdRng::seed_from_u64(254);
    for num_alliances in 2..=8 {
        let mut reused = tournament(num_alliances);
        for _ in 0..ROUNDS {
            let results = random_results(&mut rng);
            reused.update(&results).unwrap();
            assert_eq!(reused.snapshot(), snapshot_for(num_alliances, &results));
        }
    }
}

#[test]
fn removing_a_result_restores_the_previous_state() {
    let mut rng = StdRng::seed_from_u64(1114);
    for num_alliances in 2..=8 {
        for _ in 0..ROUNDS {
            let results = random_results(&mut rng);
            let order = rng.gen_range(1..=19);
            let mut without = results.clone();
            without.remove(&order);

            let mut t = tournament(num_alliances);
            t.update(&without).unwrap();
            let before = t.snapshot();
            t.update(&results).unwrap();
            t.update(&without).unwrap();
            assert_eq!(t.snapshot(), before);
        }
    }
}

#[test]
fn adding_results_never_undoes_progress() {
    let mut rng = StdRng::seed_from_u64(971);
    for num_alliances in 2..=8 {
        for _ in 0..ROUNDS {
            let superset = random_results(&mut rng);
            let subset: PlayoffResults = superset
                .iter()
                .filter(|_| rng.gen_bool(0.6))
                .map(|(order, result)| (*order, *result))
                .collect();

            let mut small = tournament(num_alliances);
            small.update(&subset).unwrap();
            let mut large = tournament(num_alliances);
            large.update(&superset).unwrap();

            for (id, matchup) in small.match_groups() {
                if matchup.is_complete {
                    let grown = large.matchup(id).unwrap();
                    assert!(grown.is_complete, "{id} with {num_alliances} alliances");
                    assert_eq!(grown.winning_alliance_id, matchup.winning_alliance_id);
                    assert_eq!(grown.losing_alliance_id, matchup.losing_alliance_id);
                }
            }
        }
    }
}

#[test]
fn winner_and_loser_are_consistent_with_completion() {
    let mut rng = StdRng::seed_from_u64(118);
    for num_alliances in 2..=8 {
        let mut t = tournament(num_alliances);
        for _ in 0..ROUNDS {
            t.update(&random_results(&mut rng)).unwrap();
            for matchup in t.match_groups().values() {
                if matchup.is_complete {
                    assert_ne!(matchup.winning_alliance_id, 0);
                    assert_ne!(matchup.losing_alliance_id, 0);
                    assert_ne!(matchup.winning_alliance_id, matchup.losing_alliance_id);
                    assert!(
                        matchup.red_wins.max(matchup.blue_wins) >= matchup.num_wins_to_advance
                    );
                } else {
                    assert_eq!(matchup.winning_alliance_id, 0);
                    assert_eq!(matchup.losing_alliance_id, 0);
                    assert!(matchup.red_wins < matchup.num_wins_to_advance);
                    assert!(matchup.blue_wins < matchup.num_wins_to_advance);
                }
            }
        }
    }
}

#[test]
fn final_completes_exactly_at_two_wins() {
    let mut rng = StdRng::seed_from_u64(8);
    for num_alliances in 2..=8 {
        let mut t = tournament(num_alliances);
        for _ in 0..ROUNDS {
            t.update(&random_results(&mut rng)).unwrap();
            let f = t.final_matchup();
            assert_eq!(f.num_wins_to_advance, 2);
            assert_eq!(f.match_specs.len(), 6);
            assert_eq!(f.is_complete, f.red_wins == 2 || f.blue_wins == 2);
            assert!(f.red_wins <= 2 && f.blue_wins <= 2);
            assert_eq!(f.red_wins + f.blue_wins + f.ties, f.num_matches_played);
        }
    }
}

#[test]
fn only_seeded_alliances_ever_play() {
    let mut rng = StdRng::seed_from_u64(604);
    for num_alliances in 2..=8 {
        let mut t = tournament(num_alliances);
        for _ in 0..ROUNDS {
            t.update(&random_results(&mut rng)).unwrap();
            for spec in t.match_specs() {
                let (red, blue) = t.alliances_for_match(spec.order).unwrap();
                assert!(red <= num_alliances, "{} red {red}", spec.short_name);
                assert!(blue <= num_alliances, "{} blue {blue}", spec.short_name);
                if red != 0 && blue != 0 {
                    assert_ne!(red, blue, "{}", spec.short_name);
                }
            }
        }
    }
}
