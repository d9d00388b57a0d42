//! Integration tests for the serialized tournament snapshot.

use playoff_bracket::{MatchStatus, PlayoffMatchResult, PlayoffResults, PlayoffTournament, PlayoffType};
use serde_json::json;

#[test]
fn snapshot_lists_matches_matchups_and_breaks_in_order() {
    let mut t = PlayoffTournament::new(PlayoffType::DoubleElimination, 6).unwrap();
    let mut results = PlayoffResults::new();
    results.insert(2, PlayoffMatchResult::BlueWon);
    t.update(&results).unwrap();

    let snapshot = t.snapshot();
    assert_eq!(snapshot.matches.len(), 15);
    assert_eq!(snapshot.matchups.len(), 10);
    assert_eq!(snapshot.breaks.len(), 6);
    assert_eq!(snapshot.winning_alliance_id, None);

    let ids: Vec<&str> = snapshot.matchups.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["M2", "M4", "M7", "M8", "M9", "M10", "M11", "M12", "M13", "F"]);

    let m2 = &snapshot.matchups[0];
    assert!(m2.is_complete);
    assert_eq!((m2.winning_alliance_id, m2.losing_alliance_id), (5, 4));
    assert_eq!(m2.red_status, "Advances to Match 10 \u{2013} Round 3 Lower");
    assert_eq!(m2.blue_status, "Advances to Match 7 \u{2013} Round 2 Upper");

    let first = &snapshot.matches[0];
    assert_eq!(first.spec.short_name, "M2");
    assert_eq!(first.status, MatchStatus::BlueWon);
    let m7 = snapshot.matches.iter().find(|m| m.spec.order == 7).unwrap();
    assert_eq!((m7.red_alliance_id, m7.blue_alliance_id), (1, 5));
}

#[test]
fn snapshot_serializes_with_snake_case_fields() {
    let t = PlayoffTournament::new(PlayoffType::DoubleElimination, 8).unwrap();
    let value = serde_json::to_value(t.snapshot()).unwrap();

    assert_eq!(value["playoff_type"], json!("double_elimination"));
    assert_eq!(value["num_alliances"], json!(8));
    assert_eq!(value["winning_alliance_id"], json!(null));

    let first = &value["matches"][0];
    assert_eq!(first["long_name"], json!("Match 1"));
    assert_eq!(first["external_key"], json!({"comp_level": "sf", "set_number": 1, "match_number": 1}));
    assert_eq!(first["red_alliance_id"], json!(1));
    assert_eq!(first["blue_alliance_id"], json!(8));
    assert_eq!(first["status"], json!("scheduled"));
    assert_eq!(value["matches"][16]["short_name"], json!("O1"));
    assert_eq!(value["matches"][16]["status"], json!("hidden"));

    assert_eq!(value["breaks"][2], json!({"after_order": 13, "duration_sec": 900, "description": "Awards Break"}));
    assert_eq!(value["matchups"][13]["id"], json!("F"));
    assert_eq!(value["matchups"][13]["red_status"], json!(""));
}

#[test]
fn results_deserialize_from_snake_case_names() {
    let results: PlayoffResults =
        serde_json::from_value(json!({"1": "red_won", "2": "blue_won", "3": "tie"})).unwrap();
    assert_eq!(results.get(&1), Some(&PlayoffMatchResult::RedWon));
    assert_eq!(results.get(&2), Some(&PlayoffMatchResult::BlueWon));
    assert_eq!(results.get(&3), Some(&PlayoffMatchResult::Tie));
}
