//! Bracket driver: builds a playoff bracket, applies recorded results, prints the state as JSON.
//! Run with: cargo run --bin bracket -- results.csv
//! The results file has a header row and `order,result` rows, result one of red_won, blue_won, tie.
//! Override with env: NUM_ALLIANCES (2 to 8, default 8), PLAYOFF_TYPE (default double_elimination).

use playoff_bracket::{MatchOrder, PlayoffMatchResult, PlayoffResults, PlayoffTournament, PlayoffType};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct ResultRow {
    order: MatchOrder,
    result: PlayoffMatchResult,
}

fn default_num_alliances() -> u32 {
    8
}

fn read_results(path: &Path) -> Result<PlayoffResults, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut results = PlayoffResults::new();
    for row in reader.deserialize() {
        let row: ResultRow = row?;
        // Later rows replace earlier ones, like re-committing a match.
        results.insert(row.order, row.result);
    }
    Ok(results)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let num_alliances: u32 = std::env::var("NUM_ALLIANCES")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or_else(default_num_alliances);
    let playoff_type: PlayoffType = match std::env::var("PLAYOFF_TYPE") {
        Ok(name) => name.parse()?,
        Err(_) => PlayoffType::default(),
    };

    let mut tournament = PlayoffTournament::new(playoff_type, num_alliances)?;
    log::info!(
        "Built {} bracket for {} alliances ({} matches)",
        playoff_type,
        num_alliances,
        tournament.match_specs().len()
    );

    if let Some(path) = std::env::args().nth(1) {
        let results = read_results(Path::new(&path))?;
        log::info!("Applying {} result(s) from {}", results.len(), path);
        tournament.update(&results)?;
    }

    if let Some(winner) = tournament.winning_alliance_id() {
        log::info!("Tournament won by alliance {}", winner);
    }

    println!("{}", serde_json::to_string_pretty(&tournament.snapshot())?);
    Ok(())
}
