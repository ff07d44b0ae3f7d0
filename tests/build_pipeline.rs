//! End-to-end pipeline tests: CSV text in, persisted JSON artifacts out.

use std::collections::HashMap;
use std::fs;

use tempfile::tempdir;

use tickdex_tests::{
    build_suggestion_index, build_ticker_directory, read_records, SuggestionIndex,
};

const SCREENER_CSV: &str = "\
Symbol,Name,Market Cap,Country,Sector
AAL,American Airlines Group Inc,10000000000,United States,Transportation
AAPL,Apple Inc.,2000000000000,United States,Technology
AMD,Advanced Micro Devices Inc,100000000000,United States,Technology
XYZ,Xyz Holdings,,United States,Finance
";

#[test]
fn csv_to_artifacts_round_trip() {
    // Given: a screener export on disk
    let workdir = tempdir().expect("tempdir");
    let suggestions_path = workdir.path().join("autocomplete-suggestions.json");
    let directory_path = workdir.path().join("ticker-dictionary.json");

    // When: the full pipeline runs and both artifacts are persisted
    let records = read_records(SCREENER_CSV.as_bytes()).expect("csv parses");
    let directory = build_ticker_directory(&records);
    let index = build_suggestion_index(records);

    fs::write(&suggestions_path, index.to_json().expect("serializes")).expect("write");
    fs::write(
        &directory_path,
        serde_json::to_string(&directory).expect("serializes"),
    )
    .expect("write");

    // Then: reloading the suggestion artifact reproduces the index exactly
    let reloaded = SuggestionIndex::from_json(
        &fs::read_to_string(&suggestions_path).expect("artifact exists"),
    )
    .expect("deserializes");
    assert_eq!(reloaded, index);

    // And: the directory artifact maps tickers to raw names
    let reloaded_directory: HashMap<String, String> = serde_json::from_str(
        &fs::read_to_string(&directory_path).expect("artifact exists"),
    )
    .expect("deserializes");
    assert_eq!(reloaded_directory.len(), 4);
    assert_eq!(
        reloaded_directory.get("AAPL").map(String::as_str),
        Some("Apple Inc.")
    );
}

#[test]
fn built_index_ranks_ingested_records_by_market_cap() {
    let records = read_records(SCREENER_CSV.as_bytes()).expect("csv parses");
    let index = build_suggestion_index(records);

    // Apple (largest cap) leads every shared ticker prefix; Airlines with a
    // tenth the cap of AMD trails both.
    let suggestions = index.lookup("A").expect("key must exist");
    assert_eq!(suggestions, ["AAPL", "AMD", "AAL"]);

    // The blank-cap record still resolves by name word.
    assert_eq!(
        index.lookup("HOLDINGS").map(|held| held[0].as_str()),
        Some("XYZ")
    );
}

#[test]
fn suggestion_lists_never_exceed_capacity_anywhere() {
    let records = read_records(SCREENER_CSV.as_bytes()).expect("csv parses");
    let index = build_suggestion_index(records);

    for key in index.keys() {
        let held = index.lookup(key).expect("listed key must resolve");
        assert!(held.len() <= 5, "key {key:?} holds {} tickers", held.len());
        let mut seen = held.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), held.len(), "key {key:?} has duplicate tickers");
    }
}
