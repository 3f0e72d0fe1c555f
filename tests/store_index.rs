// tests/store_index.rs
//
// Store behavior without any network: per-date files and index.json.

use std::fs;
use std::path::PathBuf;

use bee_scrape::puzzle::PuzzleRecord;
use bee_scrape::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("bee_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn record(date: &str) -> PuzzleRecord {
    PuzzleRecord {
        display_weekday: "Tuesday".into(),
        display_date: "May 04, 2021".into(),
        print_date: date.into(),
        center_letter: "m".into(),
        outer_letters: ["a", "e", "h", "r", "s", "t"].map(String::from).to_vec(),
        valid_letters: ["m", "a", "e", "h", "r", "s", "t"].map(String::from).to_vec(),
        pangrams: vec!["hamster".into()],
        answers: vec!["hamster".into(), "mate".into()],
        id: 1620086400,
        free_expiration: 0,
        editor: "Sam Ezersky".into(),
    }
}

#[test]
fn save_writes_one_pretty_file_per_date() {
    let dir = tmp_dir("save");
    let rec = record("2021-05-04");

    assert!(store::save_puzzle(&dir, &rec).unwrap());

    let body = fs::read_to_string(dir.join("2021-05-04.json")).unwrap();
    assert!(body.ends_with('\n'));
    assert!(body.contains("\"centerLetter\": \"m\""));

    let back: PuzzleRecord = serde_json::from_str(&body).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn save_refuses_to_overwrite() {
    let dir = tmp_dir("overwrite");
    let rec = record("2021-05-05");

    assert!(store::save_puzzle(&dir, &rec).unwrap());
    assert!(!store::save_puzzle(&dir, &rec).unwrap());
}

#[test]
fn existing_dates_ignores_index_and_strays() {
    let dir = tmp_dir("existing");
    store::save_puzzle(&dir, &record("2021-05-04")).unwrap();
    store::save_puzzle(&dir, &record("2021-05-06")).unwrap();
    fs::write(dir.join("index.json"), "{}\n").unwrap();
    fs::write(dir.join("notes.txt"), "scratch\n").unwrap();

    let dates = store::existing_dates(&dir).unwrap();
    assert_eq!(dates.len(), 2);
    assert!(dates.contains("2021-05-04"));
    assert!(dates.contains("2021-05-06"));
}

#[test]
fn existing_dates_tolerates_missing_dir() {
    let dir = tmp_dir("missing");
    assert!(store::existing_dates(&dir).unwrap().is_empty());
}

#[test]
fn index_counts_and_sorts_record_files() {
    let dir = tmp_dir("index");
    store::save_puzzle(&dir, &record("2021-05-06")).unwrap();
    store::save_puzzle(&dir, &record("2021-05-04")).unwrap();

    let total = store::write_index(&dir).unwrap();
    assert_eq!(total, 2);

    let body = fs::read_to_string(dir.join("index.json")).unwrap();
    let index: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(index["totalPuzzles"], 2);
    assert_eq!(
        index["files"],
        serde_json::json!(["2021-05-04.json", "2021-05-06.json"])
    );
    assert!(index["lastUpdated"].as_str().unwrap().ends_with('Z'));

    // the index never lists itself
    let total = store::write_index(&dir).unwrap();
    assert_eq!(total, 2);
}
