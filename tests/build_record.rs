// tests/build_record.rs
//
// End-to-end: realistic page bodies in, canonical records out.

use chrono::NaiveDate;

use bee_scrape::error::ScrapeError;
use bee_scrape::puzzle::{PuzzleRecord, build_record};
use bee_scrape::specs;

const WORDS: [&str; 18] = [
    "mate", "meat", "team", "tame", "mast", "math", "mesh", "term", "stem",
    "therm", "meter", "smart", "steam", "tamer", "harms", "smear", "master",
    "stream",
];

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 5, 4).unwrap()
}

/// Answer-list page with the chrome a real archive page carries around
/// the container: nav divs, a stats script, unrelated lists.
fn modern_page() -> String {
    let mut lis = String::new();
    for w in WORDS {
        lis.push_str(&format!(
            r#"<li><div class="flex-list-item">{w} <a href="https://example.com/defn">↗</a></div></li>"#
        ));
    }
    lis.push_str("<li><mark><strong>hamster</strong></mark></li>");
    lis.push_str("<li><mark><strong>hamsters</strong></mark></li>");

    format!(
        r#"<!DOCTYPE html><html><head><title>Answers</title>
<script>var analytics = {{"page": "answers"}};</script></head>
<body>
<div id="navbar"><ul><li>Home</li><li>Archive</li></ul></div>
<div id="main-answer-list"><h3>Answer list</h3><ul class="column-list">{lis}</ul></div>
<div id="footer"><ul><li>About</li></ul></div>
</body></html>"#
    )
}

fn legacy_page(words: &[&str]) -> String {
    let quoted: Vec<String> = words.iter().map(|w| format!("\"{w}\"")).collect();
    let half = quoted.len() / 2;
    format!(
        r#"<!DOCTYPE html><html><head>
<script type="text/javascript">
  Bokeh.safely(function() {{
    var docs_json = {{"defs":[],"roots":{{"references":[{{"attributes":{{"data":{{"words":[[{}],[{}]],"x":[1,2]}}}}}}]}}}};
  }});
</script></head><body><div id="chart"></div></body></html>"#,
        quoted[..half].join(","),
        quoted[half..].join(",")
    )
}

#[test]
fn modern_page_builds_canonical_record() {
    let rec = build_record(&modern_page(), date()).unwrap();

    assert_eq!(rec.center_letter, "m");
    assert_eq!(rec.outer_letters, ["a", "e", "h", "r", "s", "t"]);
    assert_eq!(rec.valid_letters, ["m", "a", "e", "h", "r", "s", "t"]);
    assert_eq!(rec.pangrams, ["hamster", "hamsters"]);
    assert_eq!(rec.answers.len(), 20);
}

#[test]
fn modern_wins_when_both_formats_are_present() {
    // Graft a legacy word array onto a modern page; the answer list is
    // the better source and must be preferred.
    let mut doc = modern_page();
    doc.push_str(&legacy_page(&["zzzz"; 20]));
    let rec = build_record(&doc, date()).unwrap();
    assert_eq!(rec.center_letter, "m");
    assert!(!rec.answers.iter().any(|w| w == "zzzz"));
    // modern path keeps document order
    assert_eq!(rec.answers[0], "mate");
}

#[test]
fn legacy_page_builds_sorted_record() {
    let mut words = WORDS.to_vec();
    words.push("hamster");
    words.push("hamsters");
    let rec = build_record(&legacy_page(&words), date()).unwrap();

    assert_eq!(rec.center_letter, "m");
    assert_eq!(rec.pangrams, ["hamster", "hamsters"]);
    let mut sorted = rec.answers.clone();
    sorted.sort();
    assert_eq!(rec.answers, sorted);
}

#[test]
fn unrecognized_page_is_a_typed_failure() {
    let doc = "<!DOCTYPE html><html><body><h1>Not Found</h1></body></html>";
    assert_eq!(
        build_record(doc, date()),
        Err(ScrapeError::NoExtractableContent)
    );
}

#[test]
fn record_json_round_trips_through_published_schema() {
    let rec = build_record(&modern_page(), date()).unwrap();
    let json = serde_json::to_string_pretty(&rec).unwrap();

    for key in [
        "\"displayWeekday\"", "\"displayDate\"", "\"printDate\"",
        "\"centerLetter\"", "\"outerLetters\"", "\"validLetters\"",
        "\"pangrams\"", "\"answers\"", "\"id\"", "\"freeExpiration\"",
        "\"editor\"",
    ] {
        assert!(json.contains(key), "missing {key} in {json}");
    }

    let back: PuzzleRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn feed_records_bypass_record_building() {
    let record = serde_json::json!({
        "displayWeekday": "Tuesday",
        "displayDate": "May 04, 2021",
        "printDate": "2021-05-04",
        "centerLetter": "m",
        "outerLetters": ["a", "e", "h", "r", "s", "t"],
        "validLetters": ["m", "a", "e", "h", "r", "s", "t"],
        "pangrams": ["hamster"],
        "answers": ["hamster", "mate"],
        "id": 1620086400,
        "freeExpiration": 0,
        "editor": "Sam Ezersky"
    });
    let doc = format!(
        r#"<html><head><script>window.gameData = {{"pastPuzzles":{{"today":{record},"thisWeek":[],"lastWeek":[]}}}};</script></head></html>"#
    );

    let records = specs::feed::extract(&doc).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].print_date, "2021-05-04");
    assert_eq!(records[0].answers, ["hamster", "mate"]);
}
