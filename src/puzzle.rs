// src/puzzle.rs
//
// Canonical puzzle record and the builder that assembles one from a
// fetched document: extractor fallback, letter inference, pangram
// validation, invariant checks.

use chrono::{LocalResult, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::config::consts::{EDITOR, MIN_WORDS, PUZZLE_LETTERS};
use crate::error::ScrapeError;
use crate::letters;
use crate::specs::{self, PangramMarkers};

/// One day's puzzle in the published JSON schema. Field names on the
/// wire are camelCase; `id` is the date's local-midnight epoch seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRecord {
    pub display_weekday: String,
    pub display_date: String,
    pub print_date: String,
    pub center_letter: String,
    pub outer_letters: Vec<String>,
    pub valid_letters: Vec<String>,
    pub pangrams: Vec<String>,
    pub answers: Vec<String>,
    pub id: i64,
    #[serde(default)]
    pub free_expiration: i64,
    #[serde(default)]
    pub editor: String,
}

/// Build the canonical record for `date` out of an archive document.
///
/// Strategy order: modern answer-list markup first, then the legacy
/// embedded array. Both declining is `NoExtractableContent`. Either way
/// the result faces the same structural checks — at least `MIN_WORDS`
/// answers over exactly `PUZZLE_LETTERS` distinct letters. Answers from
/// the legacy path are sorted (the nested groups carry no meaningful
/// order); the modern path keeps document order.
pub fn build_record(doc: &str, date: NaiveDate) -> Result<PuzzleRecord, ScrapeError> {
    let (bundle, from_legacy) = match specs::modern::extract(doc) {
        Some(b) => (b, false),
        None => match specs::legacy::extract(doc) {
            Some(b) => (b, true),
            None => return Err(ScrapeError::NoExtractableContent),
        },
    };

    let mut answers = bundle.answers;
    let (center, letter_set) = letters::infer(&answers)?;

    let pangrams = match bundle.markers {
        PangramMarkers::Trusted(p) => p,
        PangramMarkers::Candidates(c) => letters::validate_pangrams(&c, &letter_set),
    };

    if answers.len() < MIN_WORDS {
        return Err(ScrapeError::InvalidStructure(format!(
            "only {} answers",
            answers.len()
        )));
    }
    if letter_set.len() != PUZZLE_LETTERS {
        return Err(ScrapeError::InvalidStructure(format!(
            "letter set has {} letters",
            letter_set.len()
        )));
    }

    if from_legacy {
        answers.sort();
    }

    let outer_letters: Vec<String> = letter_set
        .iter()
        .filter(|&&ch| ch != center)
        .map(|ch| ch.to_string())
        .collect();

    let mut valid_letters = Vec::with_capacity(PUZZLE_LETTERS);
    valid_letters.push(center.to_string());
    valid_letters.extend(outer_letters.iter().cloned());

    Ok(PuzzleRecord {
        display_weekday: date.format("%A").to_string(),
        display_date: date.format("%B %d, %Y").to_string(),
        print_date: date.format("%Y-%m-%d").to_string(),
        center_letter: center.to_string(),
        outer_letters,
        valid_letters,
        pangrams,
        answers,
        id: local_midnight_epoch(date),
        free_expiration: 0,
        editor: s!(EDITOR),
    })
}

/// Epoch seconds of `date` at 00:00 in the machine's local zone.
/// Midnight can be skipped or doubled around DST shifts; the earliest
/// reading wins, with a UTC fallback for zones that skip it entirely.
fn local_midnight_epoch(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match chrono::Local.from_local_datetime(&midnight) {
        LocalResult::Single(t) => t.timestamp(),
        LocalResult::Ambiguous(t, _) => t.timestamp(),
        LocalResult::None => midnight.and_utc().timestamp(),
    }
}
