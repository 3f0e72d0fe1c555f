// src/letters.rs
//
// Letter inference over a cleaned word list, and pangram validation
// against the inferred letter set.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::html::to_lower;
use crate::error::ScrapeError;

/// Distinct letters of one word. Repeats within a word count once, so
/// "spell" contributes {s,p,e,l}.
pub fn word_letters(word: &str) -> BTreeSet<char> {
    word.chars().collect()
}

/// Find the center letter (the one present in *every* word) and the full
/// letter set (union across all words).
///
/// Membership, not frequency: a letter that appears many times in most
/// words but is missing from even one is not the center. Zero candidates
/// and ties both reject; BTreeMap keeps the walk order deterministic
/// either way.
pub fn infer(words: &[String]) -> Result<(char, BTreeSet<char>), ScrapeError> {
    let mut tally: BTreeMap<char, usize> = BTreeMap::new();
    let mut letters: BTreeSet<char> = BTreeSet::new();

    for word in words {
        for ch in word_letters(word) {
            *tally.entry(ch).or_insert(0) += 1;
            letters.insert(ch);
        }
    }

    let universal: Vec<char> = tally
        .iter()
        .filter(|&(_, &n)| n == words.len())
        .map(|(&ch, _)| ch)
        .collect();

    match universal[..] {
        [center] => Ok((center, letters)),
        _ => Err(ScrapeError::NoUniversalLetter),
    }
}

/// Keep the candidates that use the whole letter set.
///
/// Exact matches always pass. One extra distinct letter is tolerated —
/// the embedded-array format sometimes fuses a stray character onto a
/// real pangram — but a missing letter, or two extras, rejects.
/// Order-preserving; no de-duplication.
pub fn validate_pangrams(candidates: &[String], letters: &BTreeSet<char>) -> Vec<String> {
    candidates
        .iter()
        .filter(|word| is_pangram(word, letters))
        .cloned()
        .collect()
}

fn is_pangram(word: &str, letters: &BTreeSet<char>) -> bool {
    let used = word_letters(&to_lower(word));
    letters.is_subset(&used) && used.difference(letters).count() <= 1
}
