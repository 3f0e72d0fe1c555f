// src/specs/legacy.rs
//! Extraction *spec* for the archive site's legacy embedded-array pages.
//!
//! Pre-2022 pages ship their answers inside plotting-library state in a
//! `<script>` block, under a `"words"` key, as nested arrays of quoted
//! strings. The surrounding script is not valid JSON on its own, so the
//! array is recovered with a single-pass bracket counter and the words
//! with a plain quote scan — no parser. Words of pangram length become
//! *candidates* only; the format carries no markers, so validation
//! against the inferred letter set happens downstream.

use crate::config::consts::{MIN_WORDS, PANGRAM_MIN_LEN};
use crate::core::html::next_tag_block_ci;
use crate::core::sanitize::clean_word;

use super::{PangramMarkers, WordsBundle};

const WORDS_KEY: &str = "\"words\"";

/// `None` means no script block yielded a usable word array: the key token
/// never occurs, a bracket scan never closes (malformed block — skipped,
/// the scan moves on to the next script), or too few words are pooled.
pub fn extract(doc: &str) -> Option<WordsBundle> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<script", "</script>", pos) {
        let script = &doc[s..e];
        pos = e;

        if !script.contains(WORDS_KEY) {
            continue;
        }
        let Some(span) = array_span(script) else {
            logd!("legacy: unterminated word array, trying next script block");
            continue;
        };

        let mut answers: Vec<String> = Vec::new();
        let mut candidates: Vec<String> = Vec::new();

        // The span is nested groups joined by "],["; quoted literals
        // inside each group are the words.
        for group in span.split("],[") {
            for raw in quoted_strings(group) {
                let Some(word) = clean_word(raw) else { continue };
                if word.chars().count() >= PANGRAM_MIN_LEN {
                    candidates.push(word.clone());
                }
                answers.push(word);
            }
        }

        if answers.len() < MIN_WORDS {
            logd!("legacy: only {} words in script block, skipping", answers.len());
            continue;
        }

        return Some(WordsBundle {
            answers,
            markers: PangramMarkers::Candidates(candidates),
        });
    }
    None
}

/// Content between the first `[` after the key token and its matching
/// `]`, exclusive. Linear depth count; `None` when the array never
/// closes.
fn array_span(script: &str) -> Option<&str> {
    let key = script.find(WORDS_KEY)?;
    let open = script[key..].find('[')? + key;

    let mut depth = 0usize;
    for (i, ch) in script[open..].char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&script[open + 1..open + i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// All `"..."` spans, in order. Tolerates stray brackets and commas
/// between them; gives up on an unpaired quote.
fn quoted_strings(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = s;
    while let Some(start) = rest.find('"') {
        let after = &rest[start + 1..];
        let Some(len) = after.find('"') else { break };
        out.push(&after[..len]);
        rest = &after[len + 1..];
    }
    out
}
