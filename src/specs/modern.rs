// src/specs/modern.rs
//! Extraction *spec* for the archive site's modern answer-list markup.
//!
//! Ground truth is a `<div id="main-answer-list">` container holding one
//! `<li>` per answer. Pangrams are wrapped `<mark><strong>word</strong></mark>`;
//! plain answers sit either directly in the item (older pages) or inside a
//! `<div class="flex-list-item">` with a trailing `↗` lookup arrow (newer
//! pages). Pangram markers from this path are trusted downstream.

use crate::config::consts::MIN_WORDS;
use crate::core::html::{div_inner_by_marker, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::{clean_word, normalize_entities};

use super::{PangramMarkers, WordsBundle};

const CONTAINER_ID: &str = "main-answer-list";

/// `None` means "this page doesn't look like the modern format" — either
/// the container is missing or it holds too few items to be an answer
/// list. Items that don't clean up into words are dropped, not errors;
/// the markup carries decoration text alongside the answers.
pub fn extract(doc: &str) -> Option<WordsBundle> {
    let list = div_inner_by_marker(doc, CONTAINER_ID)?;

    let mut answers: Vec<String> = Vec::new();
    let mut pangrams: Vec<String> = Vec::new();
    let mut items = 0usize;

    let mut pos = 0usize;
    while let Some((li_s, li_e)) = next_tag_block_ci(list, "<li", "</li>", pos) {
        let li = &list[li_s..li_e];
        pos = li_e;
        items += 1;

        if let Some(word) = pangram_text(li) {
            if let Some(w) = clean_word(&word) {
                pangrams.push(w.clone());
                answers.push(w);
            }
            continue;
        }

        let text = strip_tags(normalize_entities(&inner_after_open_tag(li)));
        // flex-list-item layout appends a lookup arrow after the word
        let text = match text.split_once('↗') {
            Some((head, _)) => head,
            None => text.as_str(),
        };
        if let Some(w) = clean_word(text) {
            answers.push(w);
        } else {
            logd!("modern: dropped non-word item {:?}", text);
        }
    }

    if items < MIN_WORDS {
        return None;
    }

    Some(WordsBundle {
        answers,
        markers: PangramMarkers::Trusted(pangrams),
    })
}

/// `<mark><strong>word</strong></mark>` inside one list item.
fn pangram_text(li: &str) -> Option<String> {
    let (m_s, m_e) = next_tag_block_ci(li, "<mark", "</mark>", 0)?;
    let mark = &li[m_s..m_e];
    let (s_s, s_e) = next_tag_block_ci(mark, "<strong", "</strong>", 0)?;
    let word = strip_tags(normalize_entities(&inner_after_open_tag(&mark[s_s..s_e])));
    if word.is_empty() { None } else { Some(word) }
}
