// src/core/sanitize.rs

use crate::config::consts::MIN_WORD_LEN;
use crate::core::html;

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lower-case an extracted token and keep it only if it looks like an
/// answer word: alphabetic throughout and at least `MIN_WORD_LEN` letters.
/// Everything else (arrows, counts, decoration text) is dropped silently.
pub fn clean_word(raw: &str) -> Option<String> {
    let w = html::to_lower(&normalize_ws(raw));
    if w.chars().count() < MIN_WORD_LEN {
        return None;
    }
    if !w.chars().all(|c| c.is_alphabetic()) {
        return None;
    }
    Some(w)
}
