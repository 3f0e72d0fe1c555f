// src/specs/feed.rs
//! Extraction *spec* for the official puzzle page.
//!
//! The page embeds finished records as a JavaScript assignment
//! `window.gameData = { ... }`. The object is cut out with a brace
//! counter (same scanning idiom as the legacy word array) and parsed as
//! JSON; `pastPuzzles` carries today's record, yesterday's, and the two
//! trailing weeks. Records from this path are already canonical and skip
//! record building entirely.

use serde::Deserialize;

use crate::core::html::next_tag_block_ci;
use crate::puzzle::PuzzleRecord;

const GAME_DATA_KEY: &str = "window.gameData";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameData {
    #[serde(default)]
    past_puzzles: PastPuzzles,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PastPuzzles {
    today: Option<PuzzleRecord>,
    yesterday: Option<PuzzleRecord>,
    this_week: Vec<PuzzleRecord>,
    last_week: Vec<PuzzleRecord>,
}

/// Every record currently published on the page, newest first (today,
/// yesterday, this week, last week). `None` when no script block carries
/// a parseable `window.gameData` assignment.
pub fn extract(doc: &str) -> Option<Vec<PuzzleRecord>> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<script", "</script>", pos) {
        let script = &doc[s..e];
        pos = e;

        let Some(key) = script.find(GAME_DATA_KEY) else {
            continue;
        };
        let Some(span) = object_span(&script[key..]) else {
            logd!("feed: unterminated gameData object, trying next script block");
            continue;
        };
        match serde_json::from_str::<GameData>(span) {
            Ok(data) => {
                let p = data.past_puzzles;
                let mut out: Vec<PuzzleRecord> = Vec::new();
                out.extend(p.today);
                out.extend(p.yesterday);
                out.extend(p.this_week);
                out.extend(p.last_week);
                return Some(out);
            }
            Err(err) => {
                logd!("feed: gameData did not parse: {err}");
                continue;
            }
        }
    }
    None
}

/// The `{ ... }` span starting at the first brace, inclusive. Brace
/// depth only — good enough for this payload, which quotes no braces
/// inside strings.
fn object_span(s: &str) -> Option<&str> {
    let open = s.find('{')?;
    let mut depth = 0usize;
    for (i, ch) in s[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[open..=open + i]);
                }
            }
            _ => {}
        }
    }
    None
}
