// src/store.rs
//
// On-disk layout: one `<printDate>.json` per puzzle in the data
// directory, plus an `index.json` summary. The "already have this date"
// check lives here, not in the extraction engine.

use std::{
    collections::HashSet,
    error::Error,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::consts::INDEX_FILE;
use crate::puzzle::PuzzleRecord;

/// Dates (file stems) already saved under `dir`. Missing directory
/// reads as empty, so a fresh checkout just scrapes everything.
pub fn existing_dates(dir: &Path) -> io::Result<HashSet<String>> {
    let mut out = HashSet::new();
    if !dir.exists() {
        return Ok(out);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        match path.file_stem().and_then(|s| s.to_str()) {
            Some("index") | None => continue,
            Some(stem) => {
                out.insert(stem.to_string());
            }
        }
    }
    Ok(out)
}

/// Write one record as `<printDate>.json`. Returns `Ok(false)` without
/// touching anything when the file already exists.
pub fn save_puzzle(dir: &Path, record: &PuzzleRecord) -> Result<bool, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", record.print_date));
    if path.exists() {
        logf!("store: {} already exists, skipping", path.display());
        return Ok(false);
    }

    let mut body = serde_json::to_string_pretty(record)?;
    body.push('\n');
    fs::write(&path, body)?;
    logf!("store: saved {}", path.display());
    Ok(true)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Index {
    total_puzzles: usize,
    files: Vec<String>,
    last_updated: String,
}

/// Rewrite `index.json` from the directory contents. Returns the
/// puzzle count.
pub fn write_index(dir: &Path) -> Result<usize, Box<dyn Error>> {
    let mut files: Vec<String> = Vec::new();
    for stem in existing_dates(dir)? {
        files.push(format!("{stem}.json"));
    }
    files.sort();

    let index = Index {
        total_puzzles: files.len(),
        files,
        last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    let path: PathBuf = dir.join(INDEX_FILE);
    let mut body = serde_json::to_string_pretty(&index)?;
    body.push('\n');
    fs::write(&path, body)?;
    Ok(index.total_puzzles)
}
