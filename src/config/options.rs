// src/config/options.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use super::consts::DEFAULT_DATA_DIR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Job {
    /// Pull every record currently published on the official page.
    Feed,
    /// Backfill one calendar year from the archive site.
    Year(i32),
    /// Fill an arbitrary date range (inclusive) from the archive site.
    Range(NaiveDate, NaiveDate),
    /// A single archive date.
    One(NaiveDate),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub job: Job,
    pub data_dir: PathBuf,    // where puzzle JSON + index.json live
    pub probe: bool,          // with Job::One: print the record, don't save
}

impl Params {
    pub fn new() -> Self {
        Self {
            job: Job::Feed,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            probe: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
