// src/runner.rs
//
// Top-level driver: dispatch on job kind, fan archive dates out to a
// small worker pool, persist results. One failed date never aborts the
// batch; it is counted and logged next to the successes.

use std::{
    error::Error,
    sync::{
        Arc, mpsc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;

use crate::{
    config::consts::{FEED_URL, JITTER_MS, REQUEST_PAUSE_MS, WORKERS},
    config::options::{Job, Params},
    net::{self, Fetched},
    progress::Progress,
    puzzle::{self, PuzzleRecord},
    specs, store,
};

/// Summary of what a run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
    pub not_found: usize,
}

/// What one archive date resolved to, computed entirely on a worker.
enum Outcome {
    Built(Box<PuzzleRecord>),
    NotFound,
    Failed(String),
}

/// Top-level runner: dispatch on job kind and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    match params.job {
        Job::Feed => run_feed(params, progress),
        Job::Year(year) => run_range(params, year_dates(year)?, progress),
        Job::Range(from, to) => run_range(params, date_span(from, to)?, progress),
        Job::One(date) => run_one(params, date, progress),
    }
}

/* ---------------- Official feed ---------------- */

fn run_feed(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching the official puzzle page…");
    }

    let client = net::client()?;
    let doc = match net::get(&client, FEED_URL)? {
        Fetched::Doc(doc) => doc,
        Fetched::NotFound => return Err("official puzzle page not found".into()),
    };
    let records = specs::feed::extract(&doc).ok_or("no gameData on the official page")?;

    let existing = store::existing_dates(&params.data_dir)?;
    let mut summary = RunSummary::default();

    for record in &records {
        if existing.contains(&record.print_date) {
            summary.skipped += 1;
            continue;
        }
        if store::save_puzzle(&params.data_dir, record)? {
            summary.saved += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&record.print_date);
            }
        } else {
            summary.skipped += 1;
        }
    }

    let total = store::write_index(&params.data_dir)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "{} records published, {} new; index now lists {}",
            records.len(),
            summary.saved,
            total
        ));
        p.finish();
    }
    Ok(summary)
}

/* ---------------- Archive ranges ---------------- */

fn run_range(
    params: &Params,
    dates: Vec<NaiveDate>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let existing = store::existing_dates(&params.data_dir)?;
    let missing: Vec<NaiveDate> = dates
        .into_iter()
        .filter(|d| !existing.contains(&d.format("%Y-%m-%d").to_string()))
        .collect();

    let mut summary = RunSummary::default();
    if missing.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Every date in range is already saved.");
        }
        return Ok(summary);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(missing.len());
    }

    // Concurrency
    let client = net::client()?;
    let dates_arc = Arc::new(missing);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<(NaiveDate, Outcome)>();

    let workers = WORKERS.min(dates_arc.len()).max(1);

    // Spawn workers

    for _ in 0..workers {
        let dates = Arc::clone(&dates_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let client = client.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= dates.len() {
                    break;
                }
                let date = dates[i];
                let _ = tx.send((date, scrape_one(&client, date)));
                let jitter = (date.day() as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    for _ in 0..dates_arc.len() {
        match res_rx.recv() {
            Ok((date, outcome)) => {
                let label = date.format("%Y-%m-%d").to_string();
                match outcome {
                    Outcome::Built(record) => match store::save_puzzle(&params.data_dir, &record) {
                        Ok(true) => {
                            summary.saved += 1;
                            if let Some(p) = progress.as_deref_mut() {
                                p.item_done(&label);
                            }
                        }
                        Ok(false) => summary.skipped += 1,
                        Err(e) => {
                            summary.failed += 1;
                            loge!("{label}: save failed: {e}");
                            if let Some(p) = progress.as_deref_mut() {
                                p.item_failed(&label, "save failed");
                            }
                        }
                    },
                    Outcome::NotFound => {
                        summary.not_found += 1;
                        logf!("{label}: not published");
                    }
                    Outcome::Failed(why) => {
                        summary.failed += 1;
                        loge!("{label}: {why}");
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(&label, &why);
                        }
                    }
                }
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    store::write_index(&params.data_dir)?;
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

fn scrape_one(client: &Client, date: NaiveDate) -> Outcome {
    match net::get(client, &net::archive_url(date)) {
        Ok(Fetched::Doc(doc)) => match puzzle::build_record(&doc, date) {
            Ok(record) => Outcome::Built(Box::new(record)),
            Err(e) => Outcome::Failed(e.to_string()),
        },
        Ok(Fetched::NotFound) => Outcome::NotFound,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

/* ---------------- Single date ---------------- */

fn run_one(
    params: &Params,
    date: NaiveDate,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let client = net::client()?;
    let label = date.format("%Y-%m-%d").to_string();
    let mut summary = RunSummary::default();

    let doc = match net::get(&client, &net::archive_url(date))? {
        Fetched::Doc(doc) => doc,
        Fetched::NotFound => {
            summary.not_found = 1;
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{label}: not published"));
            }
            return Ok(summary);
        }
    };

    match puzzle::build_record(&doc, date) {
        Ok(record) => {
            if params.probe {
                if let Some(p) = progress.as_deref_mut() {
                    describe(p, &record);
                }
            } else if store::save_puzzle(&params.data_dir, &record)? {
                summary.saved = 1;
                store::write_index(&params.data_dir)?;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&label);
                }
            } else {
                summary.skipped = 1;
            }
        }
        Err(e) => {
            summary.failed = 1;
            loge!("{label}: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(&label, &e.to_string());
            }
        }
    }
    Ok(summary)
}

fn describe(p: &mut dyn Progress, record: &PuzzleRecord) {
    p.log(&format!(
        "{}: {} answers, {} pangrams",
        record.print_date,
        record.answers.len(),
        record.pangrams.len()
    ));
    p.log(&format!(
        "center '{}', outer {:?}",
        record.center_letter, record.outer_letters
    ));
    p.log(&format!("pangrams: {:?}", record.pangrams));

    let sample: Vec<&str> = record.answers.iter().take(10).map(|s| s.as_str()).collect();
    p.log(&format!("sample: {:?}", sample));

    let stray: Vec<&str> = record
        .answers
        .iter()
        .filter(|w| !w.contains(&record.center_letter))
        .map(|s| s.as_str())
        .collect();
    if stray.is_empty() {
        p.log("all answers contain the center letter");
    } else {
        p.log(&format!(
            "WARNING: {} answers missing center letter: {:?}",
            stray.len(),
            stray
        ));
    }
}

/* ---------------- Date helpers ---------------- */

fn year_dates(year: i32) -> Result<Vec<NaiveDate>, Box<dyn Error>> {
    let from = NaiveDate::from_ymd_opt(year, 1, 1).ok_or("invalid year")?;
    let to = NaiveDate::from_ymd_opt(year, 12, 31).ok_or("invalid year")?;
    date_span(from, to)
}

fn date_span(from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>, Box<dyn Error>> {
    if from > to {
        return Err(format!("empty range: {from} to {to}").into());
    }
    let mut out = Vec::new();
    let mut d = from;
    while d <= to {
        out.push(d);
        d = match d.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(out)
}
