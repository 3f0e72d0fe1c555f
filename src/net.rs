// src/net.rs
//
// HTTPS GET via a shared blocking client. The client is built once by
// the driver and passed by reference; no process-global session state.

use std::{error::Error, time::Duration};

use chrono::NaiveDate;
use reqwest::blocking::Client;

use crate::config::consts::{ARCHIVE_URL_BASE, MIN_DOC_BYTES, TIMEOUT_SECS, USER_AGENT};

/// Outcome of one page fetch. A 404 (or the archive's undersized stub
/// page for unpublished dates) is an expected miss, not an error.
pub enum Fetched {
    Doc(String),
    NotFound,
}

pub fn client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

pub fn get(client: &Client, url: &str) -> Result<Fetched, Box<dyn Error>> {
    logd!("GET {url}");
    let resp = client.get(url).send()?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(Fetched::NotFound);
    }
    if !resp.status().is_success() {
        return Err(format!("HTTP error: {} {}", resp.status(), url).into());
    }

    let body = resp.text()?;
    if body.len() < MIN_DOC_BYTES {
        logd!("GET {url}: {} bytes, treating as stub", body.len());
        return Ok(Fetched::NotFound);
    }
    Ok(Fetched::Doc(body))
}

/// Archive page URL for one date: `Bee_YYYYMMDD.html`.
pub fn archive_url(date: NaiveDate) -> String {
    format!("{}{}.html", ARCHIVE_URL_BASE, date.format("%Y%m%d"))
}
