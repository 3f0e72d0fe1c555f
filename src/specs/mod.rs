// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **format-specific extraction specifications** for
//! the puzzle sources. Each spec focuses on a single published representation
//! and encodes *where the ground truth lives in the document* and *how to
//! recover it robustly*.
//!
//! ## What lives here
//! - **Pure document parsing** for one fetched page body at a time.
//! - **Format detection as a soft outcome**: a spec that doesn't recognize
//!   the document returns `None` so the caller can fall through to the next
//!   strategy. That is expected traffic, not an error.
//! - **Tolerant extraction** using `core::html` helpers (case-insensitive
//!   tag blocks, tag stripping, entity/whitespace normalization) and minimal
//!   hand-rolled scanning where it improves resilience — the embedded-array
//!   format in particular is not valid JSON on its own, so it gets a linear
//!   bracket counter rather than a parser.
//! - **Light shaping** of results into a small `WordsBundle` (answers plus
//!   pangram markers), or finished records on the official-feed path.
//!
//! ## What does **not** live here
//! - **Letter inference and pangram validation** — `letters`.
//! - **Invariant checks and record assembly** — `puzzle`.
//! - **Networking, caching, persistence** — `net`, `store`, driven by
//!   `runner`.
//!
//! ## Current specs
//! - `modern` – answer list in the archive site's HTML (`main-answer-list`),
//!   with pangrams marked inline. Markers from this path are trusted.
//! - `legacy` – words embedded in a script-side nested array on older
//!   archive pages. No markers; long words become *candidates* that still
//!   need validation against the inferred letter set.
//! - `feed` – the official page's `window.gameData` JSON, which carries
//!   finished records and bypasses record building entirely.
//!
//! ## Testing notes
//! - Specs are testable **offline** against inline fixture documents.
//! - Keep scanning resilient to whitespace, attribute order, and harmless
//!   markup noise.
//!
//! In short: **`specs` knows how to read the pages.** Other layers decide
//! when to fetch, how to validate, and where to persist.

pub mod feed;
pub mod legacy;
pub mod modern;

/// How a spec reports pangrams alongside the answer list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PangramMarkers {
    /// Words the page itself flags as pangrams. Taken as-is.
    Trusted(Vec<String>),
    /// Length-screened candidates that still need letter validation.
    Candidates(Vec<String>),
}

/// Raw yield of one extraction strategy: cleaned answers in document
/// order, plus whatever pangram information the format exposes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordsBundle {
    pub answers: Vec<String>,
    pub markers: PangramMarkers,
}
