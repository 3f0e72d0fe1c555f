// src/error.rs

use thiserror::Error;

/// Hard, document-level failures from the extraction engine.
///
/// "Not this format" is deliberately not an error: the extractors return
/// `None` for it, so strategy fallback composes without error plumbing.
/// Only the final verdict for a document surfaces as one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrapeError {
    /// Neither the answer-list markup nor an embedded word array was found.
    #[error("no extractable word list in document")]
    NoExtractableContent,

    /// No single letter appears in every answer (zero or ambiguous candidates).
    #[error("no center letter found")]
    NoUniversalLetter,

    /// Extraction worked but the result is not a well-formed puzzle.
    #[error("invalid puzzle structure: {0}")]
    InvalidStructure(String),
}
