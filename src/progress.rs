// src/progress.rs
/// Lightweight progress reporting used by long-running scrape runs.
/// Frontends (CLI today) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of dates (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one date was scraped and saved.
    fn item_done(&mut self, _date: &str) {}

    /// Called when one date failed; the batch keeps going.
    fn item_failed(&mut self, _date: &str, _why: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
