// src/config/consts.rs

// Net config
pub const FEED_URL: &str = "https://www.nytimes.com/puzzles/spelling-bee";
pub const ARCHIVE_URL_BASE: &str = "https://nytbee.com/Bee_";
// The archive site 403s the default reqwest agent
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
pub const TIMEOUT_SECS: u64 = 15;
// Archive pages below this size are placeholder stubs, not puzzles
pub const MIN_DOC_BYTES: usize = 50_000;

// Extraction
pub const MIN_WORDS: usize = 15;
pub const MIN_WORD_LEN: usize = 4;
pub const PUZZLE_LETTERS: usize = 7;
// A pangram uses 7 distinct letters, so shorter words can't qualify
pub const PANGRAM_MIN_LEN: usize = 7;
pub const EDITOR: &str = "Sam Ezersky";

// Store
pub const DEFAULT_DATA_DIR: &str = "data";
pub const INDEX_FILE: &str = "index.json";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const JITTER_MS: u64 = 250; // extra 0..250 ms
