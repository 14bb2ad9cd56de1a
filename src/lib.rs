//! # hsk-vocab
//!
//! Builds a word -> level lookup table from the New HSK (2025) per-level
//! word lists and serializes it as a JSON document. Also merges the
//! enriched `hsk-vocabulary` per-level lists (pinyin + translations) into
//! one combined file, and offers query helpers over a built table.
pub mod hsk;

// Re-export the main types for convenience
pub use hsk::{
    models::HskLevel,
    table::VocabTable,
    BuildOutcome,
    HskError,
    Result,
    VocabTableBuilder,
};
