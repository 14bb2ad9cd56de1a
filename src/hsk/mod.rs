//! Core HSK vocabulary module

pub mod error;
pub mod merge;
pub mod models;
pub mod table;

mod normalize;
mod source;

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use log::{info, warn};

pub use self::error::{HskError, Result};
pub use self::normalize::normalize;
pub use self::source::parse_encoding;

use self::models::HskLevel;
use self::table::VocabTable;

/// Builds the word -> level lookup table from a directory of New HSK
/// (2025) word lists.
///
/// The directory is expected to contain `HSK_Level_{1..6}_words.txt` plus
/// the combined band list `HSK_Level_7-9_words.txt`, one word per line.
pub struct VocabTableBuilder {
    base_dir: PathBuf,
    encoding: &'static Encoding,
}

/// The result of a build: the populated table plus the word lists that
/// were skipped because they were absent.
#[derive(Debug)]
pub struct BuildOutcome {
    pub table: VocabTable,
    pub missing: Vec<PathBuf>,
}

impl VocabTableBuilder {
    /// Create a builder reading word lists from `base_dir`, decoded as
    /// UTF-8 unless overridden.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Override the text encoding used to decode the word lists.
    ///
    /// Accepts any WHATWG encoding label; GBK/GB2312 normalize to
    /// GB18030. A byte-order mark in a file still takes precedence.
    pub fn with_encoding(mut self, label: &str) -> Self {
        self.encoding = source::parse_encoding(label);
        self
    }

    /// Read every level's word list and populate the lookup table.
    ///
    /// Levels 1-6 are processed in order, then the 7-9 band file, so a
    /// word listed at several levels keeps the last assignment. Words in
    /// the band file always map to level 7. A missing list is skipped
    /// with a warning and reported in the outcome; an unreadable or
    /// undecodable list is fatal.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A present word list cannot be read
    /// - A word list is not valid text in the selected encoding
    pub fn build(&self) -> Result<BuildOutcome> {
        let mut table = VocabTable::new();
        let mut missing = Vec::new();

        for level in HskLevel::ALL {
            let path = self.base_dir.join(level.word_list_name());
            if !path.exists() {
                warn!("{} not found.", path.display());
                missing.push(path);
                continue;
            }

            info!("Processing Level {}...", level);
            let text = source::read_word_list(&path, self.encoding)?;
            for line in text.lines() {
                if let Some(word) = normalize::normalize(line) {
                    table.insert(word, level);
                }
            }
        }

        Ok(BuildOutcome { table, missing })
    }

    /// Build the table and write it to `output` as a JSON document,
    /// creating parent directories as needed.
    ///
    /// Returns the outcome so callers can inspect the table and the
    /// missing-file report.
    pub fn build_to_file(&self, output: impl AsRef<Path>) -> Result<BuildOutcome> {
        let output = output.as_ref();
        let outcome = self.build()?;
        outcome.table.write_json(output)?;
        info!(
            "Successfully created {} with {} words.",
            output.display(),
            outcome.table.len()
        );
        Ok(outcome)
    }
}
