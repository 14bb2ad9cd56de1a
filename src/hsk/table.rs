//! The vocabulary lookup table and its JSON document form

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::models::HskLevel;

/// Lookup table mapping each normalized word to its HSK level.
///
/// Insertion order is preserved, so the serialized document lists words in
/// the order the level files were processed. Re-inserting an existing word
/// overwrites its level but keeps the word's original position, matching
/// the document the original data pipeline produced.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabTable {
    entries: IndexMap<String, HskLevel>,
}

impl VocabTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a word's level. Returns the previous level if
    /// the word was already present (last write wins).
    pub fn insert(&mut self, word: impl Into<String>, level: HskLevel) -> Option<HskLevel> {
        self.entries.insert(word.into(), level)
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Level of a word, if the word is in the table.
    pub fn level_of(&self, word: &str) -> Option<HskLevel> {
        self.entries.get(word).copied()
    }

    /// Whether a word is part of the vocabulary at or below `max_level`.
    pub fn is_known_at(&self, word: &str, max_level: HskLevel) -> bool {
        self.level_of(word).is_some_and(|level| level <= max_level)
    }

    /// All words assigned exactly the given level, in table order.
    pub fn words_at_level(&self, level: HskLevel) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, l)| **l == level)
            .map(|(word, _)| word.as_str())
    }

    /// All (word, level) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, HskLevel)> {
        self.entries.iter().map(|(word, level)| (word.as_str(), *level))
    }

    /// Render the table as the vocabulary document: an indented JSON
    /// object with words as keys. Non-ASCII text stays unescaped so the
    /// document displays native script.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the vocabulary document to `path`, creating parent
    /// directories as needed and overwriting any existing file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Parse a vocabulary document. Level values are range-checked.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a previously written vocabulary document from disk.
    pub fn load_json(path: &Path) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}
