//! Merging enriched per-level vocabulary lists into one combined document
//!
//! The upstream `hsk-vocabulary` repository ships one `hsk-level-{n}.json`
//! array per level under `hsk-vocab-json/`, with pinyin and translations
//! attached to every word. This module flattens those lists into a single
//! document for consumers that want the enrichment alongside the level.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::models::HskLevel;

/// Environment variable naming a local clone of the vocabulary repo.
pub const REPO_PATH_ENV: &str = "HSK_VOCAB_REPO_PATH";

/// Fallback clone location when no path is given and the variable is unset.
pub const DEFAULT_REPO_PATH: &str = "/tmp/hsk-vocabulary";

/// Directory inside the repo holding the per-level JSON lists.
const VOCAB_JSON_DIR: &str = "hsk-vocab-json";

/// Levels the upstream repo provides enriched lists for.
pub const MERGE_LEVELS: [HskLevel; 3] = [HskLevel::L4, HskLevel::L5, HskLevel::L6];

/// One word entry as the upstream repo stores it.
#[derive(Debug, Deserialize)]
struct SourceEntry {
    hanzi: String,
    #[serde(default)]
    pinyin: Option<String>,
    #[serde(default)]
    translations: Option<Vec<String>>,
}

/// One entry of the combined vocabulary document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub word: String,
    pub level: HskLevel,
    pub pinyin: String,
    pub translations: Vec<String>,
}

/// Resolve the repo path: explicit argument, then `HSK_VOCAB_REPO_PATH`,
/// then the default clone location.
pub fn resolve_repo_path(explicit: Option<&str>) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .or_else(|| env::var(REPO_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPO_PATH))
}

/// Flatten the per-level lists under `repo_path` into one vector,
/// level 4 through 6 in order. A missing level file is skipped with a
/// warning, same as a missing word list during a table build.
pub fn merge_levels(repo_path: &Path) -> Result<Vec<MergedEntry>> {
    let vocab_dir = repo_path.join(VOCAB_JSON_DIR);
    let mut merged = Vec::new();

    for level in MERGE_LEVELS {
        let file = vocab_dir.join(format!("hsk-level-{}.json", level.value()));
        if !file.exists() {
            warn!("Skip (not found): {}", file.display());
            continue;
        }
        let raw = fs::read_to_string(&file)?;
        let entries: Vec<SourceEntry> = serde_json::from_str(&raw)?;
        info!("Level {}: {} words", level, entries.len());

        merged.extend(entries.into_iter().map(|entry| MergedEntry {
            word: entry.hanzi,
            level,
            pinyin: entry.pinyin.unwrap_or_default(),
            translations: entry.translations.unwrap_or_default(),
        }));
    }

    Ok(merged)
}

/// Merge and write the combined document to `out_path` as compact JSON.
/// Returns the number of entries written.
pub fn write_merged(repo_path: &Path, out_path: &Path) -> Result<usize> {
    let merged = merge_levels(repo_path)?;
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, serde_json::to_string(&merged)?)?;
    info!("Written {} words to {}", merged.len(), out_path.display());
    Ok(merged.len())
}
