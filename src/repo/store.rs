//! Repository store - Read/write .concord/ state files
//!
//! The whole index round-trips as one unit: records are written in
//! pre-order, so inserting them back in file order rebuilds the identical
//! tree. A missing or corrupt repository is treated as "no prior state",
//! never as a fatal error.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::paths::repo_dir;
use crate::core::util::hash_bytes;
use crate::index::{WordIndex, WordRecord};
use crate::repo::meta::{RepoMeta, FORMAT_VERSION};

/// Repository file names
pub const RECORDS_FILE: &str = "repository.jsonl";
pub const META_FILE: &str = "meta.json";

/// Ensure the repository directory exists
pub fn ensure_repo_dir(root: &Path) -> Result<PathBuf> {
    let dir = repo_dir(root);
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create .concord directory")?;
    }
    Ok(dir)
}

/// Persist the whole index under `root`.
///
/// Writes the records payload and then the metadata describing it; the
/// next load only trusts a payload whose hash matches the metadata.
/// Returns the records file path.
pub fn save(root: &Path, index: &WordIndex) -> Result<PathBuf> {
    let dir = ensure_repo_dir(root)?;

    let mut payload = String::new();
    for record in index.records_preorder() {
        payload.push_str(&serde_json::to_string(record)?);
        payload.push('\n');
    }

    let records_path = dir.join(RECORDS_FILE);
    fs::write(&records_path, &payload)
        .with_context(|| format!("Failed to write repository file: {:?}", records_path))?;

    let meta = RepoMeta::new(&root.to_string_lossy(), &hash_bytes(payload.as_bytes()));
    let meta_path = dir.join(META_FILE);
    let json = serde_json::to_string_pretty(&meta)?;
    fs::write(&meta_path, json).context("Failed to write meta.json")?;

    Ok(records_path)
}

/// Load the persisted index under `root`.
///
/// Absent, unreadable, version-mismatched or hash-mismatched state all
/// degrade to an empty index.
pub fn load(root: &Path) -> WordIndex {
    try_load(root).unwrap_or_default()
}

fn try_load(root: &Path) -> Option<WordIndex> {
    let dir = repo_dir(root);
    let payload = fs::read_to_string(dir.join(RECORDS_FILE)).ok()?;
    let meta_json = fs::read_to_string(dir.join(META_FILE)).ok()?;
    let meta: RepoMeta = serde_json::from_str(&meta_json).ok()?;

    if meta.format_version != FORMAT_VERSION
        || meta.records_hash != hash_bytes(payload.as_bytes())
    {
        return None;
    }

    let mut index = WordIndex::new();
    for line in payload.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let record: WordRecord = serde_json::from_str(line).ok()?;
        index.insert_record(record);
    }
    Some(index)
}
