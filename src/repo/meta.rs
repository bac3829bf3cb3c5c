//! Repository metadata management

use serde::{Deserialize, Serialize};

/// Metadata stored in .concord/meta.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoMeta {
    /// Repository format version
    pub format_version: String,

    /// Root directory the repository belongs to
    pub root: String,

    /// xxh3 hash of the records payload
    pub records_hash: String,

    /// Timestamp when the repository was written (ms since epoch)
    pub generated_at: i64,
}

impl RepoMeta {
    pub fn new(root: &str, records_hash: &str) -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            root: root.to_string(),
            records_hash: records_hash.to_string(),
            generated_at: crate::core::util::now_ms(),
        }
    }
}

/// Current repository format version
pub const FORMAT_VERSION: &str = "1";
