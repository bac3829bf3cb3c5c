//! Common utilities

use std::time::SystemTime;
use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3 content hash of bytes as a fixed-width hex string
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
