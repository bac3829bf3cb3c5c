//! Repository module - Manages the .concord/ state directory
//!
//! Provides:
//! - Whole-index persistence (repository.jsonl, meta.json)
//! - Repository metadata management

pub mod meta;
pub mod store;
