//! Word occurrence index
//!
//! Maintains the authoritative mapping from word to occurrence record,
//! backed by one ordered tree probed once per token.

pub mod record;

pub use record::WordRecord;

use thiserror::Error;

use crate::tree::{InorderIter, OrderedTree, PreorderIter};

/// Rejected index arguments.
///
/// A search miss is not an error; it is the normal signal to insert. These
/// are the fail-fast cases that must never be treated as "not found".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// Empty words are the scanner's job to filter; seeing one here is a
    /// contract violation
    #[error("word must not be empty")]
    EmptyWord,

    /// Line numbers are 1-based
    #[error("line numbers start at 1")]
    LineOutOfRange,
}

/// The word → occurrence-record mapping for one repository
#[derive(Debug, Default)]
pub struct WordIndex {
    tree: OrderedTree<WordRecord>,
}

impl WordIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word` in `file` at 1-based `line`.
    ///
    /// The word is lowercased before lookup. A known word is mutated in
    /// place through the tree's reference handle; an unknown word gets a
    /// fresh record inserted. Safe to call repeatedly for the same
    /// (word, file, line): the line set stays deduped while the frequency
    /// keeps counting.
    pub fn record_occurrence(
        &mut self,
        word: &str,
        file: &str,
        line: u32,
    ) -> Result<(), IndexError> {
        let word = word.to_lowercase();
        if word.is_empty() {
            return Err(IndexError::EmptyWord);
        }
        if line == 0 {
            return Err(IndexError::LineOutOfRange);
        }

        let probe = WordRecord::new(&word);
        match self.tree.find_mut(&probe) {
            Some(record) => record.add_occurrence(file, line),
            None => {
                let mut record = probe;
                record.add_occurrence(file, line);
                self.tree.insert(record);
            }
        }
        Ok(())
    }

    /// Insert a fully built record, e.g. while loading persisted state.
    ///
    /// Returns false when the word is already present.
    pub fn insert_record(&mut self, record: WordRecord) -> bool {
        self.tree.insert(record)
    }

    /// Records in ascending alphabetical order by word
    pub fn words_in_order(&self) -> InorderIter<'_, WordRecord> {
        self.tree.iter_inorder()
    }

    /// Records in pre-order. Re-inserting this sequence into an empty
    /// index reproduces the same tree shape, which is what the repository
    /// store relies on.
    pub fn records_preorder(&self) -> PreorderIter<'_, WordRecord> {
        self.tree.iter_preorder()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True when no word has been recorded
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Height of the backing tree
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}
