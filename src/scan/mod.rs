//! Input scanning
//!
//! Turns text input into (word, file, line) occurrences and feeds them to
//! the index. Each line is split on whitespace, tokens are lowercased and
//! stripped of every character outside [a-z0-9'], and tokens that become
//! empty are dropped before they reach the index.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::paths::{file_label, make_relative};
use crate::index::WordIndex;

/// Characters dropped from tokens; apostrophes survive so contractions stay whole
static STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9']").expect("Invalid STRIP_RE regex"));

/// Split a line into normalized words
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace()
        .filter_map(|token| {
            let lowered = token.to_lowercase();
            let clean = STRIP_RE.replace_all(&lowered, "");
            if clean.is_empty() {
                None
            } else {
                Some(clean.into_owned())
            }
        })
        .collect()
}

/// Scan one text file, labeling every occurrence with `label`.
///
/// Lines are numbered from 1. Invalid UTF-8 is converted lossily rather
/// than aborting the scan. Returns the number of occurrences recorded.
pub fn scan_file(path: &Path, label: &str, index: &mut WordIndex) -> Result<usize> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input file: {:?}", path))?;
    let mut reader = BufReader::new(file);

    let mut recorded = 0;
    let mut line_no: u32 = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read input file: {:?}", path))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = String::from_utf8_lossy(&buf);
        for word in tokenize(&line) {
            index.record_occurrence(&word, label, line_no)?;
            recorded += 1;
        }
    }
    Ok(recorded)
}

/// Scan a file, or every file under a directory.
///
/// Directory walks skip hidden entries and respect ignore files; the
/// discovered files are sorted so repeated runs index in a stable order.
/// A single file is labeled by its file name alone, files found under a
/// directory by their path relative to it.
pub fn scan_path(input: &Path, index: &mut WordIndex) -> Result<usize> {
    if !input.is_dir() {
        let label = file_label(input);
        return scan_file(input, &label, index);
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkBuilder::new(input).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();

    let mut recorded = 0;
    for path in &files {
        let label = make_relative(path, input).unwrap_or_else(|| file_label(path));
        recorded += scan_file(path, &label, index)?;
    }
    Ok(recorded)
}
