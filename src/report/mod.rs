//! Report rendering
//!
//! Renders the index's in-order record sequence in one of three modes:
//! files only, files with line lists, or files with line lists and
//! frequency counts.

use std::collections::BTreeSet;
use std::io::Write;
use std::str::FromStr;

use crate::index::WordIndex;

/// Report mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// `-pf`: each word with the files it appears in
    #[default]
    Files,
    /// `-pl`: files plus the line numbers per file
    Lines,
    /// `-po`: lines plus per-file and total frequency counts
    Occurrences,
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-pf" => Ok(ReportMode::Files),
            "-pl" => Ok(ReportMode::Lines),
            "-po" => Ok(ReportMode::Occurrences),
            _ => Err(format!(
                "Unknown report mode: {} (expected -pf, -pl or -po)",
                s
            )),
        }
    }
}

/// Renders word records into one of the report modes
pub struct Reporter {
    mode: ReportMode,
}

impl Reporter {
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }

    /// Render the whole index to a string, words in ascending order
    pub fn render(&self, index: &WordIndex) -> String {
        let mut output = String::new();

        for record in index.words_in_order() {
            match self.mode {
                ReportMode::Files => {
                    let files: Vec<&str> = record.files().collect();
                    output.push_str(&format!("{}: {}\n", record.word(), files.join(", ")));
                }
                ReportMode::Lines => {
                    output.push_str(&format!("{}:\n", record.word()));
                    for (file, lines) in record.locations() {
                        output.push_str(&format!("  {} [lines: {}]\n", file, join_lines(lines)));
                    }
                }
                ReportMode::Occurrences => {
                    output.push_str(&format!(
                        "{} (total: {}):\n",
                        record.word(),
                        record.frequency()
                    ));
                    for (file, lines) in record.locations() {
                        output.push_str(&format!(
                            "  {} [lines: {}] (freq: {})\n",
                            file,
                            join_lines(lines),
                            lines.len()
                        ));
                    }
                }
            }
        }

        output
    }

    /// Render to a writer
    #[allow(dead_code)]
    pub fn render_to<W: Write>(&self, index: &WordIndex, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.render(index).as_bytes())
    }
}

fn join_lines(lines: &BTreeSet<u32>) -> String {
    lines
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
