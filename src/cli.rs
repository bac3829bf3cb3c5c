//! CLI module - Command-line interface definition and run loop

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::report::{ReportMode, Reporter};

const USAGE: &str = "Usage: concord <INPUT> (-pf|-pl|-po) [-f<OUTPUT>]";

/// concord - index word occurrences across text files into a persistent ordered index.
#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(
    author,
    version,
    about,
    long_about = r#"concord scans a text file (or a directory of text files), merges every
word occurrence into the repository persisted under <ROOT>/.concord/, and
prints one alphabetical report over everything indexed so far.

Report modes:
- -pf: each word with the files it appears in
- -pl: adds the line numbers per file
- -po: adds per-file and total frequency counts

Examples:
    concord notes.txt -pf
    concord docs/ -pl
    concord chapters/intro.txt -po -freport.txt
"#
)]
pub struct Cli {
    /// Text file or directory to index (relative paths resolve under --root).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report mode: -pf, -pl or -po.
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    pub mode: String,

    /// Optional report destination: -f<OUTPUT> writes the report to OUTPUT
    /// instead of stdout.
    #[arg(value_name = "-fOUTPUT", allow_hyphen_values = true)]
    pub output: Option<String>,

    /// Root directory holding the .concord repository.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory holding the .concord repository state.\n\n\
Relative INPUT paths are resolved against it."
    )]
    pub root: PathBuf,

    /// Quiet mode (suppress the saved-repository notice).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (index diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let mode: ReportMode = match cli.mode.parse() {
        Ok(mode) => mode,
        Err(err) => bail!("{}\n{}", err, USAGE),
    };

    let out_file = match cli.output.as_deref() {
        None => None,
        Some(arg) => match arg.strip_prefix("-f") {
            Some(name) if !name.trim().is_empty() => Some(PathBuf::from(name)),
            _ => bail!("Invalid output argument: {} (expected -f<OUTPUT>)\n{}", arg, USAGE),
        },
    };

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);
    let input = if cli.input.is_absolute() {
        cli.input
    } else {
        root.join(&cli.input)
    };

    // Scan before saving: an unreadable input leaves the persisted state untouched.
    let mut index = crate::repo::store::load(&root);
    crate::scan::scan_path(&input, &mut index)?;

    let saved = crate::repo::store::save(&root, &index)?;
    if !cli.quiet {
        eprintln!("Saved repository to: {}", saved.display());
    }
    if cli.verbose {
        eprintln!(
            "Indexed {} distinct words (tree height {})",
            index.len(),
            index.height()
        );
    }

    let report = Reporter::new(mode).render(&index);
    match out_file {
        Some(path) => fs::write(&path, report)
            .with_context(|| format!("Failed to write output file: {:?}", path))?,
        None => print!("{}", report),
    }

    Ok(())
}
