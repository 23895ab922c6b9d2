//! Patch loading: a file named on the command line, or stdin.

use anyhow::{bail, Context, Result};
use gitlore_diff::{parse_unified_diff, verify_file, Changeset};
use std::io::{self, IsTerminal, Read};
use std::path::Path;

pub const USAGE: &str = "usage: gitlore-diffview [PATCH | -]\n\n\
Reads a unified diff from PATCH, or from stdin when PATCH is `-` or omitted.";

/// Where the patch text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(String),
    Stdin,
}

/// Pick the patch source from the command-line arguments (program name excluded).
pub fn source_from_args<I>(args: I) -> Result<Source>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let source = match args.next().as_deref() {
        None | Some("-") => Source::Stdin,
        Some("-h") | Some("--help") => bail!("{}", USAGE),
        Some(path) => Source::File(path.to_string()),
    };

    if let Some(extra) = args.next() {
        bail!("unexpected argument {:?}\n\n{}", extra, USAGE);
    }

    Ok(source)
}

/// Read the patch text for a source.
pub fn read_source(source: &Source) -> Result<String> {
    match source {
        Source::File(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read patch file {}", path)),
        Source::Stdin => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                bail!("no patch given and stdin is a terminal\n\n{}", USAGE);
            }
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Failed to read patch from stdin")?;
            Ok(text)
        }
    }
}

/// Parse patch text into a changeset, logging any hunk whose declared
/// counts disagree with its body.
pub fn load_changeset(text: &str) -> Result<Changeset> {
    let files = parse_unified_diff(text).context("Failed to parse unified diff")?;

    for file in &files {
        if let Err(mismatch) = verify_file(file) {
            log::warn!("{}: {}", file.path, mismatch);
        }
    }

    let changeset = Changeset::new(files);
    let summary = changeset.summary();
    log::info!(
        "Loaded {} files (+{} -{})",
        summary.file_count,
        summary.total_additions,
        summary.total_deletions
    );

    Ok(changeset)
}
