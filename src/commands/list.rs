//! List command implementation

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::browser::{render_listing, Page, Palette};
use crate::cli::ListArgs;
use crate::config::Config;
use crate::progress::{with_spinner, SpinnerOptions};
use crate::scanner::{list_directory, total_size, DirectoryEntry};

/// JSON shape of a listing
#[derive(Debug, Serialize)]
pub struct ListingReport {
    pub path: PathBuf,
    pub total_bytes: u64,
    pub entries: Vec<DirectoryEntry>,
}

/// Run the list command
pub fn run(args: ListArgs, config: &Config, quiet: bool) -> Result<()> {
    let path = args.path.canonicalize().unwrap_or_else(|_| args.path.clone());
    tracing::info!(path = %path.display(), "Listing directory");

    let mut spinner = SpinnerOptions::from(&config.progress);
    spinner.hidden |= quiet || args.json;

    let name = display_name(&path);
    let mut entries = with_spinner(&format!("Calculating sizes in {name}..."), &spinner, || {
        list_directory(&path)
    })?;

    if !args.all {
        entries.retain(|e| !e.is_hidden);
    }

    if args.json {
        let report = build_report(path, entries, args.top);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let per_page = args.top.unwrap_or(entries.len()).max(1);
    let page = Page::new(0, per_page, entries.len());
    let color = config.browser.color && !args.no_color && io::stdout().is_terminal();

    let mut stdout = io::stdout().lock();
    render_listing(&mut stdout, &path, &entries, &page, Palette::new(color))?;
    Ok(())
}

/// Build the JSON report; the total covers every entry even when truncated.
pub fn build_report(path: PathBuf, mut entries: Vec<DirectoryEntry>, top: Option<usize>) -> ListingReport {
    let total_bytes = total_size(&entries);
    if let Some(top) = top {
        entries.truncate(top);
    }
    ListingReport {
        path,
        total_bytes,
        entries,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
