//! Browse command implementation

use std::io::{self, IsTerminal};

use anyhow::Result;

use crate::browser::{resolve_path, Browser, BrowserOptions};
use crate::cli::BrowseArgs;
use crate::config::Config;

/// Run the interactive browser on stdin/stdout.
pub fn run(args: BrowseArgs, config: &Config, quiet: bool) -> Result<()> {
    let mut options = BrowserOptions::from(config);
    if let Some(per_page) = args.per_page {
        options.items_per_page = per_page.max(1);
    }
    if args.no_hidden {
        options.show_hidden = false;
    }
    let interactive = io::stdout().is_terminal();
    options.color = options.color && !args.no_color && interactive;
    options.clear_screen = interactive;
    options.spinner.hidden |= quiet;

    let cwd = std::env::current_dir()?;
    let start = match &args.path {
        Some(path) => resolve_path(&path.to_string_lossy(), &cwd),
        None => cwd,
    };

    tracing::info!(start = %start.display(), "Starting browser");

    let stdin = io::stdin();
    let mut browser = Browser::new(stdin.lock(), io::stdout(), start, options);
    if args.path.is_none() {
        browser.welcome()?;
    }
    browser.run()?;
    Ok(())
}
