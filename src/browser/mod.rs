//! Interactive, line-oriented directory browser.
//!
//! Each iteration lists the current directory afresh, renders one page of it
//! and acts on a single command read from the prompt.

mod command;
mod page;
mod render;

pub use command::Command;
pub use page::Page;
pub use render::{percentage, render_help, render_listing, truncate_name, Palette};

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crossterm::style::{Attribute, Color};
use crossterm::terminal::{Clear, ClearType, SetSize};
use crossterm::{cursor::MoveTo, execute};

use crate::actions::{delete_entry, reveal_entry_with};
use crate::config::Config;
use crate::error::Result;
use crate::platform::{self, Platform};
use crate::progress::{Spinner, SpinnerOptions};
use crate::scanner::{format_size, list_directory_with, DirectoryEntry};

/// Behaviour switches for a browsing session.
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    pub items_per_page: usize,
    pub show_hidden: bool,
    pub confirm_delete: bool,
    pub color: bool,
    /// Clear the terminal before each page
    pub clear_screen: bool,
    pub terminal_size: Option<(u16, u16)>,
    pub spinner: SpinnerOptions,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for BrowserOptions {
    fn from(config: &Config) -> Self {
        Self {
            items_per_page: config.browser.items_per_page,
            show_hidden: config.browser.show_hidden,
            confirm_delete: config.browser.confirm_delete,
            color: config.browser.color,
            clear_screen: true,
            terminal_size: config.browser.terminal_size(),
            spinner: SpinnerOptions::from(&config.progress),
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A browsing session reading commands from `input` and drawing to `output`.
pub struct Browser<R, W> {
    input: R,
    output: W,
    current_dir: PathBuf,
    page: usize,
    options: BrowserOptions,
    platform: &'static dyn Platform,
    palette: Palette,
}

impl<R: BufRead, W: Write> Browser<R, W> {
    pub fn new(input: R, output: W, start: PathBuf, options: BrowserOptions) -> Self {
        Self {
            input,
            output,
            current_dir: start,
            page: 0,
            palette: Palette::new(options.color),
            options,
            platform: platform::current(),
        }
    }

    pub fn with_platform(mut self, platform: &'static dyn Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Show the banner and ask for a starting directory. Empty input keeps the
    /// current one.
    pub fn welcome(&mut self) -> Result<()> {
        let banner = "=".repeat(60);
        let p = self.palette;
        writeln!(self.output, "{}", p.styled(&banner, Color::Cyan, Some(Attribute::Bold)))?;
        writeln!(
            self.output,
            "{}",
            p.styled(format!("{:^60}", "Welcome to DiskMan"), Color::Yellow, Some(Attribute::Bold))
        )?;
        writeln!(self.output, "{}", p.styled(&banner, Color::Cyan, Some(Attribute::Bold)))?;
        writeln!(self.output, "View file and folder sizes sorted by largest first.")?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter a directory to start in, or press Enter for {}",
            p.paint(self.current_dir.display(), Color::Yellow)
        )?;
        write!(self.output, "{} ", p.paint(">", Color::Yellow))?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        if line.is_empty() {
            return Ok(());
        }

        let target = resolve_path(&line, &self.current_dir);
        if target.is_dir() {
            self.current_dir = target;
        } else {
            writeln!(
                self.output,
                "{} {}",
                p.paint("Directory not found:", Color::Red),
                line
            )?;
            writeln!(self.output, "Using {} instead.", self.current_dir.display())?;
        }
        Ok(())
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        if let Some((width, height)) = self.options.terminal_size {
            if let Err(err) = execute!(self.output, SetSize(width, height)) {
                tracing::warn!(%err, width, height, "Unable to resize terminal");
            }
        }

        loop {
            self.ensure_current_dir()?;
            let entries = self.load_entries()?;
            let page = Page::new(self.page, self.options.items_per_page, entries.len());
            self.page = page.index;

            if self.options.clear_screen {
                execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            render_listing(&mut self.output, &self.current_dir, &entries, &page, self.palette)?;
            render_help(&mut self.output, &page, self.palette)?;

            write!(self.output, "\n{} ", self.palette.paint("Enter your choice:", Color::Cyan))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let command = Command::parse(&line);
            tracing::debug!(?command, dir = %self.current_dir.display(), "Browser command");

            if self.execute(command, &entries, &page)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command, entries: &[DirectoryEntry], page: &Page) -> Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Up => {
                if let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) {
                    self.change_dir(parent);
                }
            }
            Command::NextPage if page.has_next() => self.page += 1,
            Command::PrevPage if page.has_prev() => self.page -= 1,
            Command::NextPage | Command::PrevPage => {}
            Command::Help => {
                render_help(&mut self.output, page, self.palette)?;
                self.pause()?;
            }
            Command::Goto(target) => {
                let resolved = resolve_path(&target, &self.current_dir);
                if resolved.is_dir() {
                    self.change_dir(resolved);
                } else {
                    self.report_error(&format!("Directory not found: {target}"))?;
                }
            }
            Command::Open(number) => match select(entries, number) {
                Some(entry) if entry.is_directory => {
                    let target = self.current_dir.join(&entry.name);
                    self.change_dir(target);
                }
                Some(entry) => {
                    writeln!(
                        self.output,
                        "\n{} {}",
                        self.palette.paint("Selected file:", Color::Green),
                        self.palette.paint(entry.display_name(), Color::Yellow)
                    )?;
                    self.pause()?;
                }
                None => self.report_error("Invalid selection.")?,
            },
            Command::Reveal(number) => match select(entries, number) {
                Some(entry) => self.reveal(entry)?,
                None => self.report_error("Invalid selection.")?,
            },
            Command::Delete(number) => match select(entries, number) {
                Some(entry) => self.delete(entry)?,
                None => self.report_error("Invalid selection.")?,
            },
            Command::Invalid(_) => self.report_error("Invalid command.")?,
        }
        Ok(Flow::Continue)
    }

    fn change_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
        self.page = 0;
    }

    /// Fall back to the home directory when the current one has disappeared.
    fn ensure_current_dir(&mut self) -> Result<()> {
        if self.current_dir.is_dir() {
            return Ok(());
        }
        let fallback = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        writeln!(
            self.output,
            "{} {}",
            self.palette.paint("Directory not found:", Color::Red),
            self.current_dir.display()
        )?;
        writeln!(self.output, "Falling back to {}", fallback.display())?;
        tracing::info!(from = %self.current_dir.display(), to = %fallback.display(), "Directory vanished");
        self.change_dir(fallback);
        Ok(())
    }

    fn load_entries(&mut self) -> Result<Vec<DirectoryEntry>> {
        let name = self
            .current_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.current_dir.display().to_string());

        let spinner = Spinner::start(format!("Calculating sizes in {name}..."), &self.options.spinner);
        let listed = list_directory_with(&self.current_dir, self.platform);
        spinner.stop();

        match listed {
            Ok(mut entries) => {
                if !self.options.show_hidden {
                    entries.retain(|e| !e.is_hidden);
                }
                Ok(entries)
            }
            Err(err) => {
                self.report_error(&format!("Error accessing directory: {err}"))?;
                Ok(Vec::new())
            }
        }
    }

    fn reveal(&mut self, entry: &DirectoryEntry) -> Result<()> {
        let path = self.current_dir.join(&entry.name);
        match reveal_entry_with(&path, self.platform) {
            Ok(()) if self.platform.highlights_item() => {
                writeln!(self.output, "\nOpened file manager with {} selected", entry.display_name())?;
            }
            Ok(()) => {
                writeln!(self.output, "\nOpened the folder containing {}", entry.display_name())?;
                writeln!(self.output, "You'll need to locate {} manually", entry.display_name())?;
            }
            Err(err) => writeln!(self.output, "\n{}", self.palette.paint(err, Color::Red))?,
        }
        self.pause()
    }

    fn delete(&mut self, entry: &DirectoryEntry) -> Result<()> {
        let path = self.current_dir.join(&entry.name);

        if self.options.confirm_delete {
            write!(
                self.output,
                "\nDelete {} '{}' ({})? [y/N] ",
                entry.kind_label().to_lowercase(),
                entry.display_name(),
                format_size(entry.size_bytes)
            )?;
            self.output.flush()?;
            let answer = self.read_line()?.unwrap_or_default().to_lowercase();
            if answer != "y" && answer != "yes" {
                writeln!(self.output, "Cancelled.")?;
                return Ok(());
            }
        }

        match delete_entry(&path) {
            Ok(()) => writeln!(
                self.output,
                "{} {}",
                self.palette.paint("Deleted", Color::Green),
                entry.display_name()
            )?,
            Err(err) => writeln!(self.output, "{}", self.palette.paint(err, Color::Red))?,
        }
        self.pause()
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", self.palette.paint(message, Color::Red))?;
        self.pause()
    }

    fn pause(&mut self) -> Result<()> {
        write!(self.output, "{}", self.palette.paint("Press Enter to continue...", Color::Cyan))?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Look up an entry by its 1-based display number.
fn select(entries: &[DirectoryEntry], number: usize) -> Option<&DirectoryEntry> {
    number.checked_sub(1).and_then(|idx| entries.get(idx))
}

/// Expand `~` and resolve relative paths against `base`.
pub fn resolve_path(input: &str, base: &Path) -> PathBuf {
    let expanded = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
            match dirs::home_dir() {
                Some(home) => home.join(rest.trim_start_matches(&['/', '\\'][..])),
                None => PathBuf::from(input),
            }
        }
        _ => PathBuf::from(input),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };
    absolute.canonicalize().unwrap_or(absolute)
}
