//! Table rendering for the interactive browser.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use crossterm::style::{Attribute, Color, Stylize};

use crate::scanner::{format_size, total_size, DirectoryEntry};

use super::page::Page;

const RULE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 40;
const NAME_MAX_CHARS: usize = 37;

/// Applies colours, or nothing when colour is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: impl Display, color: Color) -> String {
        self.styled(text, color, None)
    }

    pub fn styled(&self, text: impl Display, color: Color, attr: Option<Attribute>) -> String {
        let text = text.to_string();
        if !self.enabled {
            return text;
        }
        match attr {
            Some(attr) => text.with(color).attribute(attr).to_string(),
            None => text.with(color).to_string(),
        }
    }
}

/// Shorten long names to fit the name column.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_MAX_CHARS {
        let head: String = name.chars().take(NAME_MAX_CHARS - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Share of `total` taken by `size`, in percent.
pub fn percentage(size: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        size as f64 / total as f64 * 100.0
    }
}

fn share_color(percent: f64) -> Color {
    if percent > 10.0 {
        Color::Red
    } else if percent > 5.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Render one page of `entries` as a table with header and footer.
pub fn render_listing<W: Write>(
    out: &mut W,
    dir: &Path,
    entries: &[DirectoryEntry],
    page: &Page,
    palette: Palette,
) -> io::Result<()> {
    let range = page.range();
    let rule = palette.paint("-".repeat(RULE_WIDTH), Color::Blue);
    let shown_from = if range.is_empty() { 0 } else { range.start + 1 };

    writeln!(
        out,
        "{} {}",
        palette.styled("Current directory:", Color::Cyan, Some(Attribute::Bold)),
        palette.paint(dir.display(), Color::Yellow)
    )?;
    writeln!(
        out,
        "Showing items {}-{} of {} (Page {} of {})",
        shown_from,
        range.end,
        page.total_items,
        page.index + 1,
        page.total_pages().max(1)
    )?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{}",
        palette.styled(
            format!("{:<4} {:<40} {:<15} {:<8} {}", "#", "Name", "Size", "%", "Type"),
            Color::Green,
            Some(Attribute::Bold)
        )
    )?;
    writeln!(out, "{rule}")?;

    let total = total_size(entries);
    for (idx, entry) in entries[range.clone()].iter().enumerate() {
        render_row(out, range.start + idx + 1, entry, total, palette)?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Total size: {}", palette.paint(format_size(total), Color::Yellow))?;
    writeln!(out, "Total items: {}", palette.paint(entries.len(), Color::Yellow))?;
    Ok(())
}

fn render_row<W: Write>(
    out: &mut W,
    number: usize,
    entry: &DirectoryEntry,
    total: u64,
    palette: Palette,
) -> io::Result<()> {
    let percent = percentage(entry.size_bytes, total);
    let share = share_color(percent);

    let (name_color, type_color) = if entry.is_directory {
        (Color::Cyan, Color::Magenta)
    } else {
        (Color::White, Color::Yellow)
    };
    let (name_attr, type_attr) = if entry.is_hidden {
        (None, Some(Attribute::Dim))
    } else {
        (Some(Attribute::Bold), None)
    };

    writeln!(
        out,
        "{} {} {} {} {}",
        palette.paint(format!("{number:<4}"), Color::Yellow),
        palette.styled(
            format!("{:<width$}", truncate_name(&entry.display_name()), width = NAME_WIDTH),
            name_color,
            name_attr
        ),
        palette.paint(format!("{:<15}", format_size(entry.size_bytes)), share),
        palette.paint(format!("{:<8}", format!("{percent:.1}%")), share),
        palette.styled(entry.kind_label(), type_color, type_attr),
    )
}

/// Render the list of available commands for the current page.
pub fn render_help<W: Write>(out: &mut W, page: &Page, palette: Palette) -> io::Result<()> {
    let key = |k: &str| palette.paint(format!("{k:<8}"), Color::Yellow);

    writeln!(out)?;
    writeln!(out, "{}", palette.styled("Navigation options:", Color::Cyan, Some(Attribute::Bold)))?;
    writeln!(out, "  {}: Open item by number (1, 2, 3, ...)", key("number"))?;
    writeln!(out, "  {}: Reveal item in file manager (e.g. 'o 1')", key("o N"))?;
    writeln!(out, "  {}: Delete item (e.g. 'd 1')", key("d N"))?;
    writeln!(out, "  {}: Go to directory (e.g. 'g ~/Downloads')", key("g path"))?;
    writeln!(out, "  {}: Go up one level", key(".."))?;
    if page.has_prev() {
        writeln!(out, "  {}: Previous page", key("p"))?;
    }
    if page.has_next() {
        writeln!(out, "  {}: Next page", key("n"))?;
    }
    writeln!(out, "  {}: Quit", key("q"))?;
    Ok(())
}
