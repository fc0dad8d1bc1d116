use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// DiskMan - browse disk usage interactively, largest entries first
#[derive(Parser, Debug)]
#[command(name = "diskman")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "DISKMAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse directories interactively
    Browse(BrowseArgs),

    /// Print the entries of a directory sorted by size
    List(ListArgs),

    /// Print the total size of files or directories
    Size(SizeArgs),

    /// Delete a file or directory tree
    Delete(DeleteArgs),

    /// Reveal a file or directory in the system file manager
    Reveal(RevealArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Starting directory (prompts for one when omitted)
    pub path: Option<PathBuf>,

    /// Entries shown per page
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,

    /// Hide dot-files and entries with the hidden attribute
    #[arg(long)]
    pub no_hidden: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Include hidden entries
    #[arg(short, long)]
    pub all: bool,

    /// Show only the N largest entries
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Files or directories to measure
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Print raw byte counts
    #[arg(short, long)]
    pub bytes: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// File or directory to delete
    pub path: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RevealArgs {
    /// File or directory to reveal
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
