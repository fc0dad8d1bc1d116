//! Delete command implementation

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::actions::delete_entry;
use crate::cli::DeleteArgs;
use crate::scanner::{compute_size, format_size};

/// Run the delete command
pub fn run(args: DeleteArgs) -> Result<()> {
    if !args.force {
        let stdin = io::stdin();
        let confirmed = confirm(&args.path, &mut stdin.lock(), &mut io::stderr())?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    delete_entry(&args.path)?;
    println!("Deleted {}", args.path.display());
    Ok(())
}

/// Ask whether `path` should be deleted. Only "y" or "yes" confirms.
pub fn confirm<R: BufRead, W: Write>(path: &Path, input: &mut R, prompt: &mut W) -> io::Result<bool> {
    write!(
        prompt,
        "Delete '{}' ({})? [y/N] ",
        path.display(),
        format_size(compute_size(path))
    )?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
