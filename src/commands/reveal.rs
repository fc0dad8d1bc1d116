//! Reveal command implementation

use crate::actions::reveal_entry;
use crate::cli::RevealArgs;
use crate::error::Result;
use crate::platform;

/// Run the reveal command
pub fn run(args: RevealArgs) -> Result<()> {
    let path = args.path.canonicalize().unwrap_or_else(|_| args.path.clone());
    reveal_entry(&path)?;

    if platform::current().highlights_item() {
        println!("Opened file manager with {} selected", path.display());
    } else {
        println!("Opened the folder containing {}", path.display());
    }
    Ok(())
}
