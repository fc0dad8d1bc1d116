//! Size command implementation

use std::fs;

use crate::cli::SizeArgs;
use crate::error::{DiskManError, Result};
use crate::scanner::{compute_size, format_size};

/// Run the size command, printing one `size<TAB>path` line per argument
pub fn run(args: SizeArgs) -> Result<()> {
    for path in &args.paths {
        if fs::symlink_metadata(path).is_err() {
            return Err(DiskManError::InvalidPath(path.display().to_string()));
        }

        let size = compute_size(path);
        tracing::debug!(path = %path.display(), size, "Computed size");

        let shown = if args.bytes {
            size.to_string()
        } else {
            format_size(size)
        };
        println!("{}\t{}", shown, path.display());
    }
    Ok(())
}
