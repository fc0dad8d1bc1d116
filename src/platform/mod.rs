//! Platform-specific capabilities: native hidden attributes and revealing an
//! entry in the system file manager.

mod freedesktop;
mod macos;
mod windows;

pub use freedesktop::Freedesktop;
pub use macos::MacOs;
pub use windows::Windows;

use std::fs::Metadata;
use std::path::Path;
use std::process::Command;

use crate::error::{DiskManError, Result};

/// Trait for per-OS behaviour the scanner and browser rely on
pub trait Platform: Send + Sync {
    /// Get the name of this platform
    fn name(&self) -> &'static str;

    /// Whether the filesystem marks this entry hidden independently of its name
    fn has_hidden_attribute(&self, path: &Path, metadata: &Metadata) -> bool;

    /// Command that opens the file manager at `path`
    fn reveal_command(&self, path: &Path) -> Command;

    /// Whether the file manager selects the entry itself, rather than just
    /// opening its parent directory
    fn highlights_item(&self) -> bool;

    /// Open the file manager at `path`.
    ///
    /// Only a failure to launch the file manager is reported; its exit status
    /// is not inspected since some of them exit non-zero on success.
    fn reveal(&self, path: &Path) -> Result<()> {
        let mut command = self.reveal_command(path);
        tracing::debug!(platform = self.name(), ?command, "Revealing entry");

        command
            .status()
            .map(|_| ())
            .map_err(|source| DiskManError::Reveal {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// The implementation for the platform this binary was built for
pub fn current() -> &'static dyn Platform {
    #[cfg(target_os = "macos")]
    {
        &MacOs
    }
    #[cfg(windows)]
    {
        &Windows
    }
    #[cfg(not(any(target_os = "macos", windows)))]
    {
        &Freedesktop
    }
}
