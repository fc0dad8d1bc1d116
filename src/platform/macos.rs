use std::fs::Metadata;
use std::path::Path;
use std::process::Command;

use super::Platform;

/// BSD `UF_HIDDEN` file flag, set by `chflags hidden`
pub const UF_HIDDEN: u32 = 0x8000;

/// Finder, via `open -R`
pub struct MacOs;

impl Platform for MacOs {
    fn name(&self) -> &'static str {
        "macos"
    }

    #[cfg(target_os = "macos")]
    fn has_hidden_attribute(&self, _path: &Path, metadata: &Metadata) -> bool {
        use std::os::macos::fs::MetadataExt;
        metadata.st_flags() & UF_HIDDEN != 0
    }

    #[cfg(not(target_os = "macos"))]
    fn has_hidden_attribute(&self, _path: &Path, _metadata: &Metadata) -> bool {
        false
    }

    fn reveal_command(&self, path: &Path) -> Command {
        let mut cmd = Command::new("open");
        cmd.arg("-R").arg(path);
        cmd
    }

    fn highlights_item(&self) -> bool {
        true
    }
}
