use std::fs::Metadata;
use std::path::Path;
use std::process::Command;

use super::Platform;

/// `FILE_ATTRIBUTE_HIDDEN` from the Win32 API
pub const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

/// Explorer, via `explorer /select,`
pub struct Windows;

impl Platform for Windows {
    fn name(&self) -> &'static str {
        "windows"
    }

    #[cfg(windows)]
    fn has_hidden_attribute(&self, _path: &Path, metadata: &Metadata) -> bool {
        use std::os::windows::fs::MetadataExt;
        metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
    }

    #[cfg(not(windows))]
    fn has_hidden_attribute(&self, _path: &Path, _metadata: &Metadata) -> bool {
        false
    }

    fn reveal_command(&self, path: &Path) -> Command {
        let mut select = std::ffi::OsString::from("/select,");
        select.push(path.as_os_str());

        let mut cmd = Command::new("explorer");
        cmd.arg(select);
        cmd
    }

    fn highlights_item(&self) -> bool {
        true
    }
}
