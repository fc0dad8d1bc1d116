use std::fs::Metadata;
use std::path::Path;
use std::process::Command;

use super::Platform;

/// Linux and other Unix desktops, via `xdg-open`
pub struct Freedesktop;

impl Platform for Freedesktop {
    fn name(&self) -> &'static str {
        "freedesktop"
    }

    fn has_hidden_attribute(&self, _path: &Path, _metadata: &Metadata) -> bool {
        false
    }

    /// There is no portable way to select an item, so open its parent.
    fn reveal_command(&self, path: &Path) -> Command {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(path);

        let mut cmd = Command::new("xdg-open");
        cmd.arg(parent);
        cmd
    }

    fn highlights_item(&self) -> bool {
        false
    }
}
