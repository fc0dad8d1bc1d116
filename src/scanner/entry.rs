use std::borrow::Cow;
use std::ffi::OsString;

use serde::{Serialize, Serializer};

/// One child of a listed directory, with the cumulative size of everything under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Base name of the entry as the filesystem reports it (no path separators)
    #[serde(serialize_with = "serialize_lossy")]
    pub name: OsString,

    /// Apparent size in bytes; for directories, the sum over all regular files beneath
    pub size_bytes: u64,

    /// True if this is a directory (symlinks to directories are not)
    pub is_directory: bool,

    /// True for dot-files and entries carrying the platform hidden attribute
    pub is_hidden: bool,
}

impl DirectoryEntry {
    /// Printable name; bytes that are not valid UTF-8 show as U+FFFD.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_directory {
            "Directory"
        } else {
            "File"
        }
    }
}

fn serialize_lossy<S: Serializer>(name: &OsString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&name.to_string_lossy())
}

/// Sort entries largest-first. Equal sizes keep their enumeration order.
pub fn sort_by_size(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
}

/// Sum of `size_bytes` across a listing.
pub fn total_size(entries: &[DirectoryEntry]) -> u64 {
    entries.iter().map(|e| e.size_bytes).sum()
}
