use std::fs::{self, Metadata};
use std::iter::Sum;
use std::path::Path;

use humansize::DECIMAL;
use walkdir::WalkDir;

/// Contribution of a single visited item to an aggregated size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSize {
    /// Bytes counted toward the total
    Counted(u64),
    /// The item could not be read and contributes nothing
    Skipped,
}

impl ItemSize {
    pub fn bytes(self) -> u64 {
        match self {
            ItemSize::Counted(bytes) => bytes,
            ItemSize::Skipped => 0,
        }
    }
}

impl Sum<ItemSize> for u64 {
    fn sum<I: Iterator<Item = ItemSize>>(iter: I) -> u64 {
        iter.map(ItemSize::bytes).sum()
    }
}

/// Get apparent file size (content length)
pub fn apparent_size(metadata: &Metadata) -> u64 {
    metadata.len()
}

/// Cumulative apparent size of `path`.
///
/// A regular file yields its own length; a directory yields the sum over every
/// regular file beneath it. Symbolic links are neither counted nor followed,
/// and anything that cannot be read contributes zero.
pub fn compute_size(path: &Path) -> u64 {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(err) => {
            tracing::trace!(path = %path.display(), %err, "Cannot stat, counting as zero");
            return 0;
        }
    };

    if metadata.is_file() {
        return apparent_size(&metadata);
    }
    if !metadata.is_dir() {
        // Symlinks, sockets, fifos, devices
        return 0;
    }

    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .map(item_size)
        .sum()
}

fn item_size(result: walkdir::Result<walkdir::DirEntry>) -> ItemSize {
    let entry = match result {
        Ok(e) => e,
        Err(err) => {
            tracing::trace!(path = ?err.path(), %err, "Skipping unreadable entry");
            return ItemSize::Skipped;
        }
    };

    if !entry.file_type().is_file() {
        return ItemSize::Counted(0);
    }

    match entry.metadata() {
        Ok(metadata) => ItemSize::Counted(apparent_size(&metadata)),
        Err(err) => {
            tracing::trace!(path = %entry.path().display(), %err, "Skipping unreadable file");
            ItemSize::Skipped
        }
    }
}

/// Format size in human-readable decimal units ("1.2 kB", "3.4 GB")
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, DECIMAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, len: usize) {
        File::create(path).unwrap().write_all(&vec![b'x'; len]).unwrap();
    }

    #[test]
    fn test_file_size_is_its_length() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("data.bin");
        write_file(&file, 1234);

        assert_eq!(compute_size(&file), 1234);
    }

    #[test]
    fn test_flat_directory_sums_files() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("a"), 10);
        write_file(&dir.path().join("b"), 20);
        write_file(&dir.path().join("c"), 30);

        assert_eq!(compute_size(dir.path()), 60);
    }

    #[test]
    fn test_nested_directories_are_accumulated() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("one/two/three");
        fs::create_dir_all(&deep).unwrap();
        write_file(&dir.path().join("one/top.txt"), 100);
        write_file(&deep.join("bottom.txt"), 250);

        assert_eq!(compute_size(dir.path()), 350);
        assert_eq!(compute_size(&dir.path().join("one/two")), 250);
    }

    #[test]
    fn test_empty_directory_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(compute_size(dir.path()), 0);
    }

    #[test]
    fn test_missing_path_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(compute_size(&dir.path().join("nope")), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_contribute_nothing() {
        use std::os::unix::fs::symlink;

        let target = TempDir::new().unwrap();
        write_file(&target.path().join("big.bin"), 5000);

        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("real.txt"), 42);
        symlink(target.path().join("big.bin"), dir.path().join("file_link")).unwrap();
        symlink(target.path(), dir.path().join("dir_link")).unwrap();

        assert_eq!(compute_size(dir.path()), 42);
        assert_eq!(compute_size(&dir.path().join("file_link")), 0);
        assert_eq!(compute_size(&dir.path().join("dir_link")), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_terminates() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        write_file(&dir.path().join("sub/file"), 7);
        symlink(dir.path(), dir.path().join("sub/loop")).unwrap();

        assert_eq!(compute_size(dir.path()), 7);
    }

    #[test]
    fn test_item_size_sum_ignores_skipped() {
        let items = [ItemSize::Counted(5), ItemSize::Skipped, ItemSize::Counted(7)];
        let total: u64 = items.into_iter().sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1200), "1.2 kB");
        assert_eq!(format_size(1_000_000), "1 MB");
        assert_eq!(format_size(3_400_000_000), "3.4 GB");
    }
}
