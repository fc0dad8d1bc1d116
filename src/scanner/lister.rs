use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DiskManError, Result};
use crate::platform::{self, Platform};

use super::entry::{sort_by_size, DirectoryEntry};
use super::size::compute_size;

/// List the immediate children of `dir` with their cumulative sizes, largest first.
///
/// Children that cannot be inspected are left out. Only a failure to read
/// `dir` itself is returned as an error.
pub fn list_directory(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    list_directory_with(dir, platform::current())
}

/// Same as [`list_directory`], with an explicit platform for hidden-attribute lookups.
pub fn list_directory_with(dir: &Path, platform: &dyn Platform) -> Result<Vec<DirectoryEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|source| {
        tracing::debug!(path = %dir.display(), %source, "Cannot read directory");
        DiskManError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        }
    })?;

    let mut entries = Vec::new();
    for child in read_dir {
        let inspected = child.and_then(|child| inspect_child(&child, platform));
        match inspected {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                tracing::trace!(dir = %dir.display(), %err, "Skipping inaccessible child");
            }
        }
    }

    sort_by_size(&mut entries);
    tracing::debug!(path = %dir.display(), count = entries.len(), "Listed directory");
    Ok(entries)
}

fn inspect_child(child: &fs::DirEntry, platform: &dyn Platform) -> io::Result<DirectoryEntry> {
    let path = child.path();
    let name = child.file_name();

    // Does not follow symlinks, so a link to a directory is not a directory
    let metadata = fs::symlink_metadata(&path)?;

    Ok(DirectoryEntry {
        is_hidden: is_dot_name(&name.to_string_lossy()) || platform.has_hidden_attribute(&path, &metadata),
        is_directory: metadata.is_dir(),
        size_bytes: compute_size(&path),
        name,
    })
}

/// Unix naming convention for hidden entries
pub fn is_dot_name(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use std::process::Command;
    use tempfile::TempDir;

    fn write_file(path: &Path, len: usize) {
        File::create(path).unwrap().write_all(&vec![b'x'; len]).unwrap();
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.display_name().into_owned()).collect()
    }

    /// Marks every entry whose name contains "secret" hidden.
    struct SecretAttribute;

    impl Platform for SecretAttribute {
        fn name(&self) -> &'static str {
            "test"
        }

        fn has_hidden_attribute(&self, path: &Path, _metadata: &fs::Metadata) -> bool {
            path.to_string_lossy().contains("secret")
        }

        fn reveal_command(&self, _path: &Path) -> Command {
            Command::new("true")
        }

        fn highlights_item(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_lists_immediate_children_sorted() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("small.txt"), 1);
        write_file(&dir.path().join("large.txt"), 1000);
        fs::create_dir(dir.path().join("sub")).unwrap();
        write_file(&dir.path().join("sub/inner.bin"), 100);

        let entries = list_directory(dir.path()).unwrap();

        assert_eq!(names(&entries), ["large.txt", "sub", "small.txt"]);
        let sub = &entries[1];
        assert!(sub.is_directory);
        assert_eq!(sub.size_bytes, 100);
        assert!(entries.windows(2).all(|w| w[0].size_bytes >= w[1].size_bytes));
    }

    #[test]
    fn test_empty_directory_lists_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(list_directory(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_access_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        let err = list_directory(&missing).unwrap_err();
        match err {
            DiskManError::DirectoryAccess { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected DirectoryAccess, got {other:?}"),
        }
    }

    #[test]
    fn test_listing_a_file_is_access_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        write_file(&file, 3);

        assert!(matches!(
            list_directory(&file),
            Err(DiskManError::DirectoryAccess { .. })
        ));
    }

    #[test]
    fn test_dot_names_are_hidden() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join(".env"), 10);
        write_file(&dir.path().join("env"), 5);

        let entries = list_directory(dir.path()).unwrap();
        let find = |name: &str| entries.iter().find(|e| e.name == name).unwrap();

        assert!(find(".env").is_hidden);
        assert!(!find("env").is_hidden);
    }

    #[test]
    fn test_platform_attribute_marks_hidden() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("secret.db"), 10);
        write_file(&dir.path().join("public.db"), 10);

        let entries = list_directory_with(dir.path(), &SecretAttribute).unwrap();
        let hidden: Vec<_> = entries.iter().filter(|e| e.is_hidden).collect();

        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].name, "secret.db");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_child_is_zero_sized_file() {
        use std::os::unix::fs::symlink;

        let target = TempDir::new().unwrap();
        write_file(&target.path().join("huge"), 4096);

        let dir = TempDir::new().unwrap();
        symlink(target.path(), dir.path().join("link")).unwrap();

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].size_bytes, 0);
        assert!(!entries[0].is_directory);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_is_listed() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        symlink(PathBuf::from("/nonexistent/target"), dir.path().join("dangling")).unwrap();

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(names(&entries), ["dangling"]);
        assert_eq!(entries[0].size_bytes, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_does_not_fail_listing() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("a.txt"), 100);
        write_file(&dir.path().join("b.txt"), 200);
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        write_file(&locked.join("private.bin"), 999);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to privileged users
        let enforced = fs::read_dir(&locked).is_err();

        let entries = list_directory(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let entries = entries.unwrap();

        if !enforced {
            return;
        }

        let find = |name: &str| entries.iter().find(|e| e.name == name).unwrap();
        assert_eq!(find("a.txt").size_bytes, 100);
        assert_eq!(find("b.txt").size_bytes, 200);
        assert_eq!(find("locked").size_bytes, 0);
        assert_eq!(entries.iter().map(|e| e.size_bytes).sum::<u64>(), 300);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_stay_distinct_and_deletable() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let first = OsStr::from_bytes(b"bad\xff");
        let second = OsStr::from_bytes(b"bad\xfe");
        write_file(&dir.path().join(first), 100);
        write_file(&dir.path().join(second), 50);

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, first);
        assert_eq!(entries[1].name, second);
        assert_ne!(entries[0].name, entries[1].name);

        crate::actions::delete_entry(&dir.path().join(&entries[0].name)).unwrap();

        assert!(!dir.path().join(first).exists());
        assert!(dir.path().join(second).exists());
        let remaining = list_directory(dir.path()).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, second);
    }

    #[test]
    fn test_is_dot_name() {
        assert!(is_dot_name(".git"));
        assert!(is_dot_name("."));
        assert!(!is_dot_name("git"));
        assert!(!is_dot_name("file.txt"));
    }
}
