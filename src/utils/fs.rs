//! File system access used by the configuration locator
//!
//! The locator only ever asks metadata questions, so the trait is kept to
//! the three queries it needs. Tests substitute an in-memory tree.

use std::path::{Path, PathBuf};

/// Read-only file system queries
pub trait FileSystem {
    /// Whether `path` exists and is a directory
    fn directory_exists(&self, path: &Path) -> bool;
    /// Whether `path` exists and is a regular file
    fn file_exists(&self, path: &Path) -> bool;
    /// Files directly inside `directory`, as full paths
    fn list_files(&self, directory: &Path) -> Vec<PathBuf>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn directory_exists(&self, path: &Path) -> bool {
        (**self).directory_exists(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }

    fn list_files(&self, directory: &Path) -> Vec<PathBuf> {
        (**self).list_files(directory)
    }
}

/// The real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, directory: &Path) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("failed to list {}: {}", directory.display(), e);
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        // read_dir order is platform-dependent
        files.sort();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_skips_directories() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("b.yml"), "").unwrap();
        std::fs::write(temp.path().join("a.yml"), "").unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();

        let files = OsFileSystem.list_files(temp.path());
        assert_eq!(
            files,
            vec![temp.path().join("a.yml"), temp.path().join("b.yml")]
        );
    }

    #[test]
    fn test_missing_directory_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        assert!(!OsFileSystem.directory_exists(&missing));
        assert!(OsFileSystem.list_files(&missing).is_empty());
    }
}
