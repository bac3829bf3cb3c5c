//! Path normalization utilities
//!
//! Ensures file labels use '/' as separator and are relative to the
//! scanned root, so reports and persisted records are portable.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// The file label used in records: the file name alone
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| normalize_path(path))
}

/// Get the .concord repository directory for a given root
pub fn repo_dir(root: &Path) -> PathBuf {
    root.join(".concord")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("docs/intro.txt");
        assert_eq!(normalize_path(path), "docs/intro.txt");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/docs/intro.txt");
        assert_eq!(make_relative(path, root), Some("docs/intro.txt".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.txt");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_file_label() {
        assert_eq!(file_label(Path::new("/data/input/book.txt")), "book.txt");
        assert_eq!(file_label(Path::new("book.txt")), "book.txt");
    }

    #[test]
    fn test_repo_dir() {
        let root = Path::new("/project");
        assert_eq!(repo_dir(root), PathBuf::from("/project/.concord"));
    }
}
