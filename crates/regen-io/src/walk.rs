//! Recursive file enumeration.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Enumerate regular files under a root, skipping hidden entries.
///
/// Hidden means the name starts with a dot, at any depth; nothing else is
/// filtered (gitignore handling stays off so generation targets inside
/// ignored build directories are still reachable). Unreadable entries are
/// logged and skipped. The result is sorted for deterministic scheduling.
#[must_use]
pub fn walk_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkBuilder::new(root.as_ref())
        .standard_filters(false)
        .hidden(true)
        .build()
        .filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    return None;
                }
            };
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            is_file.then(|| entry.into_path())
        })
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_finds_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.txt"), "x").unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), "y").unwrap();

        let files = walk_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_walk_skips_hidden_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/config"), "x").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "x").unwrap();
        fs::write(dir.path().join("visible.txt"), "x").unwrap();

        let files = walk_files(dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("visible.txt"));
    }

    #[test]
    fn test_walk_excludes_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("only/dirs/here")).unwrap();
        assert!(walk_files(dir.path()).is_empty());
    }

    #[test]
    fn test_walk_is_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["zz.txt", "aa.txt", "mm.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let files = walk_files(dir.path());
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}
