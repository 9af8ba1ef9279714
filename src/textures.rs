//! Texture file index over one or more texture pack directory trees
//!
//! The index maps bare texture file names (e.g. `default_stone.png`) to the
//! full path of the first matching file encountered during traversal.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for index construction failures
#[derive(Debug, Error)]
#[error("cannot read '{path}': {source}")]
pub struct TextureError {
    /// Directory that could not be read
    pub path: PathBuf,
    /// Underlying IO error
    #[source]
    pub source: io::Error,
}

/// Immutable mapping from texture file name to its resolved path.
///
/// Built once over an ordered list of root directories and read-only
/// afterwards. On name collisions the first file encountered wins; later
/// occurrences (in the same tree or a later root) are silently discarded.
#[derive(Debug, Default)]
pub struct TextureIndex {
    entries: HashMap<String, PathBuf>,
}

impl TextureIndex {
    /// Build an index by recursively walking `roots` in order.
    ///
    /// Within each directory, files are indexed before subdirectories are
    /// descended into, both in whatever order the directory listing yields.
    /// Entries whose name starts with `.` are skipped entirely (for
    /// directories, the whole subtree). Only file names containing a `.`
    /// (base name plus extension) are indexed; extensionless files are
    /// ignored. Symlinks are not followed.
    ///
    /// # Errors
    ///
    /// Returns `TextureError` if any directory in the tree cannot be read.
    pub fn build<P: AsRef<Path>>(roots: &[P]) -> Result<Self, TextureError> {
        let mut index = TextureIndex::default();
        for root in roots {
            index.collect(root.as_ref())?;
        }
        Ok(index)
    }

    /// Look up the path for a texture file name.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Number of indexed textures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index contains no textures.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn collect(&mut self, dir: &Path) -> Result<(), TextureError> {
        let read_err = |source| TextureError { path: dir.to_path_buf(), source };

        let mut subdirs = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                // Non-UTF-8 file names can never match a texture reference
                Err(_) => continue,
            };
            if name.starts_with('.') {
                continue;
            }
            let file_type = entry.file_type().map_err(read_err)?;
            if file_type.is_dir() {
                subdirs.push(entry.path());
            } else if file_type.is_file() && name.contains('.') {
                self.entries.entry(name).or_insert_with(|| entry.path());
            }
        }
        // Files in a directory take precedence over anything found deeper
        for subdir in subdirs {
            self.collect(&subdir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_build_indexes_files_recursively() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("stone.png"));
        let sub = dir.path().join("mod_a");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("dirt.png"));

        let index = TextureIndex::build(&[dir.path()]).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("stone.png"), Some(dir.path().join("stone.png").as_path()));
        assert_eq!(index.get("dirt.png"), Some(sub.join("dirt.png").as_path()));
    }

    #[test]
    fn test_first_root_wins_on_collision() {
        let root_a = TempDir::new().unwrap();
        let root_b = TempDir::new().unwrap();
        touch(&root_a.path().join("grass.png"));
        touch(&root_b.path().join("grass.png"));

        let index = TextureIndex::build(&[root_a.path(), root_b.path()]).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("grass.png"), Some(root_a.path().join("grass.png").as_path()));
    }

    #[test]
    fn test_shallow_file_wins_over_deeper_one() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("grass.png"));
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("grass.png"));

        let index = TextureIndex::build(&[dir.path()]).unwrap();
        assert_eq!(index.get("grass.png"), Some(dir.path().join("grass.png").as_path()));
    }

    #[test]
    fn test_hidden_entries_skipped() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join(".hidden.png"));
        let hidden_dir = dir.path().join(".git");
        fs::create_dir(&hidden_dir).unwrap();
        touch(&hidden_dir.join("buried.png"));

        let index = TextureIndex::build(&[dir.path()]).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_extensionless_files_ignored() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("LICENSE"));
        touch(&dir.path().join("torch.png"));

        let index = TextureIndex::build(&[dir.path()]).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.get("LICENSE").is_none());
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let index = TextureIndex::build(&[dir.path()]).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_unreadable_root_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = TextureIndex::build(&[missing.as_path()]).unwrap_err();
        assert_eq!(err.path, missing);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let root_a = TempDir::new().unwrap();
        let root_b = TempDir::new().unwrap();
        touch(&root_a.path().join("water.png"));
        touch(&root_b.path().join("water.png"));

        let first = TextureIndex::build(&[root_a.path(), root_b.path()]).unwrap();
        let second = TextureIndex::build(&[root_a.path(), root_b.path()]).unwrap();
        assert_eq!(first.get("water.png"), second.get("water.png"));
    }
}
