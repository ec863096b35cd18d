//! Note directory storage.
//!
//! `NoteStore` owns the configured base directory: it resolves (and if
//! necessary creates) it up front, creates one note directory per request,
//! and scans sibling names to suggest keywords already in use.

use std::{fs, io, path::PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::{keywords::keywords_from_file_name, Config, DirnoteError, Result};

/// Storage backend for note directories.
pub struct NoteStore {
    /// Application configuration
    config: Config,

    /// Absolute path of the base directory
    base_dir: PathBuf,
}

impl NoteStore {
    /// Creates a store for the configured base directory.
    ///
    /// The base directory is created recursively when absent, then
    /// canonicalized so every path returned by the store is absolute.
    pub fn new(config: Config) -> Result<Self> {
        let notes_dir = config.notes_dir.clone();

        if !notes_dir.exists() {
            info!("Creating base directory: {}", notes_dir.display());
            fs::create_dir_all(&notes_dir)
                .map_err(|_| DirnoteError::DirectoryError { path: notes_dir.clone() })?;
        }

        let base_dir = notes_dir
            .canonicalize()
            .map_err(|_| DirnoteError::DirectoryError { path: notes_dir })?;
        debug!("Using base directory: {}", base_dir.display());

        Ok(NoteStore { config, base_dir })
    }

    /// The absolute base directory this store writes under.
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The configuration snapshot this store was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates the directory `base/name` and returns its absolute path.
    ///
    /// Creation is a single atomic filesystem call; on failure nothing is
    /// left behind. Fails with [`DirnoteError::AlreadyExists`] when the
    /// target is already present. The store never retries: a caller that
    /// wants a fresh name after a collision regenerates the identifier.
    pub fn create_note_directory(&self, name: &str) -> Result<PathBuf> {
        let path = self.base_dir.join(name);
        debug!("Creating note directory: {}", path.display());

        fs::create_dir(&path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => DirnoteError::AlreadyExists { path: path.clone() },
            io::ErrorKind::PermissionDenied => {
                DirnoteError::PermissionDenied { path: path.clone() }
            }
            _ => DirnoteError::Io(e),
        })?;

        info!("Created note directory: {}", path.display());
        Ok(path)
    }

    /// Keywords the user is likely to reuse: the configured static list
    /// merged with every keyword found in existing note directory names,
    /// sorted and deduplicated.
    pub fn known_keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = self.config.known_keywords.clone();

        for entry in WalkDir::new(&self.base_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in base directory: {}", e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy();
            keywords.extend(keywords_from_file_name(&name));
        }

        keywords.sort();
        keywords.dedup();
        keywords
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn store_in(dir: &std::path::Path) -> NoteStore {
        let config = Config {
            notes_dir: dir.join("notes"),
            ..Config::default()
        };
        NoteStore::new(config).unwrap()
    }

    #[test]
    fn new_creates_missing_base_directory() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());
        assert!(store.base_dir().is_dir());
        assert!(store.base_dir().is_absolute());
    }

    #[test]
    fn creates_note_directory_and_returns_absolute_path() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());

        let path = store.create_note_directory("20220616T143000--hello").unwrap();
        assert!(path.is_dir());
        assert!(path.is_absolute());
        assert_eq!(path, store.base_dir().join("20220616T143000--hello"));
    }

    #[test]
    fn second_creation_with_same_name_fails_with_already_exists() {
        let tmp = tempdir().unwrap();
        let store = store_in(tmp.path());

        store.create_note_directory("20220616T143000").unwrap();
        match store.create_note_directory("20220616T143000") {
            Err(DirnoteError::AlreadyExists { path }) => {
                assert_eq!(path, store.base_dir().join("20220616T143000"));
            }
            other => panic!("expected AlreadyExists, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn known_keywords_merges_config_and_sibling_names() {
        let tmp = tempdir().unwrap();
        let config = Config {
            notes_dir: tmp.path().join("notes"),
            known_keywords: vec!["zettel".into(), "wip".into()],
            ..Config::default()
        };
        let store = NoteStore::new(config).unwrap();

        store
            .create_note_directory("20220616T143000--idea__3d-models_wip")
            .unwrap();
        store.create_note_directory("20220617T090000--plain").unwrap();

        assert_eq!(store.known_keywords(), vec!["3d-models", "wip", "zettel"]);
    }
}
