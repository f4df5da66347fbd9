//! File-backed favorites store: lenient load, atomic full rewrite.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{CcError, Result};

/// Persistence for the favorites list: one JSON file holding the array of
/// favorite question strings.
///
/// Reads are lenient — a missing or malformed file is an empty list, never an
/// error. Writes rewrite the whole list through a temp file + atomic rename
/// for crash safety.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted favorites list.
    ///
    /// Missing file, unreadable file, or corrupt JSON all default to an empty
    /// list; a broken store must not take the trainer down.
    #[must_use]
    pub fn load(&self) -> Vec<String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Persist the full favorites list, replacing any previous content.
    pub fn store(&self, favorites: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CcError::io(parent, source))?;
        }

        let data = serde_json::to_vec_pretty(favorites)?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, data).map_err(|source| CcError::io(&tmp_path, source))?;
        fs::rename(&tmp_path, &self.path).map_err(|source| CcError::io(&self.path, source))?;
        Ok(())
    }
}
