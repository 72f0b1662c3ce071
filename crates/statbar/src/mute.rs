use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Persisted set of muted item ids, stored as a JSON array of strings.
///
/// The file is read whole at startup and rewritten whole on `mute`; there is
/// no locking, so two invocations racing on the file can lose one mute.
/// Accepted for the single-user, sequential-invocation usage this targets.
#[derive(Debug)]
pub struct MuteSet {
    path: PathBuf,
    ids: BTreeSet<String>,
}

impl MuteSet {
    /// A missing file is an empty set; a corrupt one is a persistence error
    /// left to the caller (the render path degrades to empty, the mute
    /// command aborts).
    pub fn load(path: &Path) -> Result<Self> {
        let ids = if path.exists() {
            let data = fs::read_to_string(path).map_err(|e| {
                Error::persistence(format!("failed to read {}: {e}", path.display()))
            })?;
            serde_json::from_str::<Vec<String>>(&data)
                .map_err(|e| {
                    Error::persistence(format!("malformed mute list {}: {e}", path.display()))
                })?
                .into_iter()
                .collect()
        } else {
            BTreeSet::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            ids,
        })
    }

    /// Empty set bound to `path`; the render path falls back to this when
    /// the stored list cannot be read.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            ids: BTreeSet::new(),
        }
    }

    pub fn is_muted(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Add `id` and flush the full set back to disk.
    pub fn mute(&mut self, id: &str) -> Result<()> {
        self.ids.insert(id.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::persistence(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let ids: Vec<&String> = self.ids.iter().collect();
        let data = serde_json::to_string_pretty(&ids)
            .map_err(|e| Error::persistence(format!("failed to encode mute list: {e}")))?;
        fs::write(&self.path, data)
            .map_err(|e| Error::persistence(format!("failed to write {}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mute_is_visible_immediately_and_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mute.json");

        let mut set = MuteSet::load(&path).unwrap();
        assert!(!set.is_muted("42"));
        set.mute("42").unwrap();
        assert!(set.is_muted("42"));

        let fresh = MuteSet::load(&path).unwrap();
        assert!(fresh.is_muted("42"));
        assert!(!fresh.is_muted("7"));
    }

    #[test]
    fn mute_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("mute.json");
        let mut set = MuteSet::load(&path).unwrap();
        set.mute("a").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn corrupt_store_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mute.json");
        fs::write(&path, "{not json").unwrap();
        let err = MuteSet::load(&path).unwrap_err().to_string();
        assert!(err.contains("malformed"), "unexpected err: {err}");
    }
}
