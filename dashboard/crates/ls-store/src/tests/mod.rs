
use crate::{LocalStore, PreferenceStore};

use std::path::PathBuf;

use tempfile::TempDir;

/// File-backed preference store in a fresh temp directory
pub(crate) fn temp_store() -> (TempDir, PathBuf, PreferenceStore) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    let store = PreferenceStore::new(LocalStore::open(&path).unwrap());
    (temp, path, store)
}
