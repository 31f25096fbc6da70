use crate::error::{Result as StoreResult, StoreError};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// String-keyed, string-valued store persisted as a single JSON object.
///
/// Every mutation is written through immediately:
/// 1. Serialize the whole map to `<file>.tmp.<pid>`
/// 2. fsync
/// 3. Atomic rename over the store file
///
/// The in-memory variant never touches disk.
#[derive(Debug, Default)]
pub struct LocalStore {
    path: Option<PathBuf>,
    items: BTreeMap<String, String>,
    corrupted_backup: Option<PathBuf>,
}

impl LocalStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file yields an empty store. A file that is not a JSON object
    /// of strings is renamed to `<file>.corrupted.<timestamp>` and the store
    /// starts empty.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if !path.exists() {
            info!("No store file at {path:?} (first launch)");
            return Ok(Self {
                path: Some(path),
                ..Self::default()
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(items) => {
                debug!("Loaded {} stored keys from {path:?}", items.len());
                Ok(Self {
                    path: Some(path),
                    items,
                    corrupted_backup: None,
                })
            }
            Err(e) => {
                warn!("Store file corrupted at {path:?}: {e}");
                let backup = Self::backup_corrupted(&path)?;
                Ok(Self {
                    path: Some(path),
                    items: BTreeMap::new(),
                    corrupted_backup: Some(backup),
                })
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Where a corrupted store file was moved to during `open`, if anywhere.
    pub fn corrupted_backup(&self) -> Option<&Path> {
        self.corrupted_backup.as_deref()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> StoreResult<()> {
        self.set_items([(key, value.into())])
    }

    /// Insert several entries with a single write.
    ///
    /// Memory is only updated once the write has landed; a failed write
    /// leaves the store exactly as it was.
    pub fn set_items<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> StoreResult<()>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut staged = self.items.clone();
        for (key, value) in entries {
            staged.insert(key.into(), value.into());
        }
        self.commit(staged)
    }

    /// Remove several keys with a single write.
    pub fn remove_items(&mut self, keys: &[&str]) -> StoreResult<()> {
        if !keys.iter().any(|key| self.items.contains_key(*key)) {
            return Ok(());
        }

        let mut staged = self.items.clone();
        for key in keys {
            staged.remove(*key);
        }
        self.commit(staged)
    }

    /// Removing an absent key is a no-op (and skips the write).
    pub fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.remove_items(&[key])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn commit(&mut self, staged: BTreeMap<String, String>) -> StoreResult<()> {
        self.persist(&staged)?;
        self.items = staged;
        Ok(())
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> StoreResult<()> {
        let Some(final_path) = &self.path else {
            return Ok(());
        };

        if let Some(dir) = final_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| StoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let file_name = final_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("storage.json"));
        let temp_path =
            final_path.with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(items)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Persisted {} keys to {final_path:?}", items.len());
        Ok(())
    }

    fn backup_corrupted(path: &Path) -> StoreResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let backup_path = path.with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(path, &backup_path)
            .map_err(|e| StoreError::backup_failed(path.to_path_buf(), e))?;

        warn!("Backed up corrupted store to {backup_path:?}");
        Ok(backup_path)
    }
}
