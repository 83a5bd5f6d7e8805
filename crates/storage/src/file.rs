//! File-backed key-value store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::kv::KeyValueStore;
use crate::Result;

/// File name of the store document inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";

/// A store persisted as one JSON object document on disk.
///
/// The document is loaded once when the store is opened and rewritten on
/// every mutation (write to a temporary file, then rename over the old one).
/// It survives restarts but is scoped to one data directory.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<IndexMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store inside `dir`.
    ///
    /// A missing document opens empty. A malformed document is moved aside to
    /// `store.json.corrupt-<epoch ms>` and the store opens empty, so nothing
    /// saved before is overwritten. Any other read failure is returned.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(STORE_FILE_NAME);

        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<IndexMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    let aside = quarantine(&path)?;
                    warn!(
                        path = %path.display(),
                        moved_to = %aside.display(),
                        error = %e,
                        "Store document is malformed, moved it aside and starting empty"
                    );
                    IndexMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!("Opened store: {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &IndexMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Persisted {} keys to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.shift_remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

/// Rename an unparseable document next to itself, returning the new path.
fn quarantine(path: &Path) -> Result<PathBuf> {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".corrupt-{}", Utc::now().timestamp_millis()));
    let aside = PathBuf::from(name);
    fs::rename(path, &aside)?;
    Ok(aside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        store.set("theme", "light").unwrap();
        store.set("genora-inputs-slogan", r#"{"input1":"coffee"}"#).unwrap();
        store.remove("theme").unwrap();
        drop(store);

        let reopened = FileStore::open(dir.path()).unwrap();
        assert!(reopened.get("theme").is_none());
        assert_eq!(
            reopened.get("genora-inputs-slogan").as_deref(),
            Some(r#"{"input1":"coffee"}"#)
        );
    }

    fn corrupt_copies(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("store.json.corrupt-"))
            })
            .collect()
    }

    #[test]
    fn test_malformed_document_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILE_NAME), "{ not json").unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("theme").is_none());

        store.set("theme", "dark").unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_malformed_document_is_kept_aside() {
        let dir = tempfile::tempdir().unwrap();
        let original = r#"{"theme":"light","genora-user-reviews":"[]","bad":1}"#;
        fs::write(dir.path().join(STORE_FILE_NAME), original).unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        store.set("genora-inputs-slogan", "{}").unwrap();

        let copies = corrupt_copies(dir.path());
        assert_eq!(copies.len(), 1);
        assert_eq!(fs::read_to_string(&copies[0]).unwrap(), original);

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains("genora-inputs-slogan"));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let store = FileStore::open(&data_dir).unwrap();
        store.set("theme", "dark").unwrap();
        fs::remove_dir_all(&data_dir).unwrap();

        assert!(store.set("theme", "light").is_err());
        assert!(store.set("genora-inputs-title", "{}").is_err());
        assert!(store.remove("theme").is_err());

        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(store.get("genora-inputs-title").is_none());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = FileStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join(STORE_FILE_NAME).exists());
    }
}
