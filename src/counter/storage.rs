//! Key/value persistence behind the daily counter.
//!
//! Stores are infallible from the caller's point of view: a read that cannot
//! be served is `None`, a write that cannot reach disk is logged and kept in
//! memory.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

/// String key/value capability injected into the [`SequenceCounter`](crate::counter::SequenceCounter).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Store persisted as one JSON object in a file.
///
/// The whole map is rewritten atomically on every `set`; it holds one entry
/// per day.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file starts empty. A malformed file is moved aside to
    /// `<path>.corrupt` and the store starts empty. An unreadable file is
    /// logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(entries) => {
                    debug!(path = %path.display(), entries = entries.len(), "Loaded counter store");
                    entries
                }
                Err(e) => {
                    let backup = corrupt_path(&path);
                    match fs::rename(&path, &backup) {
                        Ok(()) => error!(
                            path = %path.display(),
                            backup = %backup.display(),
                            error = %e,
                            "Malformed counter store moved aside, starting empty"
                        ),
                        Err(rename_err) => error!(
                            path = %path.display(),
                            error = %e,
                            rename_error = %rename_err,
                            "Malformed counter store, starting empty"
                        ),
                    }
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable counter store, starting empty");
                HashMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the whole map to a sibling temp file, then renames it over the
    /// target. A crash leaves either the previous map or the new one on disk.
    fn flush(&self) -> Result<(), String> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| format!("cannot create {}: {e}", dir.display()))?;

        let contents = serde_json::to_vec_pretty(&self.entries).map_err(|e| e.to_string())?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| format!("cannot create temp file: {e}"))?;
        tmp.write_all(&contents)
            .map_err(|e| format!("cannot write temp file: {e}"))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| format!("cannot sync temp file: {e}"))?;
        tmp.persist(&self.path)
            .map_err(|e| format!("cannot persist temp file -> {}: {e}", self.path.display()))?;
        Ok(())
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".corrupt");
    PathBuf::from(name)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            error!(path = %self.path.display(), key, error = %e, "Failed to persist counter store");
        }
    }
}
