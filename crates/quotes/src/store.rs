//! String key-value stores backing the quote cache

use crate::error::{QuoteError, QuoteResult};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Minimal persistent map of strings
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> QuoteResult<Option<String>>;

    fn set(&self, key: &str, value: String) -> QuoteResult<()>;
}

/// Store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> QuoteResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| QuoteError::Store("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> QuoteResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| QuoteError::Store("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store kept as one JSON object on disk
///
/// The whole map is rewritten on every `set`, through a temp file in the same
/// directory so readers never see a half-written file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens `path`; a missing or unreadable file starts empty
    pub fn open(path: impl Into<PathBuf>) -> QuoteResult<Self> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring corrupt quote store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Quote store {} does not exist yet", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(QuoteError::Io(e)),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, entries: &BTreeMap<String, String>) -> QuoteResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)?;
        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;
        temp_file
            .persist(&self.path)
            .map_err(|e| QuoteError::Io(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> QuoteResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| QuoteError::Store("file store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> QuoteResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| QuoteError::Store("file store lock poisoned".to_string()))?;

        // Memory only changes once the file holds the new map
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value);
        self.write_atomic(&updated)?;
        *entries = updated;
        Ok(())
    }
}
