use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use reader_logging::reader_warn;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use thiserror::Error;

/// The synchronized-storage collaborator behind the settings bridge: plain
/// key/value reads and writes, no schema knowledge.
pub trait SyncStorage: Send + Sync {
    /// Returns the stored values for whichever of `keys` are present.
    fn get(&self, keys: &[String]) -> Map<String, Value>;
    /// Merges `data` into the store, best effort.
    fn set(&self, data: Map<String, Value>);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<Map<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: Map<String, Value>) -> Self {
        Self {
            values: Mutex::new(values),
        }
    }
}

impl SyncStorage for MemoryStorage {
    fn get(&self, keys: &[String]) -> Map<String, Value> {
        let values = match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        keys.iter()
            .filter_map(|key| values.get(key).map(|v| (key.clone(), v.clone())))
            .collect()
    }

    fn set(&self, data: Map<String, Value>) {
        let mut values = match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.extend(data);
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON-file-backed store for the privileged context. Writes go through a
/// temp file plus rename so a crash never leaves a half-written settings
/// file; read errors degrade to an empty store rather than failing a load.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> Result<Map<String, Value>, PersistError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Map::new());
            }
            Err(err) => return Err(err.into()),
        };
        let value: Value = serde_json::from_str(&text)?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), PersistError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let text = serde_json::to_string_pretty(map)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace existing file if present to keep determinism.
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        tmp.persist(&self.path).map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}

impl SyncStorage for FileStorage {
    fn get(&self, keys: &[String]) -> Map<String, Value> {
        let stored = match self.read_map() {
            Ok(map) => map,
            Err(err) => {
                reader_warn!("failed to read settings from {:?}: {err}", self.path);
                return Map::new();
            }
        };
        keys.iter()
            .filter_map(|key| stored.get(key).map(|v| (key.clone(), v.clone())))
            .collect()
    }

    fn set(&self, data: Map<String, Value>) {
        let mut stored = self.read_map().unwrap_or_default();
        stored.extend(data);
        if let Err(err) = self.write_map(&stored) {
            reader_warn!("failed to write settings to {:?}: {err}", self.path);
        }
    }
}
