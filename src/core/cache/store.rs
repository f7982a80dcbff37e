use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result, anyhow};
use tempfile::NamedTempFile;

use super::ProjectCache;

const CACHE_DIR_NAME: &str = "lokey";
const CACHE_FILE_NAME: &str = "keys.json";

/// Durable storage for the project cache between runs.
pub trait CacheStore: Send + Sync {
    /// Restore the last saved snapshot. A store that has never been written
    /// returns an empty cache.
    fn load(&self) -> Result<ProjectCache>;

    fn save(&self, cache: &ProjectCache) -> Result<()>;
}

/// JSON snapshot in the user's cache directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<cache dir>/lokey/keys.json`, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CACHE_DIR_NAME)
            .join(CACHE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl CacheStore for JsonFileStore {
    fn load(&self) -> Result<ProjectCache> {
        if !self.path.exists() {
            return Ok(ProjectCache::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cache file: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse cache file: {}", self.path.display()))
    }

    fn save(&self, cache: &ProjectCache) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create cache directory: {}", dir.display()))?;

        // Write beside the target and rename, so an interrupted save keeps the old snapshot.
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut tmp, cache).context("Failed to serialize cache")?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to write cache file: {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Arc<Mutex<Option<ProjectCache>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<ProjectCache> {
        self.snapshot.lock().ok().and_then(|guard| guard.clone())
    }
}

impl CacheStore for MemoryStore {
    fn load(&self) -> Result<ProjectCache> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| anyhow!("Cache store lock poisoned"))?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, cache: &ProjectCache) -> Result<()> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| anyhow!("Cache store lock poisoned"))?;
        *guard = Some(cache.clone());
        Ok(())
    }
}
