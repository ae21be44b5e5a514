//! On-disk prompt→completion cache.
//!
//! The cache is a single JSON file holding a flat string-to-string map, keyed
//! by the exact prompt text. It is reloaded from disk on every access and
//! rewritten in full on every update (last write wins). Nothing is held in
//! memory across calls.
//!
//! Cache faults never propagate: a missing file is an empty cache, a corrupt
//! or unreadable file degrades to an empty cache, and a failed write is
//! swallowed. Each outcome is reported as a [`CacheHealth`] value so callers
//! and tests can observe the degraded path instead of relying on silent
//! catches.
//!
//! Known hazard: the file has no locking discipline. Concurrent processes
//! doing read-modify-write can lose updates (last writer wins, no merge).
//! The gateway assumes single-process use.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Whether a cache operation completed against real on-disk state or had to
/// degrade (corrupt file on read, swallowed failure on write).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheHealth {
    Clean,
    Degraded,
}

/// The result of loading the cache file: the full entry map plus the health
/// of the load. A missing file is a `Clean` empty cache.
#[derive(Debug)]
pub struct CacheSnapshot {
    pub entries: HashMap<String, String>,
    pub health: CacheHealth,
}

/// File-backed prompt cache with full-file, last-write-wins persistence.
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole cache file.
    ///
    /// Never fails: a missing file yields an empty `Clean` snapshot, while an
    /// unreadable or unparseable file yields an empty `Degraded` one.
    pub fn load(&self) -> CacheSnapshot {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(entries) => CacheSnapshot {
                    entries,
                    health: CacheHealth::Clean,
                },
                Err(e) => {
                    warn!(path = %self.path.display(), "Cache file is corrupt, starting with empty cache: {e}");
                    CacheSnapshot {
                        entries: HashMap::new(),
                        health: CacheHealth::Degraded,
                    }
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CacheSnapshot {
                entries: HashMap::new(),
                health: CacheHealth::Clean,
            },
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to read cache file, starting with empty cache: {e}");
                CacheSnapshot {
                    entries: HashMap::new(),
                    health: CacheHealth::Degraded,
                }
            }
        }
    }

    /// Insert or overwrite one entry and rewrite the whole file.
    ///
    /// Loads the current on-disk map fresh (missing or corrupt counts as
    /// empty), applies the update, and writes the full map back. Any write
    /// failure is swallowed and reported as `Degraded` — a cache fault must
    /// never fail the caller's completion.
    pub fn insert(&self, prompt: &str, response: &str) -> CacheHealth {
        let mut entries = self.load().entries;
        entries.insert(prompt.to_string(), response.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(path = %self.path.display(), "Failed to create cache directory: {e}");
                    return CacheHealth::Degraded;
                }
            }
        }

        let data = match serde_json::to_string(&entries) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to serialize cache: {e}");
                return CacheHealth::Degraded;
            }
        };
        match std::fs::write(&self.path, data) {
            Ok(()) => CacheHealth::Clean,
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to save cache: {e}");
                CacheHealth::Degraded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_clean_and_empty() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("llm_cache.json"));
        let snapshot = cache.load();
        assert!(snapshot.entries.is_empty());
        assert_eq!(snapshot.health, CacheHealth::Clean);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("llm_cache.json");
        std::fs::write(&path, "{not json").unwrap();
        let snapshot = FileCache::new(&path).load();
        assert!(snapshot.entries.is_empty());
        assert_eq!(snapshot.health, CacheHealth::Degraded);
    }

    #[test]
    fn test_insert_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("llm_cache.json"));
        assert_eq!(cache.insert("hello", "world"), CacheHealth::Clean);

        let snapshot = cache.load();
        assert_eq!(snapshot.health, CacheHealth::Clean);
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries.get("hello").map(String::as_str), Some("world"));
    }

    #[test]
    fn test_last_write_wins() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("llm_cache.json"));
        cache.insert("prompt", "first");
        cache.insert("prompt", "second");

        let snapshot = cache.load();
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(
            snapshot.entries.get("prompt").map(String::as_str),
            Some("second")
        );
    }

    #[test]
    fn test_insert_preserves_existing_entries() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("llm_cache.json"));
        cache.insert("a", "1");
        cache.insert("b", "2");

        let snapshot = cache.load();
        assert_eq!(snapshot.entries.len(), 2);
        assert_eq!(snapshot.entries.get("a").map(String::as_str), Some("1"));
        assert_eq!(snapshot.entries.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_insert_over_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("llm_cache.json");
        std::fs::write(&path, "garbage").unwrap();

        let cache = FileCache::new(&path);
        assert_eq!(cache.insert("hello", "world"), CacheHealth::Clean);

        let snapshot = cache.load();
        assert_eq!(snapshot.health, CacheHealth::Clean);
        assert_eq!(snapshot.entries.len(), 1);
    }

    #[test]
    fn test_unwritable_path_degrades() {
        let dir = tempdir().unwrap();
        // A regular file where the parent directory should be makes the
        // write (and the create_dir_all) fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let cache = FileCache::new(blocker.join("llm_cache.json"));
        assert_eq!(cache.insert("hello", "world"), CacheHealth::Degraded);
    }
}
