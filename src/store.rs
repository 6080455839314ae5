//! Key-value artifact store
//!
//! Models the host platform's artifact store: binary screenshot artifacts
//! under `<label>.png` keys and the final run record under the `RESULT`
//! key. [`FsStore`] is the concrete directory-backed implementation used by
//! the binary; [`MemoryStore`] backs tests and embedded harnesses.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::{Result, StoreError};

/// Key-value sink for run artifacts
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Persist a binary artifact under `key` with the given content type
    async fn put_bytes(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()>;

    /// Persist a structured JSON record under `key`
    async fn put_record(&self, key: &str, record: &serde_json::Value) -> Result<()>;
}

/// Stores shared across a harness and a runner can be passed as `Arc`
#[async_trait]
impl<S: ArtifactStore + ?Sized> ArtifactStore for std::sync::Arc<S> {
    async fn put_bytes(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        (**self).put_bytes(key, bytes, content_type).await
    }

    async fn put_record(&self, key: &str, record: &serde_json::Value) -> Result<()> {
        (**self).put_record(key, record).await
    }
}

/// Directory-backed artifact store
///
/// Binary artifacts land at `<dir>/<key>`; records land at
/// `<dir>/<key>.json` as pretty-printed JSON.
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory this store writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ArtifactStore for FsStore {
    #[instrument(skip(self, bytes))]
    async fn put_bytes(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        let path = self.dir.join(key);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        debug!(key, content_type, size = bytes.len(), "artifact written");
        Ok(())
    }

    #[instrument(skip(self, record))]
    async fn put_record(&self, key: &str, record: &serde_json::Value) -> Result<()> {
        let json = serde_json::to_vec_pretty(record)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        let path = self.dir.join(format!("{key}.json"));
        tokio::fs::write(&path, &json)
            .await
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        debug!(key, "record written");
        Ok(())
    }
}

/// In-memory artifact store for tests and embedded harnesses
#[derive(Default)]
pub struct MemoryStore {
    artifacts: Mutex<HashMap<String, Vec<u8>>>,
    records: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored binary artifact
    pub fn artifact(&self, key: &str) -> Option<Vec<u8>> {
        self.artifacts.lock().unwrap().get(key).cloned()
    }

    /// Keys of all stored binary artifacts, in no particular order
    pub fn artifact_keys(&self) -> Vec<String> {
        self.artifacts.lock().unwrap().keys().cloned().collect()
    }

    /// Fetch a stored JSON record
    pub fn record(&self, key: &str) -> Option<serde_json::Value> {
        self.records.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl ArtifactStore for MemoryStore {
    async fn put_bytes(&self, key: &str, bytes: &[u8], _content_type: &str) -> Result<()> {
        self.artifacts
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn put_record(&self, key: &str, record: &serde_json::Value) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fs_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path()).unwrap();

        store
            .put_bytes("home.png", b"not-really-a-png", "image/png")
            .await
            .unwrap();
        let on_disk = std::fs::read(dir.path().join("home.png")).unwrap();
        assert_eq!(on_disk, b"not-really-a-png");

        let record = serde_json::json!({"status": "passed"});
        store.put_record("RESULT", &record).await.unwrap();
        let raw = std::fs::read_to_string(dir.path().join("RESULT.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["status"], "passed");
    }

    #[tokio::test]
    async fn test_fs_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("artifacts").join("run-1");
        let store = FsStore::new(&nested).unwrap();
        assert_eq!(store.dir(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_fs_store_write_failure_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path()).unwrap();

        // A key pointing into a missing subdirectory cannot be written
        let err = store
            .put_bytes("missing-dir/home.png", b"x", "image/png")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing-dir/home.png"));
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();
        store.put_bytes("a.png", b"abc", "image/png").await.unwrap();
        assert_eq!(store.artifact("a.png").unwrap(), b"abc");
        assert!(store.artifact("b.png").is_none());

        let record = serde_json::json!({"ok": true});
        store.put_record("RESULT", &record).await.unwrap();
        assert_eq!(store.record("RESULT").unwrap()["ok"], true);
    }
}
