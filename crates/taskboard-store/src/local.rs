use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::{KeyValueStore, StoreError};

/// Filesystem backend: one file per key under a base directory.
pub struct LocalStore {
    base_dir: PathBuf,
}

impl LocalStore {
    /// Open the store, creating `base_dir` if needed.
    pub async fn open(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        tokio::fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| StoreError::Unavailable(format!("mkdir {}: {e}", base_dir.display())))?;
        debug!(dir = %base_dir.display(), "opened local store");
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(key))
    }
}

#[async_trait]
impl KeyValueStore for LocalStore {
    async fn set(&self, key: &str, value: Bytes) -> Result<(), StoreError> {
        let path = self.resolve(key)?;
        // Write beside the target and rename so readers never see a torn record.
        let tmp = self.base_dir.join(format!(".{key}.tmp"));
        tokio::fs::write(&tmp, &value)
            .await
            .map_err(|e| StoreError::Unavailable(format!("write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::Unavailable(format!("rename {}: {e}", path.display())))?;
        debug!(key, bytes = value.len(), "stored record");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, StoreError> {
        let path = self.resolve(key)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(StoreError::Unavailable(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.resolve(key)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::Unavailable(format!("exists {}: {e}", path.display())))
    }
}
