mod handle;
mod local;
mod memory;

pub use handle::StoreHandle;
pub use local::LocalStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    /// The key cannot name a record in this backend.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable store of opaque values under string keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: Bytes) -> Result<(), StoreError>;

    /// Read a value. Returns `StoreError::NotFound` if absent.
    async fn get(&self, key: &str) -> Result<Bytes, StoreError>;

    /// Read a value, returning `None` if it does not exist.
    async fn get_opt(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        match self.get(key).await {
            Ok(data) => Ok(Some(data)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_opt(key).await?.is_some())
    }
}

// -- Keys --

/// Record holding the whole board.
pub const BOARD_KEY: &str = "task_board";

/// Record holding the assignee list.
pub const ASSIGNEES_KEY: &str = "assignees";

// -- Configuration --

/// Configuration for the key-value store backend.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Keep records in process memory only; nothing survives a restart.
    pub in_memory: bool,
    /// Directory for the filesystem backend. `None` uses the platform
    /// data directory.
    pub data_dir: Option<String>,
}

impl StoreConfig {
    /// Build from environment variables.
    /// `TASKBOARD_STORE=memory` selects the in-memory backend; otherwise
    /// records live under `TASKBOARD_DATA_DIR` or the default data dir.
    pub fn from_env() -> Self {
        Self {
            in_memory: std::env::var("TASKBOARD_STORE")
                .map(|v| v.eq_ignore_ascii_case("memory"))
                .unwrap_or(false),
            data_dir: std::env::var("TASKBOARD_DATA_DIR").ok(),
        }
    }

    pub fn local(dir: impl Into<String>) -> Self {
        Self {
            in_memory: false,
            data_dir: Some(dir.into()),
        }
    }

    pub fn memory() -> Self {
        Self {
            in_memory: true,
            data_dir: None,
        }
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    let base = if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local/share")
    } else {
        PathBuf::from(".")
    };
    base.join("taskboard")
}

// -- Factory --

/// Open a `KeyValueStore` from configuration.
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    if config.in_memory {
        Ok(Arc::new(MemoryStore::new()))
    } else {
        Ok(Arc::new(LocalStore::open(config.resolved_data_dir()).await?))
    }
}
