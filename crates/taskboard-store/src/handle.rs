use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::{create_store, KeyValueStore, StoreConfig, StoreError};

/// Process-wide access to the configured store.
///
/// The backend is opened on first use, at most once, no matter how many
/// callers race for it. After [`StoreHandle::shutdown`] every access fails
/// with `StoreError::Unavailable`; a closed handle is never reopened.
pub struct StoreHandle {
    config: StoreConfig,
    store: OnceCell<Arc<dyn KeyValueStore>>,
    closed: AtomicBool,
}

impl StoreHandle {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            store: OnceCell::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// A handle around an already-open store.
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config: StoreConfig::default(),
            store: OnceCell::new_with(Some(store)),
            closed: AtomicBool::new(false),
        }
    }

    /// Open the backend now instead of on first access.
    pub async fn init(&self) -> Result<(), StoreError> {
        self.get().await.map(|_| ())
    }

    pub async fn get(&self) -> Result<Arc<dyn KeyValueStore>, StoreError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Unavailable("store has been shut down".into()));
        }
        let store = self
            .store
            .get_or_try_init(|| async {
                info!(in_memory = self.config.in_memory, "opening store");
                create_store(&self.config).await
            })
            .await?;
        Ok(Arc::clone(store))
    }

    pub fn is_open(&self) -> bool {
        self.store.initialized() && !self.closed.load(Ordering::Acquire)
    }

    pub fn shutdown(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            info!("store shut down");
        }
    }
}
