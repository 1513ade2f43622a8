// Shared helpers for the repository integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use taskboard_core::column::ColumnId;
use taskboard_core::task::CreateTask;
use taskboard_service::{BoardStorage, LocalService};
use taskboard_store::{KeyValueStore, MemoryStore, StoreError, StoreHandle};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("taskboard=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A memory store whose reads and writes can be switched off.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn set(&self, key: &str, value: Bytes) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("write {key}: disk gone")));
        }
        self.inner.set(key, value).await
    }

    async fn get(&self, key: &str) -> Result<Bytes, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("read {key}: disk gone")));
        }
        self.inner.get(key).await
    }
}

pub fn service_over(store: Arc<dyn KeyValueStore>) -> LocalService {
    LocalService::new(BoardStorage::new(Arc::new(StoreHandle::with_store(store))))
}

pub fn memory_service() -> LocalService {
    init_tracing();
    service_over(Arc::new(MemoryStore::new()))
}

pub fn flaky_service() -> (LocalService, Arc<FlakyStore>) {
    init_tracing();
    let store = Arc::new(FlakyStore::default());
    (service_over(store.clone()), store)
}

pub fn draft(title: &str, column: ColumnId) -> CreateTask {
    CreateTask::new(title, column)
}
