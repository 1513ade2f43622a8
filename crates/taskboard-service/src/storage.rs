use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use taskboard_core::assignee::Assignee;
use taskboard_core::board::Board;
use taskboard_core::seed;
use taskboard_store::{KeyValueStore, StoreHandle, ASSIGNEES_KEY, BOARD_KEY};
use tracing::{debug, info};

use crate::ServiceError;

/// Loads and saves the board and assignee records, seeding defaults the
/// first time either record is read.
#[derive(Clone)]
pub struct BoardStorage {
    handle: Arc<StoreHandle>,
}

impl BoardStorage {
    pub fn new(handle: Arc<StoreHandle>) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &Arc<StoreHandle> {
        &self.handle
    }

    pub async fn load_board(&self) -> Result<Board, ServiceError> {
        let store = self.handle.get().await?;
        match store.get_opt(BOARD_KEY).await? {
            Some(bytes) => decode(BOARD_KEY, &bytes),
            None => {
                let board = seed::default_board(Utc::now());
                write(store.as_ref(), BOARD_KEY, &board).await?;
                info!(tasks = board.task_count(), "seeded default board");
                Ok(board)
            }
        }
    }

    pub async fn save_board(&self, board: &Board) -> Result<(), ServiceError> {
        let store = self.handle.get().await?;
        write(store.as_ref(), BOARD_KEY, board).await
    }

    pub async fn load_assignees(&self) -> Result<Vec<Assignee>, ServiceError> {
        let store = self.handle.get().await?;
        match store.get_opt(ASSIGNEES_KEY).await? {
            Some(bytes) => decode(ASSIGNEES_KEY, &bytes),
            None => {
                let assignees = seed::default_assignees();
                write(store.as_ref(), ASSIGNEES_KEY, &assignees).await?;
                info!(count = assignees.len(), "seeded default assignees");
                Ok(assignees)
            }
        }
    }

    pub async fn save_assignees(&self, assignees: &[Assignee]) -> Result<(), ServiceError> {
        let mut seen = HashSet::new();
        if let Some(dup) = assignees.iter().find(|a| !seen.insert(a.id.as_str())) {
            return Err(ServiceError::Validation(format!(
                "duplicate assignee id {}",
                dup.id
            )));
        }
        let store = self.handle.get().await?;
        write(store.as_ref(), ASSIGNEES_KEY, assignees).await
    }
}

fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(bytes)
        .map_err(|e| ServiceError::StorageUnavailable(format!("decode {key}: {e}")))
}

async fn write<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), ServiceError> {
    let data = serde_json::to_vec(value)
        .map_err(|e| ServiceError::StorageUnavailable(format!("encode {key}: {e}")))?;
    debug!(key, bytes = data.len(), "writing record");
    store.set(key, Bytes::from(data)).await?;
    Ok(())
}
