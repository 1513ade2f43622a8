use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use taskboard_core::assignee::Assignee;
use taskboard_core::board::Board;
use taskboard_core::task::{CreateTask, Task, UpdateTask};
use taskboard_store::{StoreConfig, StoreHandle};
use tracing::{debug, info};

use crate::{BoardService, BoardStorage, ServiceError};

/// Repository over the local store.
///
/// Each mutation loads the board, applies the change in memory and writes
/// the whole board back. There is no locking: two writers racing on the
/// same store lose one of the writes.
pub struct LocalService {
    storage: BoardStorage,
}

impl LocalService {
    pub fn new(storage: BoardStorage) -> Self {
        Self { storage }
    }

    pub fn from_config(config: StoreConfig) -> Self {
        Self::new(BoardStorage::new(Arc::new(StoreHandle::new(config))))
    }

    pub fn storage(&self) -> &BoardStorage {
        &self.storage
    }
}

#[async_trait]
impl BoardService for LocalService {
    async fn load_board(&self) -> Result<Board, ServiceError> {
        self.storage.load_board().await
    }

    async fn load_assignees(&self) -> Result<Vec<Assignee>, ServiceError> {
        self.storage.load_assignees().await
    }

    async fn save_assignees(&self, assignees: &[Assignee]) -> Result<(), ServiceError> {
        self.storage.save_assignees(assignees).await
    }

    async fn create_task(&self, draft: &CreateTask) -> Result<Task, ServiceError> {
        let mut board = self.storage.load_board().await?;
        let task = board.create_task(draft.clone(), Utc::now())?;
        self.storage.save_board(&board).await?;
        info!(task_id = %task.id, column = task.column.as_str(), "created task");
        Ok(task)
    }

    async fn update_task(&self, id: &str, update: &UpdateTask) -> Result<Task, ServiceError> {
        let mut board = self.storage.load_board().await?;
        let previous = board.find_task(id).map(|t| t.column);
        let task = board.update_task(id, update, Utc::now())?;
        self.storage.save_board(&board).await?;
        match previous {
            Some(from) if from != task.column => info!(
                task_id = %task.id,
                from = from.as_str(),
                to = task.column.as_str(),
                "moved task"
            ),
            _ => debug!(task_id = %task.id, "updated task"),
        }
        Ok(task)
    }

    async fn delete_task(&self, id: &str) -> Result<bool, ServiceError> {
        let mut board = self.storage.load_board().await?;
        match board.remove_task(id) {
            Some(task) => {
                self.storage.save_board(&board).await?;
                info!(task_id = %task.id, "deleted task");
                Ok(true)
            }
            None => {
                debug!(task_id = id, "delete ignored, no such task");
                Ok(false)
            }
        }
    }
}
