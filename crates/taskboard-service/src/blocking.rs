use taskboard_core::assignee::Assignee;
use taskboard_core::board::Board;
use taskboard_core::column::ColumnId;
use taskboard_core::task::{CreateTask, Task, UpdateTask};
use tokio::runtime::{Builder, Runtime};

use crate::{BoardService, BoardSnapshot, LocalService, ServiceError};

/// Blocking wrapper around a `BoardService`.
///
/// Owns a current-thread tokio runtime and uses `block_on()` for each call.
/// Designed for a single synchronous UI thread; calling it from inside
/// another tokio runtime panics.
pub struct BlockingService<S = LocalService> {
    inner: S,
    rt: Runtime,
}

impl<S: BoardService> BlockingService<S> {
    pub fn new(inner: S) -> std::io::Result<Self> {
        let rt = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, rt })
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn load_board(&self) -> Result<Board, ServiceError> {
        self.rt.block_on(self.inner.load_board())
    }

    pub fn load_assignees(&self) -> Result<Vec<Assignee>, ServiceError> {
        self.rt.block_on(self.inner.load_assignees())
    }

    pub fn load_snapshot(&self) -> BoardSnapshot {
        self.rt.block_on(self.inner.load_snapshot())
    }

    pub fn save_assignees(&self, assignees: &[Assignee]) -> Result<(), ServiceError> {
        self.rt.block_on(self.inner.save_assignees(assignees))
    }

    pub fn create_task(&self, draft: &CreateTask) -> Result<Task, ServiceError> {
        self.rt.block_on(self.inner.create_task(draft))
    }

    pub fn update_task(&self, id: &str, update: &UpdateTask) -> Result<Task, ServiceError> {
        self.rt.block_on(self.inner.update_task(id, update))
    }

    pub fn delete_task(&self, id: &str) -> Result<bool, ServiceError> {
        self.rt.block_on(self.inner.delete_task(id))
    }

    pub fn move_task(&self, id: &str, column: ColumnId) -> Result<bool, ServiceError> {
        self.rt.block_on(self.inner.move_task(id, column))
    }
}
