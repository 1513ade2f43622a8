use async_trait::async_trait;
use taskboard_core::assignee::Assignee;
use taskboard_core::board::Board;
use taskboard_core::column::ColumnId;
use taskboard_core::seed;
use taskboard_core::task::{CreateTask, Task, UpdateTask};
use taskboard_core::BoardError;
use taskboard_store::StoreError;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<BoardError> for ServiceError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::Validation(msg) => ServiceError::Validation(msg),
            BoardError::NotFound(msg) => ServiceError::NotFound(msg),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidKey(_) => ServiceError::Validation(e.to_string()),
            _ => ServiceError::StorageUnavailable(e.to_string()),
        }
    }
}

/// Board and assignees as loaded for display.
///
/// When storage cannot be read the snapshot holds an empty board and no
/// assignees, and `error` says why.
#[derive(Debug)]
pub struct BoardSnapshot {
    pub board: Board,
    pub assignees: Vec<Assignee>,
    pub error: Option<ServiceError>,
}

impl BoardSnapshot {
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Board operations as the presentation layer sees them.
///
/// Every mutation is one read-modify-write of the whole board. Callers
/// reload the board after a mutation; nothing is pushed to them.
#[async_trait]
pub trait BoardService: Send + Sync {
    // -- Reads --
    async fn load_board(&self) -> Result<Board, ServiceError>;
    async fn load_assignees(&self) -> Result<Vec<Assignee>, ServiceError>;

    // -- Assignees --
    async fn save_assignees(&self, assignees: &[Assignee]) -> Result<(), ServiceError>;

    // -- Tasks --
    async fn create_task(&self, draft: &CreateTask) -> Result<Task, ServiceError>;
    async fn update_task(&self, id: &str, update: &UpdateTask) -> Result<Task, ServiceError>;

    /// Returns `false` when no task has `id`.
    async fn delete_task(&self, id: &str) -> Result<bool, ServiceError>;

    /// Move a task to the end of `column`. An unknown task id yields
    /// `Ok(false)` rather than an error.
    async fn move_task(&self, id: &str, column: ColumnId) -> Result<bool, ServiceError> {
        match self.update_task(id, &UpdateTask::move_to(column)).await {
            Ok(_) => Ok(true),
            Err(ServiceError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Load board and assignees together, degrading to empty data instead
    /// of failing.
    async fn load_snapshot(&self) -> BoardSnapshot {
        let (board, assignees) = tokio::join!(self.load_board(), self.load_assignees());
        match (board, assignees) {
            (Ok(board), Ok(assignees)) => BoardSnapshot {
                board,
                assignees,
                error: None,
            },
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "loading board failed, showing empty board");
                BoardSnapshot {
                    board: Board::empty(seed::BOARD_ID, seed::BOARD_TITLE),
                    assignees: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }
}
