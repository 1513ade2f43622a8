pub mod assignee;
pub mod attachment;
pub mod board;
pub mod column;
pub mod error;
pub mod filter;
pub mod label;
pub mod seed;
pub mod subtask;
pub mod task;

pub use assignee::Assignee;
pub use attachment::Attachment;
pub use board::Board;
pub use column::{Column, ColumnId};
pub use error::BoardError;
pub use filter::{FilterSpec, TaskCounts};
pub use label::TaskLabel;
pub use subtask::Subtask;
pub use task::{CreateTask, Priority, Task, UpdateTask};
