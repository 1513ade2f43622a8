mod blocking;
mod local;
mod storage;
mod traits;

pub use blocking::BlockingService;
pub use local::LocalService;
pub use storage::BoardStorage;
pub use traits::{BoardService, BoardSnapshot, ServiceError};
