pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{StoreError, TaskError};
pub use input::{expand_key, parse_args, ParsedInput};
pub use model::task::{Priority, Task};
pub use repository::{FileTaskRepository, TaskRepository};
pub use service::dto::Stats;
pub use service::task_service::TaskService;
pub use time::parse_due_date;
