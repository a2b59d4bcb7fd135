pub mod dto;
pub mod task_service;

pub use dto::Stats;
pub use task_service::TaskService;
