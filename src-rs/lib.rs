pub mod client;
pub mod config;
pub mod pagination;

#[path = "task/lib.rs"]
pub mod task;
#[path = "api/lib.rs"]
pub mod api;
#[path = "view/lib.rs"]
pub mod view;

pub use client::{FormMode, TaskClient};
pub use config::ClientConfig;
pub use task::{Priority, Task, TaskFilter, TaskId};
pub use api::{ApiError, HttpTaskApi, TaskApi};
pub use view::{FilterForm, MarkupView, TaskCard, TaskForm, TaskView};
