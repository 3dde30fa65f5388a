pub mod filter;
pub mod priority;
pub mod types;

pub use filter::TaskFilter;
pub use priority::{priority_at, Priority};
pub use types::{format_due_date, parse_due_date, NewTask, Task, TaskId};
