pub mod http;
pub mod types;

pub use http::HttpTaskApi;
pub use types::{ApiError, TaskApi};
