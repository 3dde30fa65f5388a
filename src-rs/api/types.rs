use crate::task::{NewTask, Task, TaskId};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("http {status}: {body}")]
    Status { status: u16, body: String },
}

/// The task collection endpoint. Success means a 2xx answer; response
/// bodies of mutations are not interpreted.
pub trait TaskApi {
    fn list(&self) -> Result<Vec<Task>, ApiError>;
    fn create(&self, task: &NewTask) -> Result<(), ApiError>;
    fn update(&self, task: &Task) -> Result<(), ApiError>;
    fn delete(&self, id: &TaskId) -> Result<(), ApiError>;
}
