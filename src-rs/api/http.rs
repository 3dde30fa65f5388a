use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::ClientConfig;
use crate::task::{NewTask, Task, TaskId};

use super::types::{ApiError, TaskApi};

pub struct HttpTaskApi {
    pub base_url: String,
    client: Client,
}

impl HttpTaskApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url.trim_end_matches('/'))
    }

    fn item_url(&self, id: &TaskId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

impl TaskApi for HttpTaskApi {
    fn list(&self) -> Result<Vec<Task>, ApiError> {
        let resp = self.client.get(self.collection_url()).send()?;
        let resp = ensure_success(resp)?;
        let items = resp.json::<Vec<serde_json::Value>>()?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<Task>(item.clone()) {
                Ok(task) => out.push(task),
                Err(err) => {
                    tracing::warn!(error = %err, record = %item, "skipping unreadable task");
                }
            }
        }
        Ok(out)
    }

    fn create(&self, task: &NewTask) -> Result<(), ApiError> {
        let resp = self.client.post(self.collection_url()).json(task).send()?;
        ensure_success(resp).map(|_| ())
    }

    fn update(&self, task: &Task) -> Result<(), ApiError> {
        let resp = self.client.put(self.item_url(&task.id)).json(task).send()?;
        ensure_success(resp).map(|_| ())
    }

    fn delete(&self, id: &TaskId) -> Result<(), ApiError> {
        let resp = self.client.delete(self.item_url(id)).send()?;
        ensure_success(resp).map(|_| ())
    }
}

fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().unwrap_or_default();
    Err(ApiError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpTaskApi {
        HttpTaskApi::new(&ClientConfig {
            base_url: base.to_string(),
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[test]
    fn builds_urls_without_double_slashes() {
        let api = api("http://localhost:3000/");
        assert_eq!(api.collection_url(), "http://localhost:3000/tasks");
        assert_eq!(
            api.item_url(&TaskId::Number(4)),
            "http://localhost:3000/tasks/4"
        );
        assert_eq!(
            api.item_url(&TaskId::Text("ab12".to_string())),
            "http://localhost:3000/tasks/ab12"
        );
    }
}
