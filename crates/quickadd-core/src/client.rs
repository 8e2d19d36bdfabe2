//! Task submission to the Lunatask API.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use crate::error::{CoreError, Result};
use crate::models::{CreatedTask, NewTask, TaskForm};

pub const DEFAULT_API_URL: &str = "https://api.lunatask.app/v1";

/// Anything that can accept a new task.
#[async_trait]
pub trait TaskSink {
    async fn create_task(&self, task: &NewTask) -> Result<CreatedTask>;
}

/// HTTP client for `POST /tasks`, authenticated with a bearer token.
#[derive(Debug, Clone)]
pub struct LunataskClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl LunataskClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CoreError::MissingApiToken);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }
}

#[async_trait]
impl TaskSink for LunataskClient {
    async fn create_task(&self, task: &NewTask) -> Result<CreatedTask> {
        let url = self.tasks_url();
        info!("Creating task via {} (source_id {})", url, task.source_id);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .json(task)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Task API answered {}: {}", status, body);

        interpret_response(status, &body)
    }
}

#[derive(Deserialize)]
struct TaskEnvelope {
    task: CreatedTask,
}

/// Map a raw API response onto the submission outcome.
///
/// `204 No Content` is how the API reports that a task with the same
/// `source_id` already exists, so it counts as success without an id.
pub fn interpret_response(status: u16, body: &str) -> Result<CreatedTask> {
    match status {
        204 => Ok(CreatedTask::default()),
        200..=299 => match serde_json::from_str::<TaskEnvelope>(body) {
            Ok(envelope) => Ok(envelope.task),
            Err(e) => {
                warn!("Task created but response was not understood: {}", e);
                Ok(CreatedTask::default())
            }
        },
        401 => Err(CoreError::InvalidToken),
        _ => Err(CoreError::Api {
            status,
            body: body.to_string(),
        }),
    }
}

/// Build the request for `form` and hand it to `sink`.
pub async fn submit(
    sink: &(impl TaskSink + Sync),
    form: &TaskForm,
    area_id: &str,
    now: NaiveDateTime,
) -> Result<(NewTask, CreatedTask)> {
    let task = NewTask::from_form(form, area_id, now)?;
    let created = sink.create_task(&task).await?;
    Ok((task, created))
}
