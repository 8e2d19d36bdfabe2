use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("HTTP error")]
    Http(#[from] reqwest::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("API token is not configured")]
    MissingApiToken,

    #[error("Area ID is not configured")]
    MissingAreaId,

    #[error("Task name is required")]
    MissingTaskName,

    #[error("Invalid API token. Check the configured token.")]
    InvalidToken,

    #[error("Failed to create task ({status}): {body}")]
    Api { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
