use reqwest::StatusCode;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    /// Non-2xx response from a remote API. `body` is the raw error-body
    /// text exactly as the server sent it, empty when unreadable.
    #[error("API error {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl ClientError {
    /// Text to surface in an `Error` view state. The server's own error
    /// body takes precedence when present.
    pub fn display_text(&self) -> String {
        match self {
            ClientError::Status { status, body } => {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body.clone()
                }
            }
            other => other.to_string(),
        }
    }
}
