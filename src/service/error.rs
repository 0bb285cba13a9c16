use thiserror::Error;

/// Why an analysis request did not produce a result. The workflow collapses
/// every variant into the same failed state; the detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("could not reach the analysis service: {0}")]
    Transport(String),
    #[error("analysis service answered with HTTP {0}")]
    Status(u16),
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None if err.is_decode() => Self::MalformedResponse(err.to_string()),
            None => Self::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
