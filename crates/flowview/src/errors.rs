use thiserror::Error;

/// Failures locating a transcript inside a document received from outside
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("No transcript found: expected a messages array")]
    MissingMessages,

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures talking to the orchestrator
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Response(#[from] serde_json::Error),

    #[error("Could not read attachment: {0}")]
    Attachment(std::io::Error),

    #[error(transparent)]
    Transcript(#[from] TranscriptError),
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
