use thiserror::Error;

/// Failure of one submission.
///
/// The view treats every variant the same way ("request failed"); the
/// variants only make the log line say what went wrong.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed: service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            RequestError::Decode(_) => None,
        }
    }
}
