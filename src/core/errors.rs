use thiserror::Error;

/// Every variant's `Display` text is what the user sees.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Please select at least one symptom")]
    EmptySelection,

    #[error("A prediction request is already in progress")]
    SubmissionPending,

    #[error("Cannot reach the prediction service")]
    Unreachable(#[source] Box<reqwest::Error>),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response from the prediction service: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to start background runtime: {0}")]
    Runtime(String),
}

impl ClientError {
    /// Errors produced before any request leaves the client.
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::EmptySelection | ClientError::SubmissionPending)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(error: std::io::Error) -> Self {
        ClientError::Io(Box::new(error))
    }
}

/// Failures after a response arrived are decode errors; everything else means
/// the service was never reached.
impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_body() || error.is_decode() {
            ClientError::Decode(error.to_string())
        } else {
            ClientError::Unreachable(Box::new(error))
        }
    }
}
