//! Error types for the lesson watch client

/// A form field problem caught before any request is sent.
///
/// The display text is what the user sees in the error toast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("User ID, password and date are required")]
    MissingCredentials,

    #[error("Select at least one lesson to watch")]
    EmptySelection,

    #[error("Enter an email address for notifications")]
    MissingEmailAddress,

    #[error("Enter a webhook token for notifications")]
    MissingWebhookToken,
}

/// Errors that can occur in the lesson watch client
#[derive(Debug, thiserror::Error)]
pub enum LessonWatchError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("monitoring did not start")]
    NotStarted,

    #[error("monitoring status unavailable")]
    StatusUnavailable,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lesson watch operations
pub type Result<T> = std::result::Result<T, LessonWatchError>;
