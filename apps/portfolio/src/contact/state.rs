use serde::Serialize;

/// Shown whenever the relay gives no usable reason for a failure.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to send your message. Please try again later.";

/// Lifecycle of one contact form submission.
///
/// Idle -> Submitting -> Succeeded | Failed. A failed form can be submitted
/// again; a succeeded one goes back to Idle when the visitor asks to send
/// another message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
