use thiserror::Error;

/// Failure reported by the host for a persistence call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// A failed user action. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Your reply could not be posted. Please try again.")]
    Reply(#[source] RemoteError),

    #[error("Your edit could not be saved, so the previous text was restored.")]
    Edit(#[source] RemoteError),

    #[error("The comment could not be deleted. Please refresh the page.")]
    Delete(#[source] RemoteError),
}

impl ActionError {
    /// The underlying remote failure.
    pub fn remote(&self) -> &RemoteError {
        match self {
            ActionError::Reply(e) | ActionError::Edit(e) | ActionError::Delete(e) => e,
        }
    }
}
