use crate::shared::exceptions::exception::ClientError;

/// Operation a failure happened in, used to pick the message prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostAction {
    Fetch,
    Create,
    Delete,
}

impl PostAction {
    pub fn failure_message(&self) -> &'static str {
        match self {
            PostAction::Fetch => "Failed to fetch posts",
            PostAction::Create => "Failed to create post",
            PostAction::Delete => "Failed to delete post",
        }
    }
}

/// Construct the message shown in the error slot.
///
/// HTTP failures use the bare action message; transport and body failures append
/// their cause. Validation errors already carry a user-facing message and are returned as is.
///
/// # Parameters
///
/// - `action`: The operation that failed.
/// - `error`: The error returned by the API client or the form validation.
///
/// # Returns
///
/// Returns the human-readable message for the shared error slot.
///
/// # Example
///
/// ```rust
/// use post_wall::shared::exceptions::exception::ClientError;
/// use post_wall::utils::error_construct::{error_construct, PostAction};
/// use reqwest::StatusCode;
///
/// let message = error_construct(
///     PostAction::Fetch,
///     &ClientError::Http(StatusCode::INTERNAL_SERVER_ERROR),
/// );
/// assert_eq!(message, "Failed to fetch posts");
/// ```
pub fn error_construct(action: PostAction, error: &ClientError) -> String {
    match error {
        ClientError::Http(_) => action.failure_message().to_string(),
        ClientError::Validation(message) => message.clone(),
        ClientError::Network(_) | ClientError::Parse(_) | ClientError::Config(_) => {
            format!("{}: {}", action.failure_message(), error)
        }
    }
}
