use crate::shared::exceptions::exception::ClientError;
use validator::ValidationErrors;

/// Validate body error.
///
/// Flattens the field errors reported by `validator` into a single `ClientError::Validation`,
/// keeping the declared messages in field order (`title` before `description`).
///
/// # Parameters
///
/// - `errors`: Errors returned by `Validate::validate`.
/// - `field_order`: Fields in the order the messages should appear.
///
/// # Returns
///
/// Returns a `ClientError::Validation` whose message joins every failing field.
///
/// # Example
///
/// ```rust
/// use post_wall::modules::post::post_dtos::CreatePostDTO;
/// use post_wall::utils::validate_body_error::validate_body_error;
/// use validator::Validate;
///
/// let body = CreatePostDTO::new("", "");
/// let error = validate_body_error(&body.validate().unwrap_err(), &["title", "description"]);
///
/// assert_eq!(error.to_string(), "Title is required. Description is required.");
/// ```
pub fn validate_body_error(errors: &ValidationErrors, field_order: &[&str]) -> ClientError {
    let mut messages: Vec<(usize, String)> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        let field: &str = field.as_ref();
        let position = field_order
            .iter()
            .position(|ordered| *ordered == field)
            .unwrap_or(field_order.len());

        for error in field_errors.iter() {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => format!("Field `{}` is invalid ({}).", field, error.code),
            };
            messages.push((position, message));
        }
    }

    messages.sort_by_key(|(position, _)| *position);

    ClientError::Validation(
        messages
            .into_iter()
            .map(|(_, message)| message)
            .collect::<Vec<String>>()
            .join(" "),
    )
}
