pub mod error_construct;
pub mod validate_body_error;
