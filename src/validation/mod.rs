//! Input validation for task creation and updates.
//!
//! Each service operation runs exactly one validation pass from this module
//! before touching the store. Validators return the normalized values to
//! persist (trimmed title, parsed status) so handlers never re-interpret raw
//! input.

mod constants;
mod task;

pub use constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
pub use task::{
    validate_new_task, validate_replace_task, validate_status_filter, validate_update_task,
};

/// Validation error with details about what failed.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The message already names the field, per the error contract.
        write!(f, "{}", self.message)
    }
}

/// Result of validation - either the normalized value or a list of errors.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;
