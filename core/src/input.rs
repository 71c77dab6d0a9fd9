use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input box is EMPTY, please enter a task to add")]
    EmptyName,
}

/// Checks a name typed into the new-task form.
///
/// Only the empty string is rejected; whitespace is kept verbatim.
pub fn validate_new_name(name: &str) -> Result<&str, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name)
}
