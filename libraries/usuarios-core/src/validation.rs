//! The `nombre` validation rule shared by create and update.
//!
//! Rules are checked in order and only the first failure is reported:
//! the field must be present, must be a string, must not be empty, and
//! must be at least [`MIN_NAME_LENGTH`] characters long, counted in UTF-16
//! code units as browsers and JavaScript clients count them.

use crate::error::{DirectoryError, Result};
use serde_json::Value;

/// Field name used in request bodies and error messages
pub const NAME_FIELD: &str = "nombre";

/// Shortest accepted name, in UTF-16 code units
pub const MIN_NAME_LENGTH: usize = 3;

/// Validate a raw `nombre` value taken from a request body.
///
/// `None` means the field was absent. On success the validated name is
/// returned as an owned string.
pub fn validate_name(value: Option<&Value>) -> Result<String> {
    let value = value.ok_or_else(|| {
        DirectoryError::invalid_input(format!("\"{NAME_FIELD}\" is required"))
    })?;

    let Value::String(name) = value else {
        return Err(DirectoryError::invalid_input(format!(
            "\"{NAME_FIELD}\" must be a string"
        )));
    };

    if name.is_empty() {
        return Err(DirectoryError::invalid_input(format!(
            "\"{NAME_FIELD}\" is not allowed to be empty"
        )));
    }

    if name.encode_utf16().count() < MIN_NAME_LENGTH {
        return Err(DirectoryError::invalid_input(format!(
            "\"{NAME_FIELD}\" length must be at least {MIN_NAME_LENGTH} characters long"
        )));
    }

    Ok(name.clone())
}
