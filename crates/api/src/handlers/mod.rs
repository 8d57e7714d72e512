//! Request handlers, one module per resource.

pub mod auth;
pub mod profile;
pub mod reviews;

use gamefinder_core::error::CoreError;

use crate::error::AppError;

/// Extract a required string field, rejecting absent and empty values with
/// the route's validation message.
pub(crate) fn required<'a>(field: &'a Option<String>, message: &str) -> Result<&'a str, AppError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Core(CoreError::Validation(message.into()))),
    }
}
