/// Domain-level error taxonomy.
///
/// Variants carry the user-facing message (in the app's language); the
/// HTTP layer decides the status code. Ownership mismatches on reviews are
/// reported as `NotFound`, never as a distinct "forbidden" kind, so callers
/// cannot probe which reviews exist.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
