//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": … }` acknowledgement body.
///
/// Success acknowledgements and error responses share this shape; the
/// mobile client reads `message` directly.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
