//! Response Envelope Module
//!
//! The fixed-shape JSON structure written by the response helpers:
//! `{"error": <bool>, "message": <string>, "body": <any>}`.

use serde::Serialize;

/// HTTP 200
pub const STATUS_OK: u16 = 200;
/// HTTP 400
pub const STATUS_BAD_REQUEST: u16 = 400;
/// HTTP 403
pub const STATUS_FORBIDDEN: u16 = 403;
/// HTTP 500
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Response envelope
///
/// Fields serialize in declaration order: `error`, `message`, `body`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T: Serialize> {
    /// Whether the response reports a failure
    pub error: bool,
    /// Human-readable message
    pub message: String,
    /// Arbitrary payload
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    /// Create an envelope with an explicit error flag
    pub fn new(error: bool, message: impl Into<String>, body: T) -> Self {
        Self {
            error,
            message: message.into(),
            body,
        }
    }

    /// Create an envelope reporting success
    pub fn success(message: impl Into<String>, body: T) -> Self {
        Self::new(false, message, body)
    }

    /// Create an envelope reporting failure
    pub fn failure(message: impl Into<String>, body: T) -> Self {
        Self::new(true, message, body)
    }
}
