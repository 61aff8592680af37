//! Responder Module
//!
//! Defines the seam between the response helpers and whatever HTTP stack the
//! caller runs. The helpers only need one capability from it: write a JSON body
//! with a status code.

use serde_json::Value;
use std::fmt;

/// Content type written alongside every JSON body
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Response error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// The body could not be represented as JSON
    Serialize(String),
    /// The underlying transport failed
    Io(String),
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            ResponseError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ResponseError {}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::Serialize(err.to_string())
    }
}

impl From<std::io::Error> for ResponseError {
    fn from(err: std::io::Error) -> Self {
        ResponseError::Io(err.to_string())
    }
}

/// Trait for request/response contexts that can carry a JSON body
///
/// Implemented by the caller's HTTP integration. `ResponseRecorder` and
/// `HttpResponseWriter` are bundled implementations.
pub trait JsonResponder {
    /// Write `payload` as the response body with the given status code
    ///
    /// # Arguments
    /// * `status` - HTTP status code
    /// * `payload` - JSON document to send
    ///
    /// # Errors
    /// Returns an error if the transport fails
    fn write_json(&mut self, status: u16, payload: Value) -> Result<(), ResponseError>;
}

impl<R: JsonResponder + ?Sized> JsonResponder for &mut R {
    fn write_json(&mut self, status: u16, payload: Value) -> Result<(), ResponseError> {
        (**self).write_json(status, payload)
    }
}

impl<R: JsonResponder + ?Sized> JsonResponder for Box<R> {
    fn write_json(&mut self, status: u16, payload: Value) -> Result<(), ResponseError> {
        (**self).write_json(status, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Capture(Vec<(u16, Value)>);

    impl JsonResponder for Capture {
        fn write_json(&mut self, status: u16, payload: Value) -> Result<(), ResponseError> {
            self.0.push((status, payload));
            Ok(())
        }
    }

    fn send<R: JsonResponder>(mut responder: R, status: u16) {
        responder.write_json(status, Value::Null).unwrap();
    }

    #[test]
    fn test_forwarding_through_references() {
        let mut capture = Capture(Vec::new());
        send(&mut capture, 201);
        assert_eq!(capture.0, vec![(201, Value::Null)]);

        let boxed: Box<dyn JsonResponder> = Box::new(Capture(Vec::new()));
        send(boxed, 204);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ResponseError::Io("broken pipe".to_string()).to_string(),
            "I/O error: broken pipe"
        );
        assert_eq!(
            ResponseError::Serialize("key must be a string".to_string()).to_string(),
            "Serialization error: key must be a string"
        );
    }

    #[test]
    fn test_from_io_error() {
        let err: ResponseError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err, ResponseError::Io("pipe closed".to_string()));
    }
}
