//! JSON Response Module
//!
//! Helpers that wrap a message and payload in the `{error, message, body}`
//! envelope and hand it to the caller's `JsonResponder`.
//!
//! ## Examples
//!
//! ```rust
//! use adapters_http_response::{JsonResponse, ResponseRecorder};
//!
//! let mut recorder = ResponseRecorder::new();
//! JsonResponse::ok(&mut recorder, "Success", vec![1, 2, 3]).unwrap();
//!
//! assert_eq!(recorder.status(), 200);
//! assert_eq!(
//!     recorder.body_str(),
//!     Some(r#"{"error":false,"message":"Success","body":[1,2,3]}"#)
//! );
//! ```

use crate::responder::{JsonResponder, ResponseError};
use entities_values::{Envelope, STATUS_BAD_REQUEST, STATUS_OK};
use infrastructure_debugging::DebugUtils;
use serde::Serialize;
use serde_json::Value;

/// JSON envelope response helpers
pub struct JsonResponse;

impl JsonResponse {
    /// Respond with status 400 and `error: true`
    ///
    /// # Arguments
    /// * `ctx` - Response context to write into
    /// * `message` - Message placed in the envelope
    /// * `body` - Payload placed in the envelope
    ///
    /// # Errors
    /// Returns an error if `body` cannot be represented as JSON or the context
    /// fails to write
    pub fn bad_request<R, T>(ctx: &mut R, message: &str, body: T) -> Result<(), ResponseError>
    where
        R: JsonResponder + ?Sized,
        T: Serialize,
    {
        Self::send(ctx, STATUS_BAD_REQUEST, Envelope::failure(message, body))
    }

    /// Respond with a caller-chosen status and `error: true`
    ///
    /// `error_flag` is accepted but not applied: the envelope always reports
    /// `error: true`, whatever the flag says.
    ///
    /// # Arguments
    /// * `ctx` - Response context to write into
    /// * `code` - HTTP status code
    /// * `error_flag` - Ignored
    /// * `message` - Message placed in the envelope
    /// * `body` - Payload placed in the envelope
    pub fn custom<R, T>(
        ctx: &mut R,
        code: u16,
        _error_flag: bool,
        message: &str,
        body: T,
    ) -> Result<(), ResponseError>
    where
        R: JsonResponder + ?Sized,
        T: Serialize,
    {
        Self::send(ctx, code, Envelope::failure(message, body))
    }

    /// Respond with status 200 and `error: false`
    pub fn ok<R, T>(ctx: &mut R, message: &str, body: T) -> Result<(), ResponseError>
    where
        R: JsonResponder + ?Sized,
        T: Serialize,
    {
        Self::send(ctx, STATUS_OK, Envelope::success(message, body))
    }

    fn send<R, T>(ctx: &mut R, status: u16, envelope: Envelope<T>) -> Result<(), ResponseError>
    where
        R: JsonResponder + ?Sized,
        T: Serialize,
    {
        let payload = serde_json::to_value(&envelope)?;
        if let Some(line) = trace_line(status, &payload) {
            eprintln!("{}", line);
        }
        ctx.write_json(status, payload)
    }
}

/// Verbose trace line for an envelope about to be written, if verbose output is on
fn trace_line(status: u16, payload: &Value) -> Option<String> {
    if !(DebugUtils::is_enabled() && DebugUtils::is_verbose()) {
        return None;
    }
    DebugUtils::verbose_line(&format!("status {} envelope {}", status, payload))
}
