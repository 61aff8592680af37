//! Adapters Layer: HTTP Response
//!
//! Provides the JSON envelope response helpers and the seam they write through:
//! - `JsonResponder`: trait implemented by the caller's HTTP context
//! - `JsonResponse`: `bad_request`, `custom` and `ok` helpers
//! - `ResponseRecorder`: in-memory responder
//! - `HttpResponseWriter`: raw HTTP/1.1 responder over any `io::Write`
//!
//! Depends on the Entities and Infrastructure layers.

pub mod http_writer;
pub mod recorder;
pub mod responder;
pub mod response;

pub use http_writer::{reason_phrase, HttpResponseWriter};
pub use recorder::ResponseRecorder;
pub use responder::{JsonResponder, ResponseError, JSON_CONTENT_TYPE};
pub use response::JsonResponse;
