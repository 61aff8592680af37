//! HTTP Writer Module
//!
//! A `JsonResponder` that serializes a complete HTTP/1.1 response onto any byte
//! sink: a socket, a pipe, or a buffer.

use crate::responder::{JsonResponder, ResponseError, JSON_CONTENT_TYPE};
use serde_json::Value;
use std::io::Write;

/// Canonical reason phrase for a status code
///
/// Returns an empty string for codes without a registered phrase.
pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}

/// Writes JSON responses as raw HTTP/1.1 onto `W`
pub struct HttpResponseWriter<W: Write> {
    inner: W,
}

impl<W: Write> HttpResponseWriter<W> {
    /// Wrap a byte sink
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the underlying sink
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the underlying sink
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> JsonResponder for HttpResponseWriter<W> {
    fn write_json(&mut self, status: u16, payload: Value) -> Result<(), ResponseError> {
        let body = serde_json::to_vec(&payload)?;
        write!(
            self.inner,
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
            status,
            reason_phrase(status),
            JSON_CONTENT_TYPE,
            body.len()
        )?;
        self.inner.write_all(&body)?;
        self.inner.flush()?;
        Ok(())
    }
}
