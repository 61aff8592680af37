//! Response Recorder Module
//!
//! An in-memory `JsonResponder` for tests and for callers that assemble the
//! response themselves. Like an HTTP test recorder, the status starts at 200,
//! the first written status sticks, and later bodies are appended.

use crate::responder::{JsonResponder, ResponseError, JSON_CONTENT_TYPE};
use entities_values::STATUS_OK;
use serde_json::Value;

/// Records the status, headers and body written through it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecorder {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    written: bool,
}

impl ResponseRecorder {
    /// Create an empty recorder with status 200
    pub fn new() -> Self {
        Self {
            status: STATUS_OK,
            headers: Vec::new(),
            body: Vec::new(),
            written: false,
        }
    }

    /// Recorded status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Look up a recorded header, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Recorded body bytes
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Recorded body as text, if it is valid UTF-8
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Parse the recorded body as JSON
    pub fn json(&self) -> Result<Value, ResponseError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Whether anything has been written
    pub fn is_written(&self) -> bool {
        self.written
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }
}

impl Default for ResponseRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonResponder for ResponseRecorder {
    fn write_json(&mut self, status: u16, payload: Value) -> Result<(), ResponseError> {
        if !self.written {
            self.status = status;
            self.set_header("Content-Type", JSON_CONTENT_TYPE);
            self.written = true;
        }
        serde_json::to_writer(&mut self.body, &payload)?;
        Ok(())
    }
}
