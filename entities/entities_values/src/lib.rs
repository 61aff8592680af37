//! Entities Layer: Values
//!
//! Provides the data shapes shared by every other crate in the workspace:
//! - `DynValue`: a value whose kind is inspected at runtime
//! - `Envelope`: the `{error, message, body}` JSON response structure
//!
//! This crate is the innermost layer and depends on no other workspace crate.

pub mod envelope;
pub mod value;

pub use envelope::{
    Envelope, STATUS_BAD_REQUEST, STATUS_FORBIDDEN, STATUS_INTERNAL_SERVER_ERROR, STATUS_OK,
};
pub use value::{DynValue, ValueKind};
