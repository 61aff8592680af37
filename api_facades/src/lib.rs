//! API Facades Layer
//!
//! Provides one flat module path for every helper in the workspace:
//! - `getenv`, `check_string`
//! - `to_int`, `to_int_any` and their panicking `must_*` forms
//! - `dot_product` and `must_dot_product`
//! - `response_bad_request`, `response_custom`, `response_ok`
//!
//! All facades call underlying Rust modules from inner layers.

pub mod response_facades;
pub mod value_facades;

pub use response_facades::*;
pub use value_facades::*;

// Re-export the types that appear in facade signatures
pub use adapters_http_response::{
    HttpResponseWriter, JsonResponder, ResponseError, ResponseRecorder,
};
pub use entities_values::{DynValue, Envelope, ValueKind};
pub use infrastructure_debugging::DebugUtils;
pub use infrastructure_utilities::{CoercionError, VectorError};
