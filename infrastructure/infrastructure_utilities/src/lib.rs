//! Infrastructure Layer: Utilities
//!
//! Provides the stateless helper functions of the library:
//! - Environment variable lookup with fallbacks
//! - Runtime string-kind checks
//! - Numeric coercion to the platform integer
//! - Floating-point dot product
//!
//! Depends on the Entities layer only (dependencies flow inward).

pub mod coercion;
pub mod env;
pub mod strings;
pub mod vector;

pub use coercion::{CoercionError, CoercionResult, CoercionUtils};
pub use env::EnvUtils;
pub use strings::StringUtils;
pub use vector::{VectorError, VectorUtils};
