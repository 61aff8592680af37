//! Value Facades
//!
//! Flat entry points for the environment, string, coercion and vector helpers.
//!
//! Coercion and dot product come in two flavours. The plain functions return a
//! `Result`. The `must_*` functions panic with the error message instead, so a
//! failure unwinds until a caller catches it with `std::panic::catch_unwind`:
//!
//! ```rust
//! use api_facades::must_to_int_any;
//!
//! let caught = std::panic::catch_unwind(|| must_to_int_any(&u64::MAX));
//! assert!(caught.is_err());
//! assert_eq!(must_to_int_any(&2.7f64), 2);
//! ```

use entities_values::DynValue;
use infrastructure_debugging::DebugUtils;
use infrastructure_utilities::{
    CoercionResult, CoercionUtils, EnvUtils, StringUtils, VectorError, VectorUtils,
};
use num_traits::Float;
use std::any::Any;
use std::fmt::Display;

/// Get an environment variable, or `fallback` if it is absent or empty
pub fn getenv(key: &str, fallback: &str) -> String {
    EnvUtils::getenv(key, fallback)
}

/// Check whether a value of any type is a non-empty string
pub fn check_string<T: Any>(val: &T) -> bool {
    StringUtils::check_string(val)
}

/// Convert a dynamic value to the platform integer
pub fn to_int(value: &DynValue) -> CoercionResult<isize> {
    CoercionUtils::to_int(value)
}

/// Convert a value of any type to the platform integer
pub fn to_int_any<T: Any>(value: &T) -> CoercionResult<isize> {
    CoercionUtils::to_int_any(value)
}

/// Convert a dynamic value to the platform integer, panicking on failure
///
/// # Panics
/// On overflow or an unsupported kind
#[track_caller]
pub fn must_to_int(value: &DynValue) -> isize {
    abort_on_error(CoercionUtils::to_int(value))
}

/// Convert a value of any type to the platform integer, panicking on failure
///
/// # Panics
/// On overflow or an unsupported type
#[track_caller]
pub fn must_to_int_any<T: Any>(value: &T) -> isize {
    abort_on_error(CoercionUtils::to_int_any(value))
}

/// Dot product of two equal-length vectors
pub fn dot_product<F: Float>(a: &[F], b: &[F]) -> Result<F, VectorError> {
    VectorUtils::dot_product(a, b)
}

/// Dot product of two equal-length vectors, panicking on a length mismatch
///
/// # Panics
/// If `a` and `b` have different lengths
#[track_caller]
pub fn must_dot_product<F: Float>(a: &[F], b: &[F]) -> F {
    abort_on_error(VectorUtils::dot_product(a, b))
}

#[track_caller]
fn abort_on_error<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            if let Some(line) = abort_line(&err) {
                eprintln!("{}", line);
            }
            panic!("{}", err)
        }
    }
}

/// Debug line written before a `must_*` function panics, if debug output is on
fn abort_line<E: Display>(err: &E) -> Option<String> {
    DebugUtils::debug_line(&format!("aborting: {}", err))
}
