//! String Utilities
//!
//! Runtime string-kind checks over values of any type.

use entities_values::DynValue;
use std::any::Any;

/// String helper functions
pub struct StringUtils;

impl StringUtils {
    /// Check whether a value of any type is a non-empty string
    ///
    /// `String` and `&'static str` are strings. A `DynValue` is inspected through
    /// its tag. Length decides emptiness, so whitespace-only strings pass.
    ///
    /// # Arguments
    /// * `val` - Value to inspect
    ///
    /// # Returns
    /// `true` if `val` is a string with at least one byte
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::StringUtils;
    ///
    /// assert!(StringUtils::check_string(&"hello"));
    /// assert!(StringUtils::check_string(&String::from("   ")));
    /// assert!(!StringUtils::check_string(&""));
    /// assert!(!StringUtils::check_string(&123));
    /// assert!(!StringUtils::check_string(&vec![1, 2, 3]));
    /// ```
    pub fn check_string<T: Any>(val: &T) -> bool {
        let any = val as &dyn Any;
        if let Some(s) = any.downcast_ref::<String>() {
            return !s.is_empty();
        }
        if let Some(s) = any.downcast_ref::<&'static str>() {
            return !s.is_empty();
        }
        if let Some(value) = any.downcast_ref::<DynValue>() {
            return value.is_non_empty_string();
        }
        false
    }
}
