//! Numeric Coercion
//!
//! Converts values of runtime-inspected numeric kinds to the platform integer
//! (`isize`).
//!
//! Conversion rules:
//! - Signed and unsigned integers convert directly when they fit.
//! - `uint64` and `uint` values at or above `isize::MAX` are rejected as overflow.
//! - Floats truncate toward zero. NaN, infinities and out-of-range results overflow.
//! - Every other kind is rejected as unsupported.

use entities_values::{DynValue, ValueKind};
use std::any::Any;
use std::fmt;

/// Coercion error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// The value does not fit in the platform integer
    Overflow(String),
    /// The value's kind cannot be coerced
    UnsupportedType(String),
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionError::Overflow(value) => {
                write!(f, "integer overflow: {} does not fit in int", value)
            }
            CoercionError::UnsupportedType(name) => write!(f, "unsupported type: {}", name),
        }
    }
}

impl std::error::Error for CoercionError {}

/// Result type for coercion operations
pub type CoercionResult<T> = Result<T, CoercionError>;

/// Numeric coercion functions
pub struct CoercionUtils;

impl CoercionUtils {
    /// Convert a dynamic value to `isize`
    ///
    /// # Arguments
    /// * `value` - Value to convert
    ///
    /// # Returns
    /// * `Ok(n)` - The integer value, truncated toward zero for floats
    /// * `Err(CoercionError::Overflow)` - If the value cannot be represented
    /// * `Err(CoercionError::UnsupportedType)` - If the kind is not numeric
    ///
    /// # Examples
    /// ```
    /// use entities_values::DynValue;
    /// use infrastructure_utilities::{CoercionError, CoercionUtils};
    ///
    /// assert_eq!(CoercionUtils::to_int(&DynValue::from(20i8)), Ok(20));
    /// assert_eq!(CoercionUtils::to_int(&DynValue::from(2.7f64)), Ok(2));
    /// assert!(matches!(
    ///     CoercionUtils::to_int(&DynValue::from(u64::MAX)),
    ///     Err(CoercionError::Overflow(_))
    /// ));
    /// ```
    pub fn to_int(value: &DynValue) -> CoercionResult<isize> {
        match *value {
            DynValue::I8(v) => Ok(isize::from(v)),
            DynValue::I16(v) => Ok(isize::from(v)),
            DynValue::I32(v) => fit(isize::try_from(v).ok(), ValueKind::I32, v),
            DynValue::I64(v) => fit(isize::try_from(v).ok(), ValueKind::I64, v),
            DynValue::Isize(v) => Ok(v),
            DynValue::U8(v) => Ok(isize::from(v)),
            DynValue::U16(v) => fit(isize::try_from(v).ok(), ValueKind::U16, v),
            DynValue::U32(v) => fit(isize::try_from(v).ok(), ValueKind::U32, v),
            DynValue::U64(v) => Self::from_wide_unsigned(v, ValueKind::U64),
            DynValue::Usize(v) => Self::from_wide_unsigned(v as u64, ValueKind::Usize),
            DynValue::F32(v) => Self::from_float(f64::from(v), ValueKind::F32),
            DynValue::F64(v) => Self::from_float(v, ValueKind::F64),
            _ => Err(CoercionError::UnsupportedType(value.kind().name().to_string())),
        }
    }

    /// Convert a value of any type to `isize`
    ///
    /// The concrete type is inspected at runtime. Types outside the supported
    /// numeric set are reported by their Rust type name.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::{CoercionError, CoercionUtils};
    ///
    /// assert_eq!(CoercionUtils::to_int_any(&90u64), Ok(90));
    /// assert_eq!(CoercionUtils::to_int_any(&1.5f32), Ok(1));
    /// assert_eq!(
    ///     CoercionUtils::to_int_any(&"invalid"),
    ///     Err(CoercionError::UnsupportedType("string".to_string()))
    /// );
    /// ```
    pub fn to_int_any<T: Any>(value: &T) -> CoercionResult<isize> {
        match DynValue::from_any(value) {
            Some(value) => Self::to_int(&value),
            None => Err(CoercionError::UnsupportedType(
                std::any::type_name::<T>().to_string(),
            )),
        }
    }

    // Values equal to isize::MAX are rejected too.
    fn from_wide_unsigned(v: u64, kind: ValueKind) -> CoercionResult<isize> {
        if v >= isize::MAX as u64 {
            return Err(overflow(kind, v));
        }
        fit(isize::try_from(v).ok(), kind, v)
    }

    fn from_float(v: f64, kind: ValueKind) -> CoercionResult<isize> {
        if !v.is_finite() {
            return Err(overflow(kind, v));
        }
        let truncated = v.trunc();
        // isize::MAX as f64 rounds up to 2^(bits-1), which is itself out of range.
        if truncated < isize::MIN as f64 || truncated >= isize::MAX as f64 {
            return Err(overflow(kind, v));
        }
        Ok(truncated as isize)
    }
}

fn fit<V: fmt::Display>(converted: Option<isize>, kind: ValueKind, v: V) -> CoercionResult<isize> {
    converted.ok_or_else(|| overflow(kind, v))
}

fn overflow<V: fmt::Display>(kind: ValueKind, v: V) -> CoercionError {
    CoercionError::Overflow(format!("{} value {}", kind, v))
}
