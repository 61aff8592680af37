//! Dynamic Value Module
//!
//! Provides a closed sum type over the runtime kinds the utility functions inspect:
//! strings, fixed-width and platform-width integers, floats, booleans, lists,
//! records and null.
//!
//! ## Usage
//!
//! ```rust
//! use entities_values::{DynValue, ValueKind};
//!
//! let value = DynValue::from(20i8);
//! assert_eq!(value.kind(), ValueKind::I8);
//! assert_eq!(value.kind().name(), "int8");
//!
//! let text = DynValue::from("hello");
//! assert!(text.is_non_empty_string());
//! ```

use serde::Serialize;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

/// A value whose kind is only known at runtime
///
/// Serializes untagged: strings, numbers and booleans become their JSON
/// counterparts, `List` becomes an array, `Record` an object and `Null` `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DynValue {
    /// UTF-8 string
    Str(String),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// Platform-width signed integer
    Isize(isize),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// Platform-width unsigned integer
    Usize(usize),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// Boolean
    Bool(bool),
    /// Ordered sequence of values
    List(Vec<DynValue>),
    /// Named fields, ordered by key
    Record(BTreeMap<String, DynValue>),
    /// Absence of a value
    Null,
}

/// The runtime kind of a [`DynValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Bool,
    List,
    Record,
    Null,
}

impl ValueKind {
    /// Stable lowercase name of the kind, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Str => "string",
            ValueKind::I8 => "int8",
            ValueKind::I16 => "int16",
            ValueKind::I32 => "int32",
            ValueKind::I64 => "int64",
            ValueKind::Isize => "int",
            ValueKind::U8 => "uint8",
            ValueKind::U16 => "uint16",
            ValueKind::U32 => "uint32",
            ValueKind::U64 => "uint64",
            ValueKind::Usize => "uint",
            ValueKind::F32 => "float32",
            ValueKind::F64 => "float64",
            ValueKind::Bool => "bool",
            ValueKind::List => "list",
            ValueKind::Record => "record",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl DynValue {
    /// Get the runtime kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            DynValue::Str(_) => ValueKind::Str,
            DynValue::I8(_) => ValueKind::I8,
            DynValue::I16(_) => ValueKind::I16,
            DynValue::I32(_) => ValueKind::I32,
            DynValue::I64(_) => ValueKind::I64,
            DynValue::Isize(_) => ValueKind::Isize,
            DynValue::U8(_) => ValueKind::U8,
            DynValue::U16(_) => ValueKind::U16,
            DynValue::U32(_) => ValueKind::U32,
            DynValue::U64(_) => ValueKind::U64,
            DynValue::Usize(_) => ValueKind::Usize,
            DynValue::F32(_) => ValueKind::F32,
            DynValue::F64(_) => ValueKind::F64,
            DynValue::Bool(_) => ValueKind::Bool,
            DynValue::List(_) => ValueKind::List,
            DynValue::Record(_) => ValueKind::Record,
            DynValue::Null => ValueKind::Null,
        }
    }

    /// Check whether this value is a string of non-zero length
    ///
    /// The check is length based, so a string made only of whitespace counts
    /// as non-empty. Every non-string kind returns `false`.
    ///
    /// # Examples
    /// ```
    /// use entities_values::DynValue;
    ///
    /// assert!(DynValue::from("   ").is_non_empty_string());
    /// assert!(!DynValue::from("").is_non_empty_string());
    /// assert!(!DynValue::from(123i32).is_non_empty_string());
    /// ```
    pub fn is_non_empty_string(&self) -> bool {
        matches!(self, DynValue::Str(s) if !s.is_empty())
    }

    /// Inspect an arbitrary value and wrap it if its type is one of the known kinds
    ///
    /// Recognizes `String`, `&'static str`, every integer and float primitive,
    /// `bool`, and `DynValue` itself.
    ///
    /// # Returns
    /// * `Some(value)` - If the concrete type is recognized
    /// * `None` - For any other type
    ///
    /// # Examples
    /// ```
    /// use entities_values::DynValue;
    ///
    /// assert_eq!(DynValue::from_any(&7u16), Some(DynValue::U16(7)));
    /// assert_eq!(DynValue::from_any(&vec![1, 2, 3]), None);
    /// ```
    pub fn from_any<T: Any>(value: &T) -> Option<DynValue> {
        let any = value as &dyn Any;

        macro_rules! try_downcast {
            ($($ty:ty),* $(,)?) => {
                $(
                    if let Some(v) = any.downcast_ref::<$ty>() {
                        return Some(DynValue::from(v.clone()));
                    }
                )*
            };
        }

        try_downcast!(
            String,
            &'static str,
            i8,
            i16,
            i32,
            i64,
            isize,
            u8,
            u16,
            u32,
            u64,
            usize,
            f32,
            f64,
            bool,
            DynValue,
        );
        None
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DynValue {
                fn from(value: $ty) -> Self {
                    DynValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
);

impl From<&str> for DynValue {
    fn from(value: &str) -> Self {
        DynValue::Str(value.to_string())
    }
}

impl<T: Into<DynValue>> From<Vec<T>> for DynValue {
    fn from(values: Vec<T>) -> Self {
        DynValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, DynValue>> for DynValue {
    fn from(fields: BTreeMap<String, DynValue>) -> Self {
        DynValue::Record(fields)
    }
}
