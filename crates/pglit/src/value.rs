//! Interpolation arguments.
//!
//! [`Value`] is the closed set of argument categories the interpolator knows
//! how to render. Most Rust types convert with `Value::from` (or the
//! [`args!`](crate::args) macro):
//!
//! - integers of every width, `bool`, `f32`, `f64`
//! - `&str`, `String`, `Cow<str>`, `char`
//! - `Vec<u8>` / `&[u8]` as byte strings
//! - `Vec<T>`, `&[T]`, `[T; N]` of scalars as `IN`-style lists
//! - `chrono` date/time types, `uuid::Uuid`, `serde_json::Value`
//! - `Option<T>`, `Box<T>`, `Arc<T>` and `&T` of the above
//!
//! Anything else participates through the [`Valuer`] trait.

use crate::valuer::Valuer;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;
use std::borrow::Cow;
use std::sync::Arc;
use uuid::Uuid;

/// A raw SQL fragment inserted verbatim, without quoting or escaping.
///
/// The caller is responsible for the safety of the contained text. Use the
/// [`NOW`] and [`DEFAULT`] constants for the common cases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsafeSql(Cow<'static, str>);

impl UnsafeSql {
    /// Wrap caller-attested SQL text.
    pub fn new(sql: impl Into<Cow<'static, str>>) -> Self {
        Self(sql.into())
    }

    /// The raw SQL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renders as `NOW()`.
pub const NOW: UnsafeSql = UnsafeSql(Cow::Borrowed("NOW()"));

/// Renders as `DEFAULT`.
pub const DEFAULT: UnsafeSql = UnsafeSql(Cow::Borrowed("DEFAULT"));

/// An interpolation argument.
#[derive(Debug, Clone)]
pub enum Value {
    /// SQL `NULL`
    Null,
    /// Boolean, rendered as `1` / `0`
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// 32-bit float
    Float32(f32),
    /// 64-bit float
    Float64(f64),
    /// Text, rendered as a quoted string literal
    Text(String),
    /// Byte string; must be valid UTF-8 when rendered
    Bytes(Vec<u8>),
    /// Timestamp without time zone, second precision
    Time(NaiveDateTime),
    /// UUID, rendered as a quoted string literal
    Uuid(Uuid),
    /// Exact decimal, rendered as a bare numeric literal
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
    /// Homogeneous list, rendered as `(a,b,c)`
    List(Vec<Value>),
    /// A value computed at render time
    Valuer(Arc<dyn Valuer>),
    /// Raw SQL inserted verbatim
    Unsafe(UnsafeSql),
    /// A value with no SQL rendering, named by its kind.
    ///
    /// Interpolating it fails with `InvalidValue` (or `InvalidSliceValue`
    /// inside a list).
    Unsupported(&'static str),
}

impl Value {
    /// Wrap a [`Valuer`].
    pub fn valuer<V: Valuer + 'static>(valuer: V) -> Self {
        Value::Valuer(Arc::new(valuer))
    }

    /// Raw SQL inserted verbatim. Shorthand for `UnsafeSql::new(sql).into()`.
    pub fn unsafe_sql(sql: impl Into<Cow<'static, str>>) -> Self {
        Value::Unsafe(UnsafeSql::new(sql))
    }

    /// An opaque value of type `T`, which has no SQL rendering.
    pub fn unsupported<T: ?Sized>() -> Self {
        Value::Unsupported(std::any::type_name::<T>())
    }

    /// Convert any serializable value through its JSON data model.
    ///
    /// Scalars, strings and arrays map onto their SQL counterparts; maps and
    /// structs have no literal rendering and become [`Value::Unsupported`].
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Value::from)
    }

    /// Whether this is `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// A short name for the value's category.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::UInt(_) => "integer",
            Value::Float32(_) | Value::Float64(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Time(_) => "time",
            Value::Uuid(_) => "uuid",
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(_) => "decimal",
            Value::List(_) => "list",
            Value::Valuer(_) => "valuer",
            Value::Unsafe(_) => "unsafe sql",
            Value::Unsupported(kind) => *kind,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt as u64: u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Value::Text(v.into_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(v: [u8; N]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Time(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        v.and_hms_opt(0, 0, 0)
            .map_or(Value::Unsupported("chrono::NaiveDate"), Value::Time)
    }
}

/// Rendered as the wall-clock time in the value's own offset.
impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Time(v.naive_local())
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for Value {
    fn from(v: &DateTime<Tz>) -> Self {
        Value::Time(v.naive_local())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for Value {
    fn from(v: rust_decimal::Decimal) -> Self {
        Value::Decimal(v)
    }
}

#[cfg(feature = "time")]
fn time_to_naive(v: time::PrimitiveDateTime) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(v.year(), u8::from(v.month()) as u32, v.day() as u32)?;
    date.and_hms_nano_opt(
        v.hour() as u32,
        v.minute() as u32,
        v.second() as u32,
        v.nanosecond(),
    )
}

#[cfg(feature = "time")]
impl From<time::PrimitiveDateTime> for Value {
    fn from(v: time::PrimitiveDateTime) -> Self {
        time_to_naive(v).map_or(
            Value::Unsupported("time::PrimitiveDateTime out of range"),
            Value::Time,
        )
    }
}

/// Rendered as the wall-clock time in the value's own offset.
#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Value {
    fn from(v: time::OffsetDateTime) -> Self {
        time_to_naive(time::PrimitiveDateTime::new(v.date(), v.time())).map_or(
            Value::Unsupported("time::OffsetDateTime out of range"),
            Value::Time,
        )
    }
}

#[cfg(feature = "time")]
impl From<time::Date> for Value {
    fn from(v: time::Date) -> Self {
        Value::from(time::PrimitiveDateTime::new(v, time::Time::MIDNIGHT))
    }
}

impl From<UnsafeSql> for Value {
    fn from(v: UnsafeSql) -> Self {
        Value::Unsafe(v)
    }
}

impl From<&UnsafeSql> for Value {
    fn from(v: &UnsafeSql) -> Self {
        Value::Unsafe(v.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

/// `None` renders as `NULL`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(v: Box<T>) -> Self {
        (*v).into()
    }
}

impl<T: Into<Value> + Clone> From<Arc<T>> for Value {
    fn from(v: Arc<T>) -> Self {
        Arc::unwrap_or_clone(v).into()
    }
}

// References to scalars render as the pointee.
macro_rules! impl_from_ref {
    ($($t:ty),*) => {
        $(
            impl From<&$t> for Value {
                fn from(v: &$t) -> Self {
                    Value::from(*v)
                }
            }
        )*
    };
}

impl_from_ref!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char, NaiveDateTime,
    NaiveDate, Uuid
);

#[cfg(feature = "rust_decimal")]
impl_from_ref!(rust_decimal::Decimal);

macro_rules! impl_from_list {
    ($($t:ty),*) => {
        $(
            impl From<Vec<$t>> for Value {
                fn from(v: Vec<$t>) -> Self {
                    Value::List(v.into_iter().map(Value::from).collect())
                }
            }

            impl From<&[$t]> for Value {
                fn from(v: &[$t]) -> Self {
                    Value::List(v.iter().map(Value::from).collect())
                }
            }

            impl<const N: usize> From<[$t; N]> for Value {
                fn from(v: [$t; N]) -> Self {
                    Value::List(v.into_iter().map(Value::from).collect())
                }
            }
        )*
    };
}

impl_from_list!(
    i8, i16, i32, i64, isize, u16, u32, u64, usize, f32, f64, bool, String, Uuid, Value
);

#[cfg(feature = "rust_decimal")]
impl_from_list!(rust_decimal::Decimal);

impl<'a> From<Vec<&'a str>> for Value {
    fn from(v: Vec<&'a str>) -> Self {
        Value::List(v.into_iter().map(Value::from).collect())
    }
}

impl<'a> From<&[&'a str]> for Value {
    fn from(v: &[&'a str]) -> Self {
        Value::List(v.iter().copied().map(Value::from).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Value {
    fn from(v: [&'a str; N]) -> Self {
        Value::List(v.into_iter().map(Value::from).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    n.as_f64()
                        .map_or(Value::Unsupported("json number"), Value::Float64)
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(_) => Value::Unsupported("json object"),
        }
    }
}
