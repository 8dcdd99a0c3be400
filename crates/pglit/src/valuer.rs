//! The `Valuer` extension point.
//!
//! [`Value`] is a closed set of renderable categories. Types outside that set
//! take part in interpolation by implementing [`Valuer`]: they produce their
//! own primitive [`Value`] (or [`Value::Null`]) when the argument is rendered.
//!
//! # Example
//!
//! ```
//! use pglit::{Value, Valuer, ValuerError, interpolate};
//!
//! #[derive(Debug)]
//! struct Cents(i64);
//!
//! impl Valuer for Cents {
//!     fn value(&self) -> Result<Value, ValuerError> {
//!         Ok(Value::Int(self.0))
//!     }
//! }
//!
//! let sql = interpolate("SELECT $1", &[Value::valuer(Cents(250))])?;
//! assert_eq!(sql, "SELECT 250");
//! # Ok::<(), pglit::InterpolateError>(())
//! ```
//!
//! `#[derive(Valuer)]` (feature `derive`) generates implementations for
//! unit-only enums and newtype structs.

use crate::error::ValuerError;
use crate::value::Value;
use std::fmt;

/// A type that can produce its own SQL value.
///
/// The returned value must be a primitive: null, boolean, integer, float,
/// text, bytes, time, uuid or decimal. Lists, unsafe fragments and nested
/// valuers are rejected at interpolation time.
pub trait Valuer: fmt::Debug + Send + Sync {
    /// Produce the value to render.
    fn value(&self) -> Result<Value, ValuerError>;
}

impl<T: Valuer + ?Sized> Valuer for Box<T> {
    fn value(&self) -> Result<Value, ValuerError> {
        (**self).value()
    }
}

impl<T: Valuer + ?Sized> Valuer for std::sync::Arc<T> {
    fn value(&self) -> Result<Value, ValuerError> {
        (**self).value()
    }
}

impl<T: Valuer> Valuer for Option<T> {
    fn value(&self) -> Result<Value, ValuerError> {
        match self {
            Some(v) => v.value(),
            None => Ok(Value::Null),
        }
    }
}
