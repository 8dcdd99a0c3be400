//! # pglit
//!
//! Turn a `$N`-parameterized PostgreSQL statement and its arguments into a
//! single literal SQL string.
//!
//! ## Features
//!
//! - **Injection-safe literals**: strings are single-quoted with embedded quotes doubled
//! - **Closed value model**: every argument is a [`Value`]; most Rust types convert with `From`
//! - **Open extension point**: anything else implements [`Valuer`] (or `#[derive(Valuer)]`)
//! - **Explicit escape hatch**: raw SQL only through [`UnsafeSql`], [`NOW`] and [`DEFAULT`]
//! - **Fail closed**: arity and rendering errors abort the whole call
//!
//! ## Example
//!
//! ```
//! use pglit::{args, interpolate, DEFAULT};
//!
//! let sql = interpolate(
//!     "INSERT INTO users (id, name, tags, created_at) VALUES ($1, $2, $3, $4)",
//!     &args![42, "d'Artagnan", vec!["a", "b"], DEFAULT],
//! )?;
//! assert_eq!(
//!     sql,
//!     "INSERT INTO users (id, name, tags, created_at) VALUES (42, 'd''Artagnan', ('a','b'), DEFAULT)"
//! );
//! # Ok::<(), pglit::InterpolateError>(())
//! ```
//!
//! ## Cargo features
//!
//! - `derive` (default): `#[derive(Valuer)]`
//! - `tracing`: emit interpolation events under the `pglit.interpolate` target
//! - `rust_decimal`: `rust_decimal::Decimal` arguments
//! - `time`: `time` crate date/time arguments

pub mod error;
pub mod interpolate;
pub mod literal;
mod macros;
pub mod placeholder;
pub mod value;
pub mod valuer;

pub use error::{BoxError, InterpolateError, InterpolateResult, ValuerError};
pub use interpolate::{interpolate, interpolate_with};
pub use literal::quote_literal;
pub use placeholder::Placeholder;
pub use value::{DEFAULT, NOW, UnsafeSql, Value};
pub use valuer::Valuer;

#[cfg(feature = "derive")]
pub use pglit_derive::Valuer;
