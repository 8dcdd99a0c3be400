//! Error types for pglit

use thiserror::Error;

/// Result type alias for interpolation
pub type InterpolateResult<T> = Result<T, InterpolateError>;

/// Boxed error returned by user [`Valuer`](crate::Valuer) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for interpolation.
///
/// Argument indices are 1-based, matching the `$N` placeholder that
/// referenced the argument.
#[derive(Debug, Error)]
pub enum InterpolateError {
    /// The placeholders in the template and the supplied arguments disagree.
    #[error(
        "argument mismatch: template references {placeholders} distinct placeholder(s) up to ${max_index}, but {args} argument(s) were supplied"
    )]
    ArgumentMismatch {
        placeholders: usize,
        max_index: usize,
        args: usize,
    },

    /// A string-bearing argument is not valid UTF-8.
    #[error("argument ${index} is not valid UTF-8")]
    NotUtf8 { index: usize },

    /// An argument has no SQL literal rendering.
    #[error("argument ${index} has no SQL literal rendering: {kind}")]
    InvalidValue { index: usize, kind: &'static str },

    /// A list argument contains elements with no SQL literal rendering.
    #[error("argument ${index} cannot be rendered as a list: {reason}")]
    InvalidSliceValue { index: usize, reason: String },

    /// A valuer failed to produce its value.
    #[error("argument ${index} valuer failed: {source}")]
    Valuer {
        index: usize,
        #[source]
        source: ValuerError,
    },
}

impl InterpolateError {
    /// The 1-based argument index the error refers to, if any.
    pub fn arg_index(&self) -> Option<usize> {
        match self {
            Self::ArgumentMismatch { .. } => None,
            Self::NotUtf8 { index }
            | Self::InvalidValue { index, .. }
            | Self::InvalidSliceValue { index, .. }
            | Self::Valuer { index, .. } => Some(*index),
        }
    }

    /// Check if this is an argument mismatch error
    pub fn is_argument_mismatch(&self) -> bool {
        matches!(self, Self::ArgumentMismatch { .. })
    }

    /// Check if this is a UTF-8 error
    pub fn is_not_utf8(&self) -> bool {
        matches!(self, Self::NotUtf8 { .. })
    }

    /// Check if this is an invalid value error
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Check if this is an invalid list error
    pub fn is_invalid_slice_value(&self) -> bool {
        matches!(self, Self::InvalidSliceValue { .. })
    }

    /// Check if this is a valuer failure
    pub fn is_valuer(&self) -> bool {
        matches!(self, Self::Valuer { .. })
    }
}

/// Error returned by a [`Valuer`](crate::Valuer).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValuerError(#[source] pub BoxError);

impl ValuerError {
    /// Create a valuer error from any error type.
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self(err.into())
    }

    /// Create a valuer error from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}
