//! Argument list construction.

/// Build a `Vec<Value>` from expressions convertible into [`Value`](crate::Value).
///
/// ```
/// use pglit::{args, Value, DEFAULT};
///
/// let args: Vec<Value> = args![1, "two", None::<i32>, DEFAULT];
/// assert_eq!(args.len(), 4);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
