//! Placeholder interpolation.
//!
//! Replaces every `$N` in a template with the literal rendering of argument
//! `N`. Arity is checked before anything is rendered, and rendered text is
//! never re-scanned, so an argument containing `$1` stays inert.
//!
//! # Example
//!
//! ```
//! use pglit::{args, interpolate, NOW};
//!
//! let sql = interpolate(
//!     "UPDATE users SET name = $1, seen_at = $2 WHERE id IN $3",
//!     &args!["O'Brien", NOW, vec![1, 2, 3]],
//! )?;
//! assert_eq!(
//!     sql,
//!     "UPDATE users SET name = 'O''Brien', seen_at = NOW() WHERE id IN (1,2,3)"
//! );
//! # Ok::<(), pglit::InterpolateError>(())
//! ```

use crate::error::InterpolateResult;
use crate::literal::push_value;
use crate::placeholder::{check_arity, scan};
use crate::value::Value;
use std::ops::Range;


/// Interpolate `args` into `template`.
///
/// The distinct placeholder indices must be exactly `1..=args.len()`; they
/// may appear in any order and more than once. A repeated placeholder renders
/// its argument once (a valuer is invoked once) and reuses the text.
///
/// The first argument that cannot be rendered aborts the call; no partial
/// output is returned.
pub fn interpolate(template: &str, args: &[Value]) -> InterpolateResult<String> {
    let result = render_template(template, args);

    #[cfg(feature = "tracing")]
    match &result {
        Ok(sql) => tracing::trace!(
            target: "pglit.interpolate",
            args = args.len(),
            template_len = template.len(),
            sql_len = sql.len(),
            "interpolated"
        ),
        Err(err) => tracing::debug!(
            target: "pglit.interpolate",
            args = args.len(),
            error = %err,
            "interpolation failed"
        ),
    }

    result
}

/// Interpolate any iterator of values convertible into [`Value`].
///
/// ```
/// let sql = pglit::interpolate_with("SELECT $1 + $2", [1_i64, 2])?;
/// assert_eq!(sql, "SELECT 1 + 2");
/// # Ok::<(), pglit::InterpolateError>(())
/// ```
pub fn interpolate_with<I>(template: &str, args: I) -> InterpolateResult<String>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let args: Vec<Value> = args.into_iter().map(Into::into).collect();
    interpolate(template, &args)
}

fn render_template(template: &str, args: &[Value]) -> InterpolateResult<String> {
    let placeholders = scan(template);
    check_arity(&placeholders, args.len())?;

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    // Where each argument's first rendering landed in `out`.
    let mut rendered: Vec<Option<Range<usize>>> = vec![None; args.len()];
    let mut cursor = 0;

    for p in &placeholders {
        out.push_str(&template[cursor..p.start]);
        cursor = p.end;

        let slot = p.index - 1;
        match rendered[slot].clone() {
            Some(range) => out.extend_from_within(range),
            None => {
                let start = out.len();
                push_value(&mut out, &args[slot], p.index)?;
                rendered[slot] = Some(start..out.len());
            }
        }
    }
    out.push_str(&template[cursor..]);

    Ok(out)
}
