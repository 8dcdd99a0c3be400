//! `$N` placeholder scanning.
//!
//! A placeholder is `$` followed by one or more ASCII digits. Everything else,
//! including `$` not followed by a digit (dollar quoting such as `$$` or
//! `$tag$`), is literal text. Placeholders inside string literals or comments
//! are not special-cased: the scanner does not parse SQL.

use crate::error::{InterpolateError, InterpolateResult};

/// One placeholder occurrence in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Byte offset of the `$`.
    pub start: usize,
    /// Byte offset one past the last digit.
    pub end: usize,
    /// The 1-based argument index. Saturates at `usize::MAX`.
    pub index: usize,
}

/// Find every placeholder in `template`, in order of appearance.
pub fn scan(template: &str) -> Vec<Placeholder> {
    let bytes = template.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        let mut index: usize = 0;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            index = index
                .saturating_mul(10)
                .saturating_add((bytes[end] - b'0') as usize);
            end += 1;
        }

        if end > start + 1 {
            out.push(Placeholder { start, end, index });
        }
        i = end;
    }

    out
}

/// Check that `placeholders` reference exactly the arguments `1..=args`.
///
/// Indices may appear in any order and more than once, but every argument
/// must be referenced and nothing outside `1..=args` may be.
pub fn check_arity(placeholders: &[Placeholder], args: usize) -> InterpolateResult<()> {
    let mut seen = vec![false; args];
    let mut distinct = 0;
    let mut max_index = 0;
    let mut out_of_range = false;

    for p in placeholders {
        max_index = max_index.max(p.index);
        match p.index.checked_sub(1).and_then(|i| seen.get_mut(i)) {
            Some(slot) => {
                if !*slot {
                    *slot = true;
                    distinct += 1;
                }
            }
            None => out_of_range = true,
        }
    }

    if out_of_range || distinct != args {
        let placeholders = count_distinct(placeholders);
        return Err(InterpolateError::ArgumentMismatch {
            placeholders,
            max_index,
            args,
        });
    }

    Ok(())
}

fn count_distinct(placeholders: &[Placeholder]) -> usize {
    let mut indices: Vec<usize> = placeholders.iter().map(|p| p.index).collect();
    indices.sort_unstable();
    indices.dedup();
    indices.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(template: &str) -> Vec<usize> {
        scan(template).iter().map(|p| p.index).collect()
    }

    #[test]
    fn finds_placeholders_with_spans() {
        let found = scan("a = $1 AND b = $12");
        assert_eq!(
            found,
            vec![
                Placeholder { start: 4, end: 6, index: 1 },
                Placeholder { start: 15, end: 18, index: 12 },
            ]
        );
    }

    #[test]
    fn bare_dollars_are_literal() {
        assert!(scan("SELECT $$body$$, $tag$x$tag$, $").is_empty());
        assert_eq!(indices("$$1"), vec![1]);
    }

    #[test]
    fn handles_multibyte_text() {
        let found = scan("名前 = $1");
        assert_eq!(found.len(), 1);
        assert_eq!(&"名前 = $1"[found[0].start..found[0].end], "$1");
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(indices("$99999999999999999999999"), vec![usize::MAX]);
    }

    #[test]
    fn arity_accepts_any_order_and_repeats() {
        assert!(check_arity(&scan("$2 $1"), 2).is_ok());
        assert!(check_arity(&scan("$1 $1 $2"), 2).is_ok());
        assert!(check_arity(&scan("no placeholders"), 0).is_ok());
    }

    #[test]
    fn arity_rejects_sparse_zero_and_missing() {
        let err = check_arity(&scan("$1 $3"), 2).unwrap_err();
        assert!(matches!(
            err,
            InterpolateError::ArgumentMismatch {
                placeholders: 2,
                max_index: 3,
                args: 2
            }
        ));
        assert!(check_arity(&scan("$0"), 1).is_err());
        assert!(check_arity(&scan("$1"), 2).is_err());
        assert!(check_arity(&scan("none"), 1).is_err());
        assert!(check_arity(&scan("$1"), 0).is_err());
    }
}
