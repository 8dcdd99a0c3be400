//! Rendering values as PostgreSQL literals.
//!
//! Strings use standard-conforming quoting: the text is wrapped in single
//! quotes and embedded quotes are doubled. Backslashes and control characters
//! pass through unchanged, so the output assumes
//! `standard_conforming_strings = on`.

use crate::error::{InterpolateError, InterpolateResult};
use crate::value::Value;
use chrono::Datelike;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Quote `s` as a SQL string literal.
///
/// ```
/// assert_eq!(pglit::quote_literal("pg's"), "'pg''s'");
/// ```
pub fn quote_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    push_quoted(&mut out, s);
    out
}

fn push_quoted(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('\'');
    for (i, part) in s.split('\'').enumerate() {
        if i > 0 {
            out.push_str("''");
        }
        out.push_str(part);
    }
    out.push('\'');
}

/// Why a primitive could not be written.
enum Rejection {
    NotUtf8,
    Unrenderable(&'static str),
}

/// Write a primitive value. Lists, valuers, unsafe fragments and unsupported
/// values are rejected.
fn push_primitive(out: &mut String, value: &Value) -> Result<(), Rejection> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::UInt(n) => out.push_str(&n.to_string()),
        Value::Float32(f) if f.is_finite() => out.push_str(&f.to_string()),
        Value::Float64(f) if f.is_finite() => out.push_str(&f.to_string()),
        Value::Float32(_) | Value::Float64(_) => {
            return Err(Rejection::Unrenderable("non-finite float"));
        }
        Value::Text(s) => push_quoted(out, s),
        Value::Bytes(bytes) => {
            let s = std::str::from_utf8(bytes).map_err(|_| Rejection::NotUtf8)?;
            push_quoted(out, s);
        }
        // `%Y` signs years outside 0..=9999, which breaks the YYYY layout.
        Value::Time(t) if !(0..=9999).contains(&t.year()) => {
            return Err(Rejection::Unrenderable("time with year outside 0000-9999"));
        }
        Value::Time(t) => {
            out.push('\'');
            out.push_str(&t.format(TIME_FORMAT).to_string());
            out.push('\'');
        }
        Value::Uuid(u) => {
            out.push('\'');
            out.push_str(&u.hyphenated().to_string());
            out.push('\'');
        }
        #[cfg(feature = "rust_decimal")]
        Value::Decimal(d) => out.push_str(&d.to_string()),
        Value::List(_) | Value::Valuer(_) | Value::Unsafe(_) | Value::Unsupported(_) => {
            return Err(Rejection::Unrenderable(value.kind()));
        }
    }
    Ok(())
}

/// Append the literal for argument `$index`.
pub(crate) fn push_value(out: &mut String, value: &Value, index: usize) -> InterpolateResult<()> {
    match value {
        Value::Unsafe(sql) => {
            out.push_str(sql.as_str());
            Ok(())
        }
        Value::List(items) => push_list(out, items, index),
        Value::Valuer(valuer) => {
            let produced = valuer
                .value()
                .map_err(|source| InterpolateError::Valuer { index, source })?;
            push_scalar(out, &produced, index)
        }
        other => push_scalar(out, other, index),
    }
}

fn push_scalar(out: &mut String, value: &Value, index: usize) -> InterpolateResult<()> {
    push_primitive(out, value).map_err(|rejection| match rejection {
        Rejection::NotUtf8 => InterpolateError::NotUtf8 { index },
        Rejection::Unrenderable(kind) => InterpolateError::InvalidValue { index, kind },
    })
}

/// Element categories a list may hold. All elements must share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Bool,
    Integer,
    Float,
    Text,
    Uuid,
    #[cfg(feature = "rust_decimal")]
    Decimal,
}

fn element_kind(value: &Value) -> Option<ElementKind> {
    match value {
        Value::Bool(_) => Some(ElementKind::Bool),
        Value::Int(_) | Value::UInt(_) => Some(ElementKind::Integer),
        Value::Float32(_) | Value::Float64(_) => Some(ElementKind::Float),
        Value::Text(_) | Value::Bytes(_) => Some(ElementKind::Text),
        Value::Uuid(_) => Some(ElementKind::Uuid),
        #[cfg(feature = "rust_decimal")]
        Value::Decimal(_) => Some(ElementKind::Decimal),
        _ => None,
    }
}

fn push_list(out: &mut String, items: &[Value], index: usize) -> InterpolateResult<()> {
    let invalid = |reason: String| InterpolateError::InvalidSliceValue { index, reason };

    let Some(first) = items.first() else {
        return Err(invalid("list is empty".to_string()));
    };
    let kind = element_kind(first)
        .ok_or_else(|| invalid(format!("list contains {} elements", first.kind())))?;

    out.push('(');
    for (i, item) in items.iter().enumerate() {
        match element_kind(item) {
            Some(k) if k == kind => {}
            Some(_) => return Err(invalid("list mixes element kinds".to_string())),
            None => return Err(invalid(format!("list contains {} elements", item.kind()))),
        }
        if i > 0 {
            out.push(',');
        }
        push_primitive(out, item).map_err(|rejection| match rejection {
            Rejection::NotUtf8 => InterpolateError::NotUtf8 { index },
            Rejection::Unrenderable(what) => invalid(format!("list contains {what} elements")),
        })?;
    }
    out.push(')');

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: Value) -> InterpolateResult<String> {
        let mut out = String::new();
        push_value(&mut out, &value, 1)?;
        Ok(out)
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(quote_literal("it's"), "'it''s'");
        assert_eq!(quote_literal("''"), "''''''");
        assert_eq!(quote_literal(""), "''");
        assert_eq!(quote_literal(r"a\b"), r"'a\b'");
    }

    #[test]
    fn floats_use_shortest_round_trip_form() {
        assert_eq!(render(Value::Float32(0.1)).unwrap(), "0.1");
        assert_eq!(render(Value::Float64(0.1)).unwrap(), "0.1");
        assert_eq!(render(Value::Float64(3.0)).unwrap(), "3");
        assert_eq!(render(Value::Float64(-0.5)).unwrap(), "-0.5");
    }

    #[test]
    fn non_finite_floats_are_invalid() {
        assert!(render(Value::Float64(f64::NAN)).unwrap_err().is_invalid_value());
        assert!(render(Value::Float32(f32::INFINITY)).unwrap_err().is_invalid_value());
    }

    #[test]
    fn time_drops_subseconds() {
        let t = chrono::NaiveDate::from_ymd_opt(2004, 1, 1)
            .unwrap()
            .and_hms_nano_opt(1, 1, 1, 999_999_999)
            .unwrap();
        assert_eq!(render(Value::Time(t)).unwrap(), "'2004-01-01 01:01:01'");
    }

    #[test]
    fn time_years_must_fit_four_digits() {
        let at = |year| {
            chrono::NaiveDate::from_ymd_opt(year, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        };
        assert_eq!(render(Value::Time(at(9999))).unwrap(), "'9999-01-01 00:00:00'");
        assert_eq!(render(Value::Time(at(0))).unwrap(), "'0000-01-01 00:00:00'");
        assert!(render(Value::Time(at(10000))).unwrap_err().is_invalid_value());
        assert!(render(Value::Time(at(-5))).unwrap_err().is_invalid_value());
    }

    #[test]
    fn uuid_is_quoted() {
        let u = uuid::Uuid::nil();
        assert_eq!(
            render(Value::Uuid(u)).unwrap(),
            "'00000000-0000-0000-0000-000000000000'"
        );
    }

    #[test]
    fn lists_must_be_homogeneous_and_non_empty() {
        assert_eq!(render(Value::from(vec![1_i64, 2])).unwrap(), "(1,2)");
        assert_eq!(render(Value::from(vec![true, false])).unwrap(), "(1,0)");

        let cases = [
            Value::List(vec![]),
            Value::List(vec![Value::Int(1), Value::Text("a".into())]),
            Value::List(vec![Value::Null]),
            Value::List(vec![Value::List(vec![Value::Int(1)])]),
            Value::List(vec![Value::Int(1), Value::Float64(f64::NAN)]),
            Value::List(vec![Value::Float64(f64::NAN)]),
        ];
        for case in cases {
            assert!(render(case).unwrap_err().is_invalid_slice_value());
        }
    }

    #[test]
    fn list_bytes_must_be_utf8() {
        let v = Value::List(vec![Value::Bytes(vec![0xff])]);
        assert!(render(v).unwrap_err().is_not_utf8());
    }
}
