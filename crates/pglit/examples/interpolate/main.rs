//! Interpolation walkthrough for pglit
//!
//! Run with: cargo run --example interpolate -p pglit

use pglit::{DEFAULT, InterpolateError, NOW, UnsafeSql, Value, Valuer, ValuerError, args, interpolate};

/// A type outside the built-in conversions.
#[derive(Debug)]
struct Point {
    x: f64,
    y: f64,
}

impl Valuer for Point {
    fn value(&self) -> Result<Value, ValuerError> {
        Ok(Value::from(format!("({},{})", self.x, self.y)))
    }
}

fn main() -> Result<(), InterpolateError> {
    let name: Option<&str> = None;

    let sql = interpolate(
        "INSERT INTO places (title, location, tags, note, created_at, id) \
         VALUES ($1, $2, $3, $4, $5, $6)",
        &[
            Value::from("Joe's Diner"),
            Value::valuer(Point { x: 1.5, y: -2.0 }),
            Value::from(vec!["food", "late night"]),
            Value::from(name),
            Value::from(NOW),
            Value::from(DEFAULT),
        ],
    )?;
    println!("{sql}");

    let sql = interpolate(
        "SELECT * FROM places WHERE attrs $1 $2 AND id IN $3",
        &args![UnsafeSql::new("?"), "wifi", vec![1_i64, 2, 3]],
    )?;
    println!("{sql}");

    match interpolate("SELECT $1, $2", &args![1]) {
        Err(err) => println!("error: {err}"),
        Ok(sql) => println!("unexpected: {sql}"),
    }

    Ok(())
}
