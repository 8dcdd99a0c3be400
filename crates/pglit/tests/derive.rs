#![cfg(feature = "derive")]

use pglit::{Value, Valuer, args, interpolate};

#[derive(Debug, Clone, Copy, Valuer)]
enum Status {
    Active,
    OnHold,
    #[pglit(rename = "gone'd")]
    Deleted,
}

#[derive(Debug, Clone, Valuer)]
struct UserId(i64);

#[derive(Debug, Clone, Valuer)]
struct Nickname(Option<String>);

#[derive(Debug, Clone, Valuer)]
struct Wrapper<T>(T);

#[derive(Debug, Clone, Valuer)]
struct Wrapped(Status);

#[derive(Debug, Clone, Valuer)]
struct DoubleWrapped(Wrapped);

#[test]
fn enums_render_as_snake_case_text() {
    let sql = interpolate("$1 $2", &args![Status::Active, Status::OnHold]).unwrap();
    assert_eq!(sql, "'active' 'on_hold'");
}

#[test]
fn rename_is_still_escaped() {
    let sql = interpolate("$1", &args![Status::Deleted]).unwrap();
    assert_eq!(sql, "'gone''d'");
}

#[test]
fn newtypes_render_as_inner_value() {
    let sql = interpolate(
        "$1 $2 $3",
        &args![UserId(7), Nickname(None), Nickname(Some("kit".into()))],
    )
    .unwrap();
    assert_eq!(sql, "7 NULL 'kit'");
}

#[test]
fn generic_newtypes() {
    let sql = interpolate("$1", &args![Wrapper(2.5_f64)]).unwrap();
    assert_eq!(sql, "2.5");
}

#[test]
fn generic_newtype_of_string() {
    let sql = interpolate("$1", &args![Wrapper(String::from("it's"))]).unwrap();
    assert_eq!(sql, "'it''s'");
}

#[test]
fn newtype_over_derived_type_resolves_inner_valuer() {
    let sql = interpolate(
        "$1 $2",
        &args![Wrapped(Status::Active), DoubleWrapped(Wrapped(Status::Deleted))],
    )
    .unwrap();
    assert_eq!(sql, "'active' 'gone''d'");

    let value = Valuer::value(&Wrapped(Status::OnHold)).unwrap();
    assert!(matches!(value, Value::Text(ref s) if s == "on_hold"));
}

#[test]
fn derived_valuer_can_be_called_directly() {
    let value = Valuer::value(&UserId(9)).unwrap();
    assert!(matches!(value, Value::Int(9)));
}
