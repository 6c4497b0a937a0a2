use serde_json::json;
use text_core::numeric::{csv_to_i64s, i32s_to_csv, i64s_to_csv, to_i64s};
use text_core::text::{clean_string, only_chinese, only_numeric, to_camel_case, to_snake_case};
use text_core::{to_slice, Value};

#[test]
fn golden_camel_case_identifier() {
    assert_eq!(to_camel_case("user_id"), "UserId");
}

#[test]
fn golden_snake_case_identifier() {
    assert_eq!(to_snake_case("UserId"), "user_id");
}

#[test]
fn golden_only_chinese() {
    assert_eq!(only_chinese("abc中文123"), "中文");
}

#[test]
fn golden_clean_string() {
    assert_eq!(clean_string("  Hello\u{0007}World  ", true), "helloworld");
}

#[test]
fn golden_i32s_to_csv() {
    assert_eq!(i32s_to_csv(&[1, 2, 3]), "1,2,3");
}

#[test]
fn golden_to_slice() {
    let items = to_slice(&Value::Json(json!([1, 2, 3])));
    assert_eq!(
        items,
        vec![
            Value::Json(json!(1)),
            Value::Json(json!(2)),
            Value::Json(json!(3)),
        ]
    );
    assert!(to_slice(&Value::Json(json!(42))).is_empty());
}

#[test]
fn golden_csv_boundaries() {
    assert_eq!(csv_to_i64s(""), Vec::<i64>::new());
    assert_eq!(csv_to_i64s("1,,3"), vec![1, 0, 3]);
}

#[test]
fn golden_round_trip() {
    assert_eq!(i64s_to_csv(&to_i64s(&["1", "2", "3"])), "1,2,3");
}

#[test]
fn golden_only_numeric_idempotent() {
    let once = only_numeric("tel: +1 (555) 010-9999");
    assert_eq!(once, " 1 555 0109999");
    assert_eq!(only_numeric(&once), once);
}
