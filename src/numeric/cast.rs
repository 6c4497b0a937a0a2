//! Permissive integer cast.
//!
//! Never fails: input that cannot be read as a number becomes `0`.
//!
//! Rules, applied in order to the raw token (no trimming):
//! - base-10 integer with optional sign, leading zeros allowed
//! - finite decimal float (digits, sign, `.`, exponent), truncated toward zero
//! - anything else, including `"true"`, `"false"` and values outside the
//!   `i64` range, is `0`
//!
//! Narrower targets take the `i64` result and wrap to their width.

use crate::types::Value;

/// Cast a token to `i64`.
pub fn to_i64(token: &str) -> i64 {
    match parse_i64(token) {
        Some(n) => n,
        None => {
            tracing::trace!(token, "token is not numeric, substituting 0");
            0
        }
    }
}

/// Cast a token to `i32`, wrapping values beyond the `i32` range.
pub fn to_i32(token: &str) -> i32 {
    to_i64(token) as i32
}

/// Cast a token to `isize`, wrapping on targets where `isize` is narrower
/// than 64 bits.
pub fn to_isize(token: &str) -> isize {
    to_i64(token) as isize
}

/// Cast a dynamic value to `i64`.
///
/// Text (including JSON strings) follows the token rules. JSON numbers are
/// taken directly, floats truncated. JSON booleans are `1` / `0`; the strings
/// `"true"` and `"false"` are not numeric and cast to `0`. Byte sequences are
/// read as text. `null`, arrays and objects are `0`.
pub fn value_to_i64(value: &Value) -> i64 {
    match value {
        Value::Text(s) => to_i64(s),
        Value::Bytes(b) => to_i64(&String::from_utf8_lossy(b)),
        Value::Json(json) => json_to_i64(json),
    }
}

pub fn value_to_i32(value: &Value) -> i32 {
    value_to_i64(value) as i32
}

pub fn value_to_isize(value: &Value) -> isize {
    value_to_i64(value) as isize
}

fn json_to_i64(json: &serde_json::Value) -> i64 {
    use serde_json::Value as Json;

    match json {
        Json::String(s) => to_i64(s),
        Json::Bool(b) => i64::from(*b),
        Json::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(truncate_f64))
            .unwrap_or(0),
        Json::Null | Json::Array(_) | Json::Object(_) => 0,
    }
}

fn parse_i64(token: &str) -> Option<i64> {
    if let Ok(n) = token.parse::<i64>() {
        return Some(n);
    }
    parse_float(token)
}

fn parse_float(token: &str) -> Option<i64> {
    // f64's parser also accepts "inf" and "NaN"; only plain decimal forms count.
    let decimal_only = token
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_only {
        return None;
    }

    let f: f64 = token.parse().ok()?;
    truncate_f64(f)
}

// 2^63 as f64; every f64 in [-2^63, 2^63) truncates to a valid i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn truncate_f64(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    if t < -I64_BOUND || t >= I64_BOUND {
        return None;
    }
    Some(t as i64)
}
