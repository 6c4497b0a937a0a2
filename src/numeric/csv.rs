use std::fmt::Display;

use super::cast;

const SEPARATOR: char = ',';

/// Split a comma-separated list and cast each token to `i64`.
///
/// An empty string is an empty list. Empty tokens cast to `0`, so `"1,,3"`
/// is `[1, 0, 3]`.
pub fn csv_to_i64s(s: &str) -> Vec<i64> {
    split(s).map(cast::to_i64).collect()
}

pub fn csv_to_i32s(s: &str) -> Vec<i32> {
    split(s).map(cast::to_i32).collect()
}

pub fn csv_to_isizes(s: &str) -> Vec<isize> {
    split(s).map(cast::to_isize).collect()
}

pub fn to_i64s<S: AsRef<str>>(tokens: &[S]) -> Vec<i64> {
    tokens.iter().map(|t| cast::to_i64(t.as_ref())).collect()
}

pub fn to_i32s<S: AsRef<str>>(tokens: &[S]) -> Vec<i32> {
    tokens.iter().map(|t| cast::to_i32(t.as_ref())).collect()
}

pub fn to_isizes<S: AsRef<str>>(tokens: &[S]) -> Vec<isize> {
    tokens.iter().map(|t| cast::to_isize(t.as_ref())).collect()
}

/// Join values with `,`. No leading or trailing separator; an empty slice
/// joins to an empty string.
pub fn join_csv<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&v.to_string());
    }
    out
}

pub fn i64s_to_csv(values: &[i64]) -> String {
    join_csv(values)
}

pub fn i32s_to_csv(values: &[i32]) -> String {
    join_csv(values)
}

pub fn isizes_to_csv(values: &[isize]) -> String {
    join_csv(values)
}

fn split(s: &str) -> impl Iterator<Item = &str> {
    // "".split(',') would yield one empty token
    let tokens = if s.is_empty() { None } else { Some(s.split(SEPARATOR)) };
    tokens.into_iter().flatten()
}
