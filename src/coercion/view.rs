use std::borrow::Cow;

use super::CoercionError;

/// Borrow text as its UTF-8 bytes. Never allocates.
pub fn string_to_bytes(s: &str) -> &[u8] {
    s.as_bytes()
}

/// Reinterpret bytes as text.
///
/// Valid UTF-8 is borrowed without copying. Invalid sequences cannot be
/// carried by `str`, so they are replaced with U+FFFD in an owned copy.
pub fn bytes_to_string(b: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(b)
}

/// Strict borrowing view: the bytes as `&str`, or an error if they are not
/// valid UTF-8.
pub fn bytes_as_str(b: &[u8]) -> Result<&str, CoercionError> {
    Ok(std::str::from_utf8(b)?)
}
