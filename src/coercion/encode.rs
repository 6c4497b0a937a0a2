use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::view::bytes_to_string;
use crate::types::Value;

#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("Serialization error for value {value}: {source}")]
    Serialization {
        value: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// A value that can be rendered as text or bytes.
///
/// Text and byte sequences are exposed directly and returned without
/// re-encoding. Anything else goes through `encode_json`.
pub trait Coerce: fmt::Debug {
    fn as_text(&self) -> Option<&str> {
        None
    }

    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }

    fn encode_json(&self) -> serde_json::Result<String>;
}

/// Marks a serializable value for JSON coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T: Serialize + fmt::Debug> Coerce for Json<T> {
    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }
}

impl Coerce for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Coerce for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Coerce for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Coerce for [u8] {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Coerce for Vec<u8> {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Coerce for Cow<'_, [u8]> {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(&**self)
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Coerce for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Coerce for Value {
    fn as_text(&self) -> Option<&str> {
        Value::as_text(self)
    }

    fn as_bytes(&self) -> Option<&[u8]> {
        Value::as_bytes(self)
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Render a value as text.
///
/// Text is borrowed as-is, bytes are reinterpreted (see
/// [`bytes_to_string`]), anything else is encoded as JSON.
pub fn to_string<T: Coerce + ?Sized>(value: &T) -> Result<Cow<'_, str>, CoercionError> {
    if let Some(text) = value.as_text() {
        return Ok(Cow::Borrowed(text));
    }
    if let Some(bytes) = value.as_bytes() {
        return Ok(bytes_to_string(bytes));
    }

    Ok(Cow::Owned(encode(value)?))
}

/// Render a value as bytes.
///
/// Text is viewed as its UTF-8 bytes, bytes are returned unchanged, anything
/// else is encoded as JSON.
pub fn to_bytes<T: Coerce + ?Sized>(value: &T) -> Result<Cow<'_, [u8]>, CoercionError> {
    if let Some(text) = value.as_text() {
        return Ok(Cow::Borrowed(text.as_bytes()));
    }
    if let Some(bytes) = value.as_bytes() {
        return Ok(Cow::Borrowed(bytes));
    }

    Ok(Cow::Owned(encode(value)?.into_bytes()))
}

fn encode<T: Coerce + ?Sized>(value: &T) -> Result<String, CoercionError> {
    tracing::trace!(
        value_type = std::any::type_name::<T>(),
        "coercing value through JSON encoding"
    );
    value
        .encode_json()
        .map_err(|source| CoercionError::Serialization {
            value: format!("{value:?}"),
            source,
        })
}
