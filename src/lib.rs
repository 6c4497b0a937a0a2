//! Stateless string and value coercion helpers.
//!
//! `text-core` groups three independent concerns:
//!
//! - [`coercion`]: rendering values as text or bytes, with JSON as the
//!   fallback encoding, and borrowing views between `str` and `[u8]`.
//! - [`numeric`]: comma-separated integer lists and a permissive integer cast
//!   that substitutes `0` instead of failing.
//! - [`text`]: camel/snake case conversion, character-class filters and
//!   string cleanup.
//!
//! Every function is pure: output depends only on input, and all functions
//! may be called concurrently from any thread.

pub mod coercion;
pub mod numeric;
pub mod text;
pub mod types;

pub use coercion::{to_bytes, to_slice, to_string, Coerce, CoercionError, Json};
pub use types::Value;
