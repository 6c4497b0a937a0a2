pub mod encode;
pub mod slice;
pub mod view;

pub use encode::{to_bytes, to_string, Coerce, CoercionError, Json};
pub use slice::to_slice;
pub use view::{bytes_as_str, bytes_to_string, string_to_bytes};
