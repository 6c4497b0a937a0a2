pub mod case;
pub mod clean;
pub mod filters;

pub use case::{to_camel_case, to_snake_case};
pub use clean::{clean_string, clean_string_with, CleanOptions};
pub use filters::{only_alpha_numeric, only_chinese, only_numeric};
