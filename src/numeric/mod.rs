pub mod cast;
pub mod csv;

pub use csv::{
    csv_to_i32s, csv_to_i64s, csv_to_isizes, i32s_to_csv, i64s_to_csv, isizes_to_csv, join_csv,
    to_i32s, to_i64s, to_isizes,
};
