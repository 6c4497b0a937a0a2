use crate::types::Value;

/// Spread a sequence-shaped value into its elements, in order.
///
/// JSON arrays yield their elements; byte sequences yield one JSON number
/// per byte. Any other value yields an empty vector.
pub fn to_slice(data: &Value) -> Vec<Value> {
    match data {
        Value::Json(serde_json::Value::Array(items)) => {
            items.iter().cloned().map(Value::Json).collect()
        }
        Value::Bytes(bytes) => bytes.iter().map(|&b| Value::Json(b.into())).collect(),
        _ => Vec::new(),
    }
}
