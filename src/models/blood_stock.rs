use serde_json::{Map, Value};

/// Available units keyed by blood-type label, e.g. `"O-" => 2`. Counts are
/// kept exactly as supplied so stored blobs written by other clients survive
/// a read.
pub type BloodStock = Map<String, Value>;

/// Serializes a stock mapping to the text blob kept in the `bloodstock` column.
pub fn encode(stock: &BloodStock) -> Result<String, serde_json::Error> {
    serde_json::to_string(stock)
}

pub fn decode(text: &str) -> Result<BloodStock, serde_json::Error> {
    serde_json::from_str(text)
}

/// Decodes a `bloodstock` column as returned by the store. A missing value or
/// a stored JSON `null` means the record never had a stock mapping.
pub fn decode_stored(value: &Value) -> Result<Option<BloodStock>, serde_json::Error> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => {
            let parsed: Option<BloodStock> = serde_json::from_str(text)?;
            Ok(parsed)
        }
        other => serde_json::from_value(other.clone()).map(Some),
    }
}
