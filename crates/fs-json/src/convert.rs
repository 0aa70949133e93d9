//! Conversion from `serde_json` values and JSON text.
//!
//! JSON `null` becomes [`Value::Undefined`], matching how the scripts see an
//! absent attribute. Object key order is preserved (serde_json is built with
//! `preserve_order`).

use crate::error::Result;
use crate::value::{Map, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Undefined,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            // as_f64 is always Some without arbitrary_precision
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

/// Parse JSON text into a [`Value`].
///
/// ```
/// use fs_json::{from_json_str, serialize};
/// let value = from_json_str(r#"{"b": 2, "a": [1, "x"]}"#).unwrap();
/// assert_eq!(serialize(&value).unwrap(), r#"{"b" : 2,"a" : [1,"x"]}"#);
/// ```
pub fn from_json_str(json: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}
