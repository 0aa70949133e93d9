//! Serializer — converts a [`Value`] tree into JSON text.
//!
//! Output matches the feature scripts' hand-written `toJson` exactly:
//!
//! - **Objects**: `{"key" : value,"key2" : value2}` — `" : "` between key and
//!   value, bare `,` between entries
//! - **Arrays**: `[v1,v2,v3]`
//! - **Strings**: wrapped in `"` with no escaping (see [`SerializeOptions`])
//! - **Numbers**: shortest round-trip decimal, integral values without a
//!   fractional part, `-0` → `0`
//!
//! Only maps and arrays are accepted at the top level.
//!
//! # Example
//! ```
//! use fs_json::{serialize, Value};
//! let value = Value::map([(
//!     "list",
//!     Value::array([
//!         Value::from(true),
//!         Value::from(false),
//!         Value::map([("x", Value::from("y"))]),
//!     ]),
//! )]);
//! assert_eq!(serialize(&value).unwrap(), r#"{"list" : [true,false,{"x" : "y"}]}"#);
//! ```

use crate::error::{Result, SerializationError};
use crate::options::SerializeOptions;
use crate::value::{Map, Value};

/// Serialize a map or array into JSON text using the default options.
///
/// Fails with [`SerializationError::InvalidTopLevelType`] for scalars and with
/// [`SerializationError::UnsupportedValueType`] if the tree contains
/// [`Value::Undefined`].
pub fn serialize(value: &Value) -> Result<String> {
    serialize_with(value, &SerializeOptions::default())
}

/// Serialize a map or array into JSON text with explicit options.
pub fn serialize_with(value: &Value, options: &SerializeOptions) -> Result<String> {
    let mut out = String::new();
    Serializer::with_options(&mut out, *options).write_document(value)?;
    Ok(out)
}

/// Writes values into a caller-owned buffer.
///
/// On error, the buffer is truncated back to its length before the failed call,
/// so callers never observe partial output.
pub struct Serializer<'a> {
    out: &'a mut String,
    options: SerializeOptions,
}

impl<'a> Serializer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self::with_options(out, SerializeOptions::default())
    }

    pub fn with_options(out: &'a mut String, options: SerializeOptions) -> Self {
        Self { out, options }
    }

    /// Append a top-level document. `value` must be a map or an array.
    pub fn write_document(&mut self, value: &Value) -> Result<()> {
        if !value.is_collection() {
            return Err(SerializationError::InvalidTopLevelType {
                found: value.type_name(),
            });
        }
        self.write_value(value)
    }

    /// Append any value, including scalars. Used for nested positions.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        let start = self.out.len();
        let result = self.value_to_string(value);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "serialization failed, discarding partial output");
            self.out.truncate(start);
        }
        result
    }

    /// Recursive dispatch over every variant.
    fn value_to_string(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Array(items) => self.write_array(items),
            Value::Map(map) => self.write_map(map),
            Value::Boolean(b) => {
                self.out.push_str(if *b { "true" } else { "false" });
                Ok(())
            }
            Value::Number(n) => {
                self.out.push_str(&format_number(*n));
                Ok(())
            }
            Value::String(s) => {
                self.write_string(s);
                Ok(())
            }
            Value::Undefined => Err(SerializationError::UnsupportedValueType {
                found: value.type_name(),
            }),
        }
    }

    fn write_map(&mut self, map: &Map) -> Result<()> {
        self.out.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_string(key);
            self.out.push_str(" : ");
            self.value_to_string(value)?;
        }
        self.out.push('}');
        Ok(())
    }

    fn write_array(&mut self, items: &[Value]) -> Result<()> {
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.value_to_string(item)?;
        }
        self.out.push(']');
        Ok(())
    }

    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        if self.options.escape_strings {
            escape_into(s, self.out);
        } else {
            self.out.push_str(s);
        }
        self.out.push('"');
    }
}

/// Format a number the way the scripts' `toString` does for finite values.
///
/// `f64`'s `Display` already yields the shortest representation that parses
/// back to the same value and never uses an exponent. Non-finite values have
/// no JSON form and are written as `null`.
fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    // Normalize -0 to 0
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{}", n)
}

/// RFC 8259 string escaping.
fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
}
