//! Serializer configuration.

use serde::Deserialize;

/// Options controlling how [`serialize_with`](crate::serialize_with) renders text.
///
/// The default reproduces the feature scripts exactly: strings and keys are
/// wrapped in quotes with no escaping, so a value containing `"` produces
/// invalid JSON. Setting `escape_strings` switches to RFC 8259 escaping.
///
/// Deserializes from a JSON document; missing fields take their defaults.
///
/// ```
/// use fs_json::SerializeOptions;
///
/// let opts: SerializeOptions = serde_json::from_str(r#"{"escape_strings": true}"#).unwrap();
/// assert!(opts.escape_strings);
/// assert!(!SerializeOptions::default().escape_strings);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Escape quotes, backslashes and control characters in strings and keys.
    pub escape_strings: bool,
}

impl SerializeOptions {
    /// Options with string escaping turned on.
    pub fn escaped() -> Self {
        Self {
            escape_strings: true,
        }
    }
}
