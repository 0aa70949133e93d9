//! # fs-json
//!
//! JSON text serializer for values produced by CAD feature scripts, plus the two
//! inspection reports (assembly mates, mate connector) that the scripts print.
//!
//! The serializer reproduces the scripts' output byte for byte: objects use
//! `" : "` between key and value, entries are joined by a bare `,`, and strings
//! are quoted without escaping unless [`SerializeOptions::escape_strings`] is set.
//!
//! ## Quick start
//!
//! ```rust
//! use fs_json::{serialize, Value};
//!
//! let value = Value::map([("a", Value::from(1)), ("b", Value::from(2))]);
//! assert_eq!(serialize(&value).unwrap(), r#"{"a" : 1,"b" : 2}"#);
//!
//! let list = Value::array([1, 2, 3].map(Value::from));
//! assert_eq!(serialize(&list).unwrap(), "[1,2,3]");
//! ```
//!
//! ## Modules
//!
//! - [`serializer`] — `Value` → JSON text (`serialize`, `serialize_with`, `Serializer`)
//! - [`value`] — the `Value` tagged union and its constructors
//! - [`convert`] — `serde_json::Value` / JSON text → `Value`
//! - [`options`] — `SerializeOptions` (string escaping flag)
//! - [`inspect`] — assembly-mate and mate-connector reports
//! - [`error`] — Error types for serialization and inspection failures

pub mod convert;
pub mod error;
pub mod inspect;
pub mod options;
pub mod serializer;
pub mod value;

pub use convert::from_json_str;
pub use error::{InspectError, SerializationError};
pub use inspect::{
    assembly_mates, inspect_assembly_mates, inspect_target_mate, parse_element_url, parse_id,
    target_mate, AssemblyAttribute, AttributedEntity, ElementPath, MateConnector,
};
pub use options::SerializeOptions;
pub use serializer::{serialize, serialize_with, Serializer};
pub use value::{Map, Value};
