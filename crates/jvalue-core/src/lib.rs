//! # jvalue-core
//!
//! A mutable JSON value tree with its own parser and writer.
//!
//! One type, [`Value`], represents every JSON node. It is designed for code
//! that walks and edits loosely-shaped documents such as configuration files:
//! read-only lookups never fail (they fall back to shared empty values), and
//! writes through an index create the container on demand.
//!
//! ## Quick start
//!
//! ```rust
//! use jvalue_core::Value;
//!
//! let mut root = Value::default();
//! assert!(root.from_string(r#"{"x": [1, 2.5, "s", true, null]}"#));
//! assert_eq!(root["x"][1].get_number(), 2.5);
//! assert!(root["x"][4].is_null());
//!
//! root["name"] = "demo".into();
//! assert_eq!(root.to_json(0), r#"{"name":"demo","x":[1,2.5,"s",true,null]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the [`Value`] type, indexing, mutation and conversions
//! - [`parser`]: text → [`Value`] (`parse`, [`ParserConfig`])
//! - [`serializer`]: [`Value`] → text, compact or indented
//! - [`interop`]: serde `Serialize`/`Deserialize` and `serde_json::Value` conversions
//! - [`error`]: [`ParseError`]

pub mod error;
pub mod interop;
pub mod parser;
mod scanner;
pub mod serializer;
pub mod value;

pub use error::ParseError;
pub use parser::{parse, ParserConfig, DEFAULT_MAX_DEPTH};
pub use serializer::DEFAULT_SPACING;
pub use value::{Array, Object, Value, ValueIndex, ValueType, EMPTY_ARRAY, EMPTY_OBJECT};
