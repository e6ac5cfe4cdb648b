//! A strict recursive-descent JSON parser producing an in-memory value tree.
//!
//! [`parse`] consumes one complete, object-rooted JSON document and returns a
//! [`Value`] tree, or a [`ParseError`] pointing at the furthest position where
//! no grammar alternative matched.
//!
//! The accepted dialect is deliberately strict:
//!
//! - documents are rooted at an object, not an arbitrary value;
//! - numbers are unsigned decimal digit runs (no sign, fraction, or exponent);
//! - string escapes are captured verbatim rather than decoded, so the text of
//!   a parsed string is exactly the source span between its quotes;
//! - no comments, no trailing commas, no content after the closing `}`.
//!
//! # Examples
//!
//! ```rust
//! use jsondescent::{Value, parse};
//!
//! let doc = parse(r#"{"name": "ada", "tags": [1, 2, 3]}"#)?;
//! let Value::Object(map) = doc else { unreachable!() };
//! assert_eq!(map["name"], Value::String("ada".into()));
//! # Ok::<(), jsondescent::ParseError>(())
//! ```

mod error;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, Expectation, ParseError};
pub use parser::parse;
pub use value::{Array, Map, Value};
