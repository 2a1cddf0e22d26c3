//! A JSON text parser that builds an in-memory tree of typed values.
//!
//! Data flows in one direction only: buffer → lexer → token stream →
//! recursive-descent parser → [`Value`] tree. The finished tree supports
//! key lookup on objects ([`Value::get`]) and renders back to JSON text
//! through its `Display` impl.
//!
//! Numbers keep the exact source text of their literal, so formatting such
//! as `3.1400` survives a round-trip unchanged. String content is stored as
//! scanned; escape sequences are not decoded.
//!
//! ```
//! use jsontree::{parse, Value};
//!
//! let tree = parse(r#"{"a":1,"b":[true,false,null]}"#).unwrap();
//! assert_eq!(tree.get("a"), Some(&Value::Number("1".into())));
//! assert_eq!(tree.to_string(), r#"{"a":1,"b":[true,false,null]}"#);
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod lexer;
mod options;
mod parser;
mod token;
mod value;

#[cfg(test)]
mod tests;

pub use error::{Expected, LexError, ParseError};
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options};
pub use token::{Span, TokenKind};
pub use value::{Array, Pairs, Value};
