//! JSON value types and the tree-to-text renderer.
//!
//! This module defines the [`Value`] enum, the tagged union at the end of
//! the parsing pipeline, and its `Display` impl, which is the printer:
//! compact JSON text with string escaping.

use alloc::string::String;
use alloc::vec::Vec;

/// Ordered key/value pairs of an object.
///
/// Keys are not deduplicated; [`Value::get`] takes the first match.
pub type Pairs = Vec<(String, Value)>;

/// Elements of an array, in source order.
pub type Array = Vec<Value>;

/// A parsed JSON value.
///
/// Exactly one variant is active. Numbers keep the exact source text of
/// their literal so printing reproduces it unchanged (`3.1400` stays
/// `3.1400`); strings hold their content as scanned, with escape sequences
/// left untouched. Children are exclusively owned by their parent: trees
/// are acyclic, share nothing between parses, and are freed with the root.
///
/// # Examples
///
/// ```
/// use jsontree::{parse, Value};
///
/// let tree = parse(r#"{"x":3.1400}"#).unwrap();
/// assert_eq!(tree.get("x"), Some(&Value::Number("3.1400".into())));
/// ```
// The serde derives are active for tests and for downstream crates that
// enable the optional `serde` feature; normal builds carry no serde
// dependency.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(String),
    String(String),
    Array(Array),
    Object(Pairs),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Pairs> for Value {
    fn from(v: Pairs) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`](Value::Null).
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Bool(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`](Value::Bool).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the literal source text if this is a `Number`.
    #[must_use]
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the string content (as scanned) if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the ordered pairs if this is an `Object`.
    #[must_use]
    pub fn as_object(&self) -> Option<&Pairs> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up `key` in an object by scanning its pairs in order.
    ///
    /// Returns the value of the first pair whose key matches. `None` is the
    /// explicit not-found outcome, returned when the key is absent or when
    /// `self` is not an object. Duplicate keys are legal; first match wins,
    /// so callers needing last-wins or rejection must pre-validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::parse;
    ///
    /// let tree = parse(r#"{"x":1,"x":2}"#).unwrap();
    /// assert_eq!(tree.get("x").unwrap().as_number(), Some("1"));
    /// assert_eq!(tree.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the `index`-th element if this is an `Array`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }
}

/// Escapes `"`, `\` and control characters for inclusion in a JSON string
/// literal, writing into `f`.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c if c.is_ascii_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// The printer: renders the tree as compact JSON text.
///
/// A pure function of the tree: no validation, no mutation. Numbers are
/// emitted verbatim from their stored text; children are `,`-separated with
/// no trailing comma. Rendering into a caller-supplied sink comes for free
/// through `core::fmt::Write`.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => f.write_str(n),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for v in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(pairs) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in pairs {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
