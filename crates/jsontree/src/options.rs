/// Configuration for a single parse.
///
/// # Examples
///
/// ```rust
/// use jsontree::{parse_with_options, ParseOptions, Value};
///
/// let options = ParseOptions {
///     allow_bare_words: true,
///     ..ParseOptions::default()
/// };
/// let tree = parse_with_options("[yes, no]", options).unwrap();
/// assert_eq!(tree.get_index(0), Some(&Value::String("yes".into())));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Maximum nesting depth for objects and arrays.
    ///
    /// Input nested deeper than this fails with
    /// `ParseError::RecursionLimitExceeded` instead of overflowing the
    /// stack.
    ///
    /// # Default
    ///
    /// `1000`
    pub max_depth: usize,

    /// Whether to accept unquoted alphabetic words as string values and
    /// object keys.
    ///
    /// This is not standard JSON. When `false`, an alphabetic run that is
    /// not `true`, `false` or `null` is a lexical error.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_bare_words: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            allow_bare_words: false,
        }
    }
}
