//! Error types for CSS parsing.

use thiserror::Error;

/// Errors that can occur while decoding CSS source text.
///
/// # Examples
///
/// ```rust
/// use css_codec::parse;
///
/// // Unterminated rule body
/// let result = parse("button { color: red;");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum CssError {
    /// Invalid CSS syntax was encountered during parsing.
    ///
    /// The string contains the input that could not be consumed.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),
}
