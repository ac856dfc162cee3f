//! Error types for the transform pipeline.

use thiserror::Error;

/// Errors that can occur during a render run.
///
/// Rendering is pure computation over the parsed tree, so the only failure
/// is the codec rejecting the stored source text; that error propagates
/// unmodified. A configured property missing from a rule is a silent no-op,
/// not an error.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The stored source text could not be parsed.
    #[error("failed to parse stylesheet: {0}")]
    Parse(#[from] css_codec::CssError),
}
