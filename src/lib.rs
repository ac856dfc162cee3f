//! Workspace root. The library surface lives in the member crates; this
//! package hosts the runnable demos under `demos/`.
//!
//! - [`css_transform`]: the configuration handle and transform pipeline
//! - [`css_codec`]: CSS parse/stringify and the node types

pub use css_codec;
pub use css_transform;
