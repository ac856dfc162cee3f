//! # css-transform — vendor-prefix and rewrite pipeline for CSS
//!
//! Transforms a stylesheet by running three independent mutation passes
//! over the parsed tree, in a fixed order:
//!
//! 1. **Keyframe expansion**: each `@keyframes` block is duplicated once
//!    per configured vendor, clones first, original last
//! 2. **Prefix injection**: vendor-prefixed copies of configured properties
//!    are inserted at the head of each rule's declaration list
//! 3. **Selector/value mapping**: user-supplied functions rewrite selector
//!    strings and declaration values, with a side channel for appending new
//!    declarations to the rule being processed
//!
//! Parsing and serialization are delegated to the [`css_codec`] crate; this
//! crate only mutates the tree in between.
//!
//! ## Quick Start
//!
//! ```rust
//! use css_transform::transform;
//!
//! let out = transform("button { border-radius: 4px; }")
//!     .prefix("border-radius", ["-webkit-", "-moz-"])
//!     .render()
//!     .expect("valid CSS");
//!
//! assert_eq!(
//!     out,
//!     "button {\n  -moz-border-radius: 4px;\n  -webkit-border-radius: 4px;\n  border-radius: 4px;\n}\n"
//! );
//! ```
//!
//! Configuration is reusable: every [`render`](Stylesheet::render) call
//! re-runs the pipeline from the stored source text, so the same handle
//! renders identical output as long as the registered functions are pure.
//!
//! ## Modules
//!
//! - [`stylesheet`]: the configuration handle and registration API
//! - [`context`]: the current-rule context passed to value maps
//! - [`plugins`]: bundled plugins (`transitions`)
//! - [`error`]: render error type

pub mod context;
pub mod error;
pub mod plugins;
pub mod stylesheet;

mod pipeline;

pub use context::RuleContext;
pub use error::TransformError;
pub use stylesheet::{KEYFRAMES, SelectorMapFn, Stylesheet, ValueMapFn, transform};
