//! The stylesheet configuration handle and its chaining registration API.
//!
//! A [`Stylesheet`] holds the source text plus everything registered against
//! it: property-prefix rules, an optional keyframe vendor list, and the
//! selector/value mapping chains. Registration order is preserved exactly;
//! it determines both the head-insertion ordering of injected declarations
//! and the application order of mapping functions.

use crate::context::RuleContext;
use crate::error::TransformError;

/// Marker accepted by [`Stylesheet::prefix`] to target `@keyframes` blocks
/// instead of a declaration property.
pub const KEYFRAMES: &str = "@keyframes";

/// A selector-mapping function: receives the current selector text and
/// returns the replacement.
pub type SelectorMapFn = Box<dyn Fn(&str) -> String>;

/// A value-mapping function: receives a declaration's property name and
/// value plus the current-rule context, and returns the new value, or
/// `None` to remove the declaration.
pub type ValueMapFn = Box<dyn Fn(&str, &str, &mut RuleContext) -> Option<String>>;

/// A configured property-prefix rule: which vendors to inject for one
/// property. Vendor order is preserved from registration.
pub(crate) struct PropertyPrefix {
    pub(crate) property: String,
    pub(crate) vendors: Vec<String>,
}

/// Initializes a new [`Stylesheet`] with the given CSS source text.
pub fn transform(css: impl Into<String>) -> Stylesheet {
    Stylesheet::new(css)
}

/// A configured transform over one CSS source text.
///
/// Built incrementally through the chaining registration methods. The
/// configuration is read-only during a [`render`](Stylesheet::render) run,
/// and every run re-parses the stored source, so rendering is repeatable.
pub struct Stylesheet {
    pub(crate) source: String,
    pub(crate) prefixes: Vec<PropertyPrefix>,
    pub(crate) keyframe_vendors: Option<Vec<String>>,
    pub(crate) selector_maps: Vec<SelectorMapFn>,
    pub(crate) value_maps: Vec<ValueMapFn>,
}

impl Stylesheet {
    pub fn new(css: impl Into<String>) -> Self {
        Self {
            source: css.into(),
            prefixes: Vec::new(),
            keyframe_vendors: None,
            selector_maps: Vec::new(),
            value_maps: Vec::new(),
        }
    }

    /// Registers `vendors` for occurrences of `property`.
    ///
    /// If `property` is the [`KEYFRAMES`] marker, the vendors become the
    /// keyframe vendor list instead, as if
    /// [`prefix_keyframes`](Stylesheet::prefix_keyframes) had been called.
    pub fn prefix<I, S>(&mut self, property: &str, vendors: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vendors: Vec<String> = vendors.into_iter().map(Into::into).collect();
        if property == KEYFRAMES {
            return self.prefix_keyframes(vendors);
        }
        self.prefixes.push(PropertyPrefix {
            property: property.to_string(),
            vendors,
        });
        self
    }

    /// Sets the vendor list used to duplicate `@keyframes` blocks.
    ///
    /// At most one list is active; the last call wins.
    pub fn prefix_keyframes<I, S>(&mut self, vendors: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyframe_vendors = Some(vendors.into_iter().map(Into::into).collect());
        self
    }

    /// Prefixes every rule selector with `prefix` followed by a space.
    pub fn prefix_selectors(&mut self, prefix: &str) -> &mut Self {
        let prefix = prefix.to_string();
        self.map_selectors(move |selector| format!("{prefix} {selector}"))
    }

    /// Registers a selector-mapping function.
    ///
    /// Functions run in registration order, each consuming the previous
    /// function's output, on rules that declare a selector.
    pub fn map_selectors<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.selector_maps.push(Box::new(f));
        self
    }

    /// Registers a value-mapping function, applied in registration order.
    ///
    /// Returning `None` removes the declaration. Declarations queued through
    /// [`RuleContext::add_property`] are appended to the rule after the
    /// registering function's pass and are visible to later functions.
    pub fn map<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&str, &str, &mut RuleContext) -> Option<String> + 'static,
    {
        self.value_maps.push(Box::new(f));
        self
    }

    /// Invokes `plugin` once with this stylesheet, for side-effecting bulk
    /// registration.
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Runs the full pipeline and returns the transformed CSS text.
    pub fn render(&self) -> Result<String, TransformError> {
        crate::pipeline::run(self)
    }
}
