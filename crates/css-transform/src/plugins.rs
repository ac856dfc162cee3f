//! Bundled plugins for [`Stylesheet::use_plugin`](crate::Stylesheet::use_plugin).

use crate::stylesheet::Stylesheet;

/// Returns a plugin that vendor-expands `transition` declarations.
///
/// For each vendor, a `{vendor}transition` declaration is appended with any
/// `transform` in the value rewritten to `{vendor}transform`, followed by
/// the unprefixed original; the original declaration is removed from its
/// old position.
///
/// ```rust
/// use css_transform::{plugins, transform};
///
/// let out = transform("#logo { transition: transform 1s ease; }")
///     .use_plugin(plugins::transitions(["-webkit-"]))
///     .render()
///     .expect("valid CSS");
///
/// assert!(out.contains("-webkit-transition: -webkit-transform 1s ease;"));
/// ```
pub fn transitions<I, S>(vendors: I) -> impl FnOnce(&mut Stylesheet)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let vendors: Vec<String> = vendors.into_iter().map(Into::into).collect();
    move |style: &mut Stylesheet| {
        style.map(move |property, value, ctx| {
            if property != "transition" {
                return Some(value.to_string());
            }
            for vendor in &vendors {
                ctx.add_property(
                    format!("{vendor}{property}"),
                    value.replace("transform", &format!("{vendor}transform")),
                );
            }
            ctx.add_property(property, value);
            None
        });
    }
}
