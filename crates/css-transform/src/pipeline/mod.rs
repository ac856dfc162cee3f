//! The pipeline runner: the fixed pass order over a parsed sheet.
//!
//! Every render runs the same sequence: parse, vendor-expand `@keyframes`
//! blocks over the whole rule list, then for each style rule in order run
//! prefix injection, selector mapping, and value mapping. Keyframes rules
//! are left alone by the per-rule passes; their vendor clones already carry
//! their single-vendor prefixes from the expansion step.

pub(crate) mod keyframes;
pub(crate) mod mapping;
pub(crate) mod prefixes;

use css_codec::Rule;

use crate::error::TransformError;
use crate::stylesheet::Stylesheet;

pub(crate) fn run(config: &Stylesheet) -> Result<String, TransformError> {
    let sheet = css_codec::parse(&config.source)?;
    log::debug!("parsed {} rules", sheet.rules.len());

    let mut sheet =
        keyframes::expand_keyframes(&config.prefixes, config.keyframe_vendors.as_deref(), sheet);

    for rule in &mut sheet.rules {
        if let Rule::Style(style) = rule {
            prefixes::apply_property_prefixes(&config.prefixes, &mut style.declarations, None);
            mapping::apply_selector_maps(&config.selector_maps, style);
            mapping::apply_value_maps(&config.value_maps, style);
        }
    }

    Ok(css_codec::stringify(&sheet))
}
