//! Vendor expansion of `@keyframes` blocks.

use css_codec::{Rule, StyleSheet};

use crate::pipeline::prefixes::apply_property_prefixes;
use crate::stylesheet::PropertyPrefix;

/// Duplicates every `@keyframes` block once per configured vendor.
///
/// For a keyframes rule at position *p*, the output carries one deep clone
/// per vendor in configured order, each tagged with its vendor, followed by
/// the untouched original, all at position *p*. Inside a clone, every
/// keyframe step's declarations get the property prefixer restricted to
/// that clone's vendor, so a `-webkit-` clone never carries a `-moz-`
/// declaration. Clones are independent copies; prefixing one never leaks
/// into another or into the original.
///
/// Without a configured vendor list this is the identity transform.
/// Non-keyframes rules pass through in place.
pub(crate) fn expand_keyframes(
    prefixes: &[PropertyPrefix],
    vendors: Option<&[String]>,
    sheet: StyleSheet,
) -> StyleSheet {
    let Some(vendors) = vendors else {
        return sheet;
    };

    let mut rules = Vec::with_capacity(sheet.rules.len());
    for rule in sheet.rules {
        match rule {
            Rule::Keyframes(block) => {
                log::debug!(
                    "expanding @keyframes {} into {} vendor clones",
                    block.name,
                    vendors.len()
                );
                for vendor in vendors {
                    let mut clone = block.clone();
                    clone.vendor = Some(vendor.clone());
                    for frame in &mut clone.keyframes {
                        apply_property_prefixes(prefixes, &mut frame.declarations, Some(vendor));
                    }
                    rules.push(Rule::Keyframes(clone));
                }
                rules.push(Rule::Keyframes(block));
            }
            rule => rules.push(rule),
        }
    }

    StyleSheet::new(rules)
}
