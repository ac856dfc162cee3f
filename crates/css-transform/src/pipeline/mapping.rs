//! Selector and value mapping passes.

use css_codec::{Declaration, StyleRule};

use crate::context::RuleContext;
use crate::stylesheet::{SelectorMapFn, ValueMapFn};

/// Applies the registered selector maps in registration order, each
/// consuming the previous function's output.
pub(crate) fn apply_selector_maps(maps: &[SelectorMapFn], rule: &mut StyleRule) {
    for map in maps {
        rule.selector = map(&rule.selector);
    }
}

/// Applies the registered value maps in registration order.
///
/// Each function gets one rebuild pass over the rule's declaration list:
/// `Some` replaces the declaration's value, `None` drops the declaration.
/// Declarations queued through [`RuleContext::add_property`] land at the
/// tail once the pass finishes, so a pass never revisits its own appends
/// while later passes see them.
pub(crate) fn apply_value_maps(maps: &[ValueMapFn], rule: &mut StyleRule) {
    for map in maps {
        let mut ctx = RuleContext::default();
        let mut kept = Vec::with_capacity(rule.declarations.len());

        for decl in rule.declarations.drain(..) {
            if let Some(value) = map(&decl.property, &decl.value, &mut ctx) {
                kept.push(Declaration::new(decl.property, value));
            }
        }

        kept.extend(ctx.take_pending());
        rule.declarations = kept;
    }
}
