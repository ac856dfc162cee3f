//! The current-rule context handed to value-mapping functions.

use css_codec::Declaration;

/// Handle onto the rule currently being processed.
///
/// Constructed by the pipeline for each value-mapping pass over a rule and
/// passed by `&mut` into every mapping invocation, so appends can only
/// happen while a rule is actually being processed. Nothing here outlives
/// the pass; concurrent renders each get their own contexts.
#[derive(Debug, Default)]
pub struct RuleContext {
    pending: Vec<Declaration>,
}

impl RuleContext {
    /// Queues `property: value` for append to the current rule.
    ///
    /// Queued declarations land at the tail of the rule's declaration list
    /// once the pass that queued them finishes; the pass itself never
    /// revisits them, later mapping functions see them.
    pub fn add_property(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.pending.push(Declaration::new(property, value));
    }

    pub(crate) fn take_pending(&mut self) -> Vec<Declaration> {
        std::mem::take(&mut self.pending)
    }
}
