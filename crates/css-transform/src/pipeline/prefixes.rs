//! Declaration prefix injection.

use css_codec::Declaration;

use crate::stylesheet::PropertyPrefix;

/// Injects vendor-prefixed copies of configured properties at the head of
/// `declarations`.
///
/// For each prefix rule in registration order, the value of the **first**
/// declaration matching the rule's property is captured, then one
/// `{vendor}{property}` copy per vendor is inserted at index 0, vendors in
/// configured order. Repeated head insertion means the last-registered rule
/// and, within a rule, the last-listed vendor end up nearest the top; the
/// rendered output depends on this exact ordering.
///
/// A missing target property is a silent no-op. When `only` is set (vendor
/// clones of `@keyframes` blocks), vendors other than `only` are skipped.
///
/// Operates on a bare declaration list so style rules and keyframe steps
/// share the same routine.
pub(crate) fn apply_property_prefixes(
    prefixes: &[PropertyPrefix],
    declarations: &mut Vec<Declaration>,
    only: Option<&str>,
) {
    for prefix in prefixes {
        let value = declarations
            .iter()
            .find(|decl| decl.property == prefix.property)
            .map(|decl| decl.value.clone());
        let Some(value) = value else { continue };

        for vendor in &prefix.vendors {
            if only.is_some_and(|only| vendor.as_str() != only) {
                continue;
            }
            declarations.insert(
                0,
                Declaration::new(format!("{vendor}{}", prefix.property), value.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(property: &str, vendors: &[&str]) -> PropertyPrefix {
        PropertyPrefix {
            property: property.to_string(),
            vendors: vendors.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn decls(pairs: &[(&str, &str)]) -> Vec<Declaration> {
        pairs
            .iter()
            .map(|(p, v)| Declaration::new(*p, *v))
            .collect()
    }

    #[test]
    fn test_head_insertion_reverses_vendor_order() {
        let mut list = decls(&[("border-radius", "4px")]);
        apply_property_prefixes(
            &[prefix("border-radius", &["-webkit-", "-moz-"])],
            &mut list,
            None,
        );
        assert_eq!(
            list,
            decls(&[
                ("-moz-border-radius", "4px"),
                ("-webkit-border-radius", "4px"),
                ("border-radius", "4px"),
            ])
        );
    }

    #[test]
    fn test_first_matching_declaration_wins() {
        let mut list = decls(&[("color", "red"), ("color", "blue")]);
        apply_property_prefixes(&[prefix("color", &["-x-"])], &mut list, None);
        assert_eq!(list[0], Declaration::new("-x-color", "red"));
    }

    #[test]
    fn test_only_filter_skips_other_vendors() {
        let mut list = decls(&[("border-radius", "4px")]);
        apply_property_prefixes(
            &[prefix("border-radius", &["-webkit-", "-moz-"])],
            &mut list,
            Some("-moz-"),
        );
        assert_eq!(
            list,
            decls(&[("-moz-border-radius", "4px"), ("border-radius", "4px")])
        );
    }

    #[test]
    fn test_missing_property_is_a_no_op() {
        let mut list = decls(&[("color", "red")]);
        apply_property_prefixes(&[prefix("border-radius", &["-webkit-"])], &mut list, None);
        assert_eq!(list, decls(&[("color", "red")]));
    }
}
