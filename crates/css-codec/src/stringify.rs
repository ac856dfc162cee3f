//! Canonical serialization of the node types back into CSS text.
//!
//! The format is stable and is what transform output is compared against:
//! rules separated by one blank line, two-space indent for declarations,
//! keyframe steps nested one level deeper, and a trailing newline. A
//! vendored keyframes block serializes its vendor into the header
//! (`@-webkit-keyframes spin { ... }`).

use std::fmt;

use crate::ast::{Declaration, Keyframe, KeyframesRule, Rule, StyleRule, StyleSheet};

/// Serializes a stylesheet into the canonical text format.
pub fn stringify(sheet: &StyleSheet) -> String {
    let mut out = sheet.to_string();
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Style(rule) => rule.fmt(f),
            Rule::Keyframes(rule) => rule.fmt(f),
        }
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for decl in &self.declarations {
            writeln!(f, "  {decl}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for KeyframesRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@{}keyframes {} {{",
            self.vendor.as_deref().unwrap_or(""),
            self.name
        )?;
        for frame in &self.keyframes {
            write!(f, "{frame}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {} {{", self.values.join(", "))?;
        for decl in &self.declarations {
            writeln!(f, "    {decl}")?;
        }
        writeln!(f, "  }}")
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}
