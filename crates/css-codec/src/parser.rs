//! CSS parsing into the codec's node types.
//!
//! The grammar is the subset the transform pipeline operates on:
//!
//! - Style rules: `<selector-text> { <declaration>* }`
//! - Keyframes blocks: `@[vendor-]keyframes <name> { <keyframe>* }`
//! - Declarations: `<ident>: <value>;` (the final `;` may be omitted)
//!
//! Selector text is treated as opaque: everything up to the opening brace,
//! with whitespace runs collapsed. Block comments (`/* */`) are stripped in
//! a preprocessing pass before rule parsing.

use crate::CssError;
use crate::ast::{Declaration, Keyframe, KeyframesRule, Rule, StyleRule, StyleSheet};

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::{
    IResult,
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, preceded, tuple},
};

/// Parses a full stylesheet.
pub fn parse(source: &str) -> Result<StyleSheet, CssError> {
    let stripped = strip_comments(source);

    let (remaining, rules) =
        many0(parse_rule)(stripped.as_str()).map_err(|e| CssError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(CssError::InvalidSyntax(format!(
            "unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    Ok(StyleSheet::new(rules))
}

/// Top-level parser for a single rule.
pub fn parse_rule(input: &str) -> IResult<&str, Rule> {
    preceded(
        multispace0,
        alt((
            map(parse_keyframes, Rule::Keyframes),
            map(parse_style_rule, Rule::Style),
        )),
    )(input)
}

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn parse_style_rule(input: &str) -> IResult<&str, StyleRule> {
    let (input, selector) = parse_selector_text(input)?;
    let (input, declarations) = parse_declaration_block(input)?;
    Ok((input, StyleRule::new(selector, declarations)))
}

/// Consumes selector text up to the opening brace.
///
/// Whitespace runs (including newlines in multi-line selector lists) are
/// collapsed to single spaces so the selector serializes on one line.
fn parse_selector_text(input: &str) -> IResult<&str, String> {
    let (input, raw) = take_while1(|c: char| c != '{' && c != '}')(input)?;

    let selector = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if selector.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }

    Ok((input, selector))
}

/// Parses a `@keyframes` block header and body. A vendored header such as
/// `@-webkit-keyframes` yields `vendor: Some("-webkit-")`.
fn parse_keyframes(input: &str) -> IResult<&str, KeyframesRule> {
    let (input, _) = char('@')(input)?;
    let (input, vendor) = opt(parse_vendor)(input)?;
    let (input, _) = tag("keyframes")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = multispace0(input)?;

    let (input, keyframes) = delimited(
        char('{'),
        many0(parse_keyframe),
        preceded(multispace0, char('}')),
    )(input)?;

    Ok((
        input,
        KeyframesRule::new(name.to_string(), vendor.map(str::to_string), keyframes),
    ))
}

/// Parses a vendor prefix such as `-webkit-`, including both dashes.
fn parse_vendor(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('-'),
        take_while1(|c: char| c.is_alphanumeric()),
        char('-'),
    )))(input)
}

/// Parses one keyframe step: a value list plus its declaration block.
fn parse_keyframe(input: &str) -> IResult<&str, Keyframe> {
    let (input, _) = multispace0(input)?;
    let (input, values) = separated_list1(
        tuple((multispace0, char(','), multispace0)),
        parse_keyframe_value,
    )(input)?;
    let (input, _) = multispace0(input)?;
    let (input, declarations) = parse_declaration_block(input)?;

    Ok((
        input,
        Keyframe::new(
            values.into_iter().map(str::to_string).collect(),
            declarations,
        ),
    ))
}

/// A keyframe step value: `from`, `to`, or a percentage like `66.6%`.
fn parse_keyframe_value(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '.' || c == '%')(input)
}

fn parse_declaration_block(input: &str) -> IResult<&str, Vec<Declaration>> {
    delimited(
        char('{'),
        many0(parse_declaration),
        preceded(multispace0, char('}')),
    )(input)
}

/// Parses a single `property: value;` declaration. The value runs to the
/// next `;` or the end of the block, trailing whitespace trimmed.
pub fn parse_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(':')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, value) = take_while1(|c: char| c != ';' && c != '}')(input)?;
    let (input, _) = opt(char(';'))(input)?;

    Ok((input, Declaration::new(property, value.trim_end())))
}

/// Replaces `/* */` comments with a single space. An unterminated comment
/// runs to the end of the input.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        out.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("a /* b */ c"), "a   c");
        assert_eq!(strip_comments("no comments"), "no comments");
        assert_eq!(strip_comments("a /* unterminated"), "a  ");
    }

    #[test]
    fn test_parse_vendor() {
        let (rest, vendor) = parse_vendor("-webkit-keyframes").unwrap();
        assert_eq!(vendor, "-webkit-");
        assert_eq!(rest, "keyframes");
        assert!(parse_vendor("keyframes").is_err());
    }

    #[test]
    fn test_parse_declaration() {
        let (rest, decl) = parse_declaration("border-radius: 4px;").unwrap();
        assert_eq!(decl, Declaration::new("border-radius", "4px"));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parse_declaration_without_semicolon() {
        let (rest, decl) = parse_declaration("color: red}").unwrap();
        assert_eq!(decl, Declaration::new("color", "red"));
        assert_eq!(rest, "}");
    }

    #[test]
    fn test_selector_whitespace_collapses() {
        let sheet = parse("h1,\n   h2 { color: red; }").unwrap();
        assert_eq!(sheet.rules[0].selector(), Some("h1, h2"));
    }

    #[test]
    fn test_trailing_garbage_is_an_error() {
        assert!(parse("button { color: red; } !!!").is_err());
    }
}
