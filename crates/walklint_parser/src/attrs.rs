//! Attribute list parsing.
//!
//! CommonMark has no block attributes, so the adapter recognizes a
//! `{key=value ...}` list in two positions: trailing on a heading line
//! (applies to the opened section) and as a standalone paragraph
//! (applies to the next sibling block). Values may be double-quoted.

/// Parses a full `{key=value ...}` attribute list.
///
/// Returns `None` when the text is not a well-formed list; every token
/// must be a `key=value` pair, so ordinary brace-wrapped prose is left
/// alone.
pub(crate) fn parse_attribute_list(text: &str) -> Option<Vec<(String, String)>> {
    let inner = text.trim().strip_prefix('{')?.strip_suffix('}')?;
    if inner.contains(['{', '}']) {
        return None;
    }

    let mut attributes = Vec::new();
    for token in inner.split_whitespace() {
        let (key, value) = token.split_once('=')?;
        if key.is_empty() {
            return None;
        }
        attributes.push((key.to_string(), unquote(value).to_string()));
    }

    if attributes.is_empty() {
        return None;
    }
    Some(attributes)
}

/// Splits a trailing attribute list off a heading title.
///
/// `"Install the tool {time=15}"` becomes `("Install the tool",
/// [("time", "15")])`. Titles without a valid trailing list pass through
/// unchanged.
pub(crate) fn split_attribute_suffix(title: &str) -> (String, Vec<(String, String)>) {
    let trimmed = title.trim_end();
    if trimmed.ends_with('}') {
        if let Some(start) = trimmed.rfind('{') {
            if let Some(attributes) = parse_attribute_list(&trimmed[start..]) {
                return (trimmed[..start].trim_end().to_string(), attributes);
            }
        }
    }
    (title.to_string(), Vec::new())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
