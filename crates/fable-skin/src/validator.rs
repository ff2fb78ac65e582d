//! Skin content validation.
//!
//! Pure functions over the raw CSS text: a cheap well-formedness gate
//! and extraction of the `Name:` / `Author:` / `Version:` header fields.
//! Nothing here errors; absence is represented as `None` and the
//! registry decides what that means.

/// Header fields extracted from a skin's comment header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinMetadata {
    pub name: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
}

/// Cheap well-formedness check for a CSS payload.
///
/// Rejects text whose `{` and `}` counts differ, and any text containing
/// a literal `<` (markup has no business in a stylesheet).
pub fn is_well_formed_css(text: &str) -> bool {
    if text.contains('<') {
        return false;
    }
    let open = text.matches('{').count();
    let close = text.matches('}').count();
    open == close
}

/// Extract the header metadata fields from a skin.
///
/// Labels are case sensitive and colon separated; the value runs to the
/// end of the line. The first occurrence of each label wins. Captured
/// values are HTML-escaped before being returned, since they end up in
/// rendered list markup.
pub fn extract_metadata(text: &str) -> SkinMetadata {
    let mut meta = SkinMetadata::default();
    for line in text.lines() {
        if meta.name.is_none() {
            meta.name = field_value(line, "Name:");
        }
        if meta.author.is_none() {
            meta.author = field_value(line, "Author:");
        }
        if meta.version.is_none() {
            meta.version = field_value(line, "Version:");
        }
        if meta.name.is_some() && meta.author.is_some() && meta.version.is_some() {
            break;
        }
    }
    meta
}

/// Value of a `Label:` field on one line, HTML-escaped. Empty values
/// count as absent.
fn field_value(line: &str, label: &str) -> Option<String> {
    let idx = line.find(label)?;
    let value = line[idx + label.len()..].trim();
    if value.is_empty() {
        None
    } else {
        Some(escape_html(value))
    }
}

/// Minimal HTML entity escaping for header values.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
