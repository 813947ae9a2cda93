//! Text hygiene for stored and rendered values
//!
//! Two disciplines, applied at different edges:
//!
//! - [`sanitize_field_input`] runs once, when the merchant saves the field
//!   title. It strips markup spans and control bytes and collapses
//!   whitespace, so the product store never holds markup.
//! - [`escape_html`] runs at render time, every time. Shopper-submitted
//!   titles are stored raw and escaped on output, never on store, so
//!   repeated renders cannot double-escape.

/// Sanitize merchant input before storing it as product metadata
///
/// - Markup spans (`<` up to the matching `>`) are removed; an unclosed
///   `<` drops the remainder of the input
/// - Control characters are removed
/// - Whitespace runs collapse to a single space; the result is trimmed
///
/// An empty result is a valid stored value, not an absence.
#[must_use]
pub fn sanitize_field_input(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }
        if c == '<' {
            in_tag = true;
        } else if c.is_whitespace() {
            stripped.push(' ');
        } else if !c.is_control() {
            stripped.push(c);
        }
    }
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape a value for inclusion in an HTML fragment
///
/// Covers the five characters with meaning in markup and attribute
/// positions: `&`, `<`, `>`, `"`, `'`.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
