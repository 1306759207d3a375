//! HTML and URL helpers used by the page renderers

use std::borrow::Cow;
use url::form_urlencoded;

/// Escapes text for safe inclusion in HTML element content and quoted
/// attribute values.
///
/// Returns the input unchanged (borrowed) if nothing needs escaping.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

/// Encodes a value for use as a URL query parameter value
pub(crate) fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encodes a value for use as a single URL path segment
///
/// Form encoding writes spaces as `+` and escapes a literal `+` as `%2B`,
/// so every remaining `+` stands for a space.
pub(crate) fn encode_path_segment(value: &str) -> String {
    encode_query_value(value).replace('+', "%20")
}

/// Capitalizes the first character of the given text
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
