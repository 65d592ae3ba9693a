//! Input sanitization applied to free-text fields before storage or display
//!
//! Only trimming and HTML-escaping are performed. Escaping is not idempotent:
//! an already escaped `&amp;` becomes `&amp;amp;`.

/// Trim surrounding whitespace, then escape HTML-significant characters
pub fn sanitize_text(raw: &str) -> String {
    escape_html(raw.trim())
}

/// Escape `<`, `>`, `&`, `'` and `"` as HTML entities
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
