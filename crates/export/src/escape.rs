//! Escaping at the interpolation boundary.
//!
//! Every piece of user-supplied free text crosses exactly one of these
//! functions before it is spliced into an exported document. Enum-backed
//! values never pass through here; they are validated against their known
//! wire strings instead.

/// Escape text for interpolation into HTML content or a double-quoted
/// HTML attribute: `& < > " '`.
pub fn html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a single-quoted JavaScript string literal.
///
/// Also breaks `</script>` so the emitted script block cannot be closed
/// early from inside a string.
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3c"),
            '>' => out.push_str("\\x3e"),
            _ => out.push(c),
        }
    }
    out
}

/// Make a serialized JSON literal safe to inline in a `<script>` block.
///
/// serde_json leaves `<` alone, so user text containing `</script>` would
/// close the script element at HTML-parse time, before any JS runs.
/// `\u003c` is a valid JSON escape for `<` and parses to the identical
/// string value.
pub fn script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Sanitize a URL for use in an `href`/`src` attribute. Only http(s) and
/// mailto schemes (or scheme-relative/relative paths) survive; anything
/// else, `javascript:` included, collapses to `#`.
pub fn url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();
    let allowed = lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with("mailto:")
        || (!lower.contains(':') && !trimmed.is_empty());
    if allowed {
        html(trimmed)
    } else {
        "#".to_string()
    }
}

/// Sanitize a string destined for a CSS value position (font stacks).
/// Strips characters that could terminate the declaration or the style
/// block; does not try to be a CSS parser.
pub fn css_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';' | '"' | '\\'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escapes_all_five() {
        assert_eq!(
            html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_html_neutralizes_script_tag() {
        let out = html("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_js_string_cannot_close_script_block() {
        let out = js_string("</script><script>alert(1)</script>");
        assert!(!out.contains("</script>"));
        assert!(!out.contains('<'));
    }

    #[test]
    fn test_script_json_breaks_closing_tag() {
        let json = serde_json::to_string(&["</script><script>alert(1)</script>"]).unwrap();
        let safe = script_json(&json);
        assert!(!safe.contains('<'));
        assert_eq!(
            serde_json::from_str::<Vec<String>>(&safe).unwrap(),
            vec!["</script><script>alert(1)</script>"]
        );
    }

    #[test]
    fn test_url_blocks_javascript_scheme() {
        assert_eq!(url("javascript:alert(1)"), "#");
        assert_eq!(url("JaVaScRiPt:alert(1)"), "#");
        assert_eq!(url("data:text/html,x"), "#");
        assert_eq!(url("https://example.com/a?b=1&c=2"), "https://example.com/a?b=1&amp;c=2");
    }

    #[test]
    fn test_css_value_strips_breakout_chars() {
        assert_eq!(css_value("Inter, sans-serif"), "Inter, sans-serif");
        assert_eq!(css_value("x;}</style><script>"), "x/stylescript");
    }
}
