//! Assembly of the final standalone HTML document.
//!
//! Every exporter ends here: body markup, a rendered stylesheet, optional
//! web-font links, and an optional script block become one complete HTML5
//! string with no external runtime dependencies.

use crate::css::Stylesheet;
use crate::escape;

/// Web-font stylesheets referenced by exported documents. Literal URLs
/// only; nothing is fetched at export time.
pub const FONT_STYLESHEETS: &[&str] = &[
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap",
    "https://fonts.googleapis.com/css2?family=Orbitron:wght@500;700&display=swap",
    "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;600&display=swap",
];

/// A document under construction
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    title: String,
    head_comment: Option<String>,
    body: String,
    stylesheet: Stylesheet,
    include_fonts: bool,
    script: Option<String>,
}

impl HtmlDocument {
    pub fn new(title: &str) -> Self {
        Self {
            title: escape::html(title),
            head_comment: None,
            body: String::new(),
            stylesheet: Stylesheet::new(),
            include_fonts: true,
            script: None,
        }
    }

    /// Attach a descriptive comment emitted near the top of the body.
    /// Used to document derivations the script below performs.
    pub fn comment(mut self, text: &str) -> Self {
        // "--" would terminate the comment early
        self.head_comment = Some(text.replace("--", "\u{2010}\u{2010}"));
        self
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = body;
        self
    }

    pub fn stylesheet(mut self, sheet: Stylesheet) -> Self {
        self.stylesheet = sheet;
        self
    }

    pub fn without_fonts(mut self) -> Self {
        self.include_fonts = false;
        self
    }

    /// Attach the client-side update script (source text, executed only by
    /// the eventual browser).
    pub fn script(mut self, source: String) -> Self {
        if source.trim().is_empty() {
            self.script = None;
        } else {
            self.script = Some(source);
        }
        self
    }

    /// Render the complete document string.
    pub fn render(&self) -> String {
        let font_links = if self.include_fonts {
            FONT_STYLESHEETS
                .iter()
                .map(|url| format!("  <link rel=\"stylesheet\" href=\"{}\">\n", url))
                .collect::<String>()
        } else {
            String::new()
        };
        let comment = self
            .head_comment
            .as_ref()
            .map(|c| format!("<!-- {} -->\n", c))
            .unwrap_or_default();
        let script_block = self
            .script
            .as_ref()
            .map(|s| format!("<script>\n{}\n</script>\n", s))
            .unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  <title>{}</title>\n{}  <style>\n{}  </style>\n</head>\n<body>\n{}{}\n{}</body>\n</html>\n",
            self.title,
            font_links,
            indent(&self.stylesheet.render(), "    "),
            comment,
            self.body,
            script_block,
        )
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|l| {
            if l.is_empty() {
                String::from("\n")
            } else {
                format!("{}{}\n", prefix, l)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Rule;

    #[test]
    fn test_document_shape() {
        let mut sheet = Stylesheet::new();
        sheet.rule(Rule::new("body").prop("margin", "0"));
        let doc = HtmlDocument::new("Clock")
            .stylesheet(sheet)
            .body("<main>hi</main>".to_string())
            .script("console.log('tick');".to_string())
            .render();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.trim_end().ends_with("</html>"));
        assert!(doc.contains("<title>Clock</title>"));
        assert!(doc.contains("fonts.googleapis.com"));
        assert!(doc.contains("<script>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let doc = HtmlDocument::new("<script>alert(1)</script>").render();
        assert!(!doc.contains("<title><script>"));
        assert!(doc.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_script_omits_block() {
        let doc = HtmlDocument::new("x").script(String::new()).render();
        assert!(!doc.contains("<script>"));
    }

    #[test]
    fn test_comment_cannot_break_out() {
        let doc = HtmlDocument::new("x").comment("a --> b -- c").render();
        assert!(!doc.contains("a --> b"));
    }
}
