//! Typed CSS rule tree and serializer.
//!
//! Exporters build stylesheets as {selector, property, value} data and one
//! serializer renders them, so interpolation into CSS text happens in a
//! single place instead of at every call site.

use std::fmt::Write;

/// One `selector { property: value; ... }` rule
#[derive(Debug, Clone)]
pub struct Rule {
    selector: String,
    declarations: Vec<(String, String)>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration. Chainable.
    pub fn prop(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push((property.to_string(), value.into()));
        self
    }

    /// Append a declaration only when `value` is `Some`.
    pub fn prop_opt(mut self, property: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(v) = value {
            self.declarations.push((property.to_string(), v.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn render_into(&self, out: &mut String, indent: &str) {
        let _ = writeln!(out, "{}{} {{", indent, self.selector);
        for (prop, value) in &self.declarations {
            let _ = writeln!(out, "{}  {}: {};", indent, prop, value);
        }
        let _ = writeln!(out, "{}}}", indent);
    }
}

/// A raw block kept verbatim (keyframes, font-face)
#[derive(Debug, Clone)]
struct RawBlock(String);

#[derive(Debug, Clone)]
enum Item {
    Rule(Rule),
    Raw(RawBlock),
    Media { query: String, rules: Vec<Rule> },
}

/// Ordered collection of rules, raw blocks, and media-query groups
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    items: Vec<Item>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        if !rule.is_empty() {
            self.items.push(Item::Rule(rule));
        }
        self
    }

    /// Add a verbatim block. Only static, compile-time CSS goes through
    /// here (keyframes); never user-influenced text.
    pub fn raw(&mut self, block: &str) -> &mut Self {
        self.items.push(Item::Raw(RawBlock(block.trim().to_string())));
        self
    }

    /// Add a group of rules under a media query.
    pub fn media(&mut self, query: impl Into<String>, rules: Vec<Rule>) -> &mut Self {
        let rules: Vec<Rule> = rules.into_iter().filter(|r| !r.is_empty()).collect();
        if !rules.is_empty() {
            self.items.push(Item::Media {
                query: query.into(),
                rules,
            });
        }
        self
    }

    /// Serialize the whole sheet.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                Item::Rule(rule) => rule.render_into(&mut out, ""),
                Item::Raw(RawBlock(text)) => {
                    out.push_str(text);
                    out.push('\n');
                }
                Item::Media { query, rules } => {
                    let _ = writeln!(out, "@media {} {{", query);
                    for rule in rules {
                        rule.render_into(&mut out, "  ");
                    }
                    out.push_str("}\n");
                }
            }
        }
        out
    }
}
