// Re-reads generated CSS with LightningCSS and flattens it into owned rules,
// so callers can check that what we emitted is a stylesheet a browser accepts.
use crate::error::StyleError;
use lightningcss::printer::PrinterOptions;
use lightningcss::rules::{style::StyleRule, CssRule};
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};
use lightningcss::traits::ToCss;
use log::debug;

#[derive(Debug, Default)]
pub struct OwnedStylesheet {
    pub rules: Vec<OwnedRule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnedRule {
    /// Printed media query for rules nested in `@media`, `None` at top level.
    pub guard: Option<String>,
    /// e.g. ".test", "#header"
    pub selectors: Vec<String>,
    pub declarations: Vec<OwnedDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnedDeclaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl OwnedStylesheet {
    /// Rules nested inside a guard.
    pub fn guarded(&self) -> impl Iterator<Item = &OwnedRule> {
        self.rules.iter().filter(|rule| rule.guard.is_some())
    }
}

/// Parse a CSS string and convert it to a fully-owned stylesheet.
///
/// Style rules at the top level and inside `@media` are kept; every other
/// at-rule (`@container`, `@supports`, `@font-face`, ...) is skipped.
pub fn parse_and_own_css(css_text: &str) -> Result<OwnedStylesheet, StyleError> {
    let sheet = LightningStyleSheet::parse(css_text, ParserOptions::default())
        .map_err(|e| StyleError::InvalidCss(e.to_string()))?;

    let mut owned = OwnedStylesheet::default();

    for rule in &sheet.rules.0 {
        match rule {
            CssRule::Style(style_rule) => {
                owned.rules.push(convert_style_rule(style_rule, None)?);
            }
            CssRule::Media(media_rule) => {
                let query = media_rule
                    .query
                    .to_css_string(PrinterOptions::default())
                    .map_err(|e| StyleError::InvalidCss(e.to_string()))?;
                for inner_rule in &media_rule.rules.0 {
                    if let CssRule::Style(sr) = inner_rule {
                        owned.rules.push(convert_style_rule(sr, Some(query.clone()))?);
                    }
                }
            }
            _ => {}
        }
    }

    debug!("re-parsed {} style rules", owned.rules.len());
    Ok(owned)
}

fn convert_style_rule(
    style_rule: &StyleRule<'_>,
    guard: Option<String>,
) -> Result<OwnedRule, StyleError> {
    let mut selectors = Vec::new();
    for selector in &style_rule.selectors.0 {
        if let Ok(sel_str) = selector.to_css_string(Default::default()) {
            selectors.push(sel_str);
        }
    }

    let block = &style_rule.declarations;
    let normal = block.declarations.iter().map(|p| (p, false));
    let important = block.important_declarations.iter().map(|p| (p, true));

    let mut declarations = Vec::new();
    for (property, important) in normal.chain(important) {
        let value = property
            .value_to_css_string(PrinterOptions::default())
            .map_err(|e| StyleError::InvalidCss(e.to_string()))?;
        declarations.push(OwnedDeclaration {
            property: property.property_id().name().to_string(),
            value,
            important,
        });
    }

    Ok(OwnedRule {
        guard,
        selectors,
        declarations,
    })
}
