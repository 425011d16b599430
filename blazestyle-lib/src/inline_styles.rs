use crate::error::StyleError;
use crate::style::blaze_styles::styles_to_string;
use crate::style::style_block::StyleBlock;

/// Marker attribute on every generated `<style>` element.
pub const INLINE_STYLES_ATTRIBUTE: &str = "data-blazestyle";

/// A style block destined for an inline `<style>` element.
#[derive(Debug, Clone)]
pub struct InlineStyles<'a> {
    pub block: &'a StyleBlock,
    /// CSP nonce, written as `nonce="..."` when present.
    pub nonce: Option<&'a str>,
}

impl<'a> InlineStyles<'a> {
    pub fn new(block: &'a StyleBlock) -> Self {
        InlineStyles { block, nonce: None }
    }

    pub fn nonce(mut self, nonce: &'a str) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// The CSS body goes in as-is, like `innerHTML`; only the nonce is escaped.
    pub fn render(&self) -> Result<String, StyleError> {
        let css = styles_to_string(self.block)?;
        let nonce = match self.nonce {
            Some(nonce) => format!(" nonce=\"{}\"", escape_attribute(nonce)),
            None => String::new(),
        };
        Ok(format!(
            "<style {}=\"inline\"{}>{}</style>",
            INLINE_STYLES_ATTRIBUTE, nonce, css
        ))
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::style_block::Declarations;

    fn block() -> StyleBlock {
        StyleBlock::new(".t").declarations(Declarations::new().with("color", "red"))
    }

    #[test]
    fn renders_without_nonce() {
        let block = block();
        assert_eq!(
            InlineStyles::new(&block).render().unwrap(),
            "<style data-blazestyle=\"inline\">.t {\n  color: red;\n}</style>"
        );
    }

    #[test]
    fn nonce_is_escaped() {
        let block = block();
        let html = InlineStyles::new(&block).nonce("a\"b&c").render().unwrap();
        assert!(html.starts_with("<style data-blazestyle=\"inline\" nonce=\"a&quot;b&amp;c\">"));
    }

    #[test]
    fn empty_block_renders_empty_element() {
        let block = StyleBlock::new(".t");
        assert_eq!(
            InlineStyles::new(&block).render().unwrap(),
            "<style data-blazestyle=\"inline\"></style>"
        );
    }
}
