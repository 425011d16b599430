use crate::error::StyleError;
use crate::inline_styles::InlineStyles;
use crate::parser::style_json;
use crate::style::blaze_styles::styles_to_string;
use crate::style::style_block::StyleBlock;
use rayon::prelude::*;

pub mod blaze_style {
    use super::*;

    /// Style document (JSON) -> stylesheet text.
    pub fn generate(json: &str) -> Result<String, StyleError> {
        let blocks = style_json::parse_style_document(json)?;
        format_stylesheet(&blocks)
    }

    /// Format every block and join them with a blank line, in input order.
    /// Blocks that format to nothing are dropped so no double gaps appear.
    pub fn format_stylesheet(blocks: &[StyleBlock]) -> Result<String, StyleError> {
        // The earliest failing block decides the error.
        let results: Vec<Result<String, StyleError>> =
            blocks.par_iter().map(styles_to_string).collect();
        let formatted = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        Ok(formatted
            .into_iter()
            .filter(|css| !css.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    /// One inline `<style>` element per block, newline separated.
    pub fn render_style_tags(blocks: &[StyleBlock], nonce: Option<&str>) -> Result<String, StyleError> {
        let results: Vec<Result<String, StyleError>> = blocks
            .par_iter()
            .map(|block| {
                let inline = InlineStyles::new(block);
                match nonce {
                    Some(nonce) => inline.nonce(nonce).render(),
                    None => inline.render(),
                }
            })
            .collect();
        let tags = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(tags.join("\n"))
    }
}
