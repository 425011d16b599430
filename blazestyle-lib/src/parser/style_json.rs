//! Style documents: style blocks written as JSON.
//!
//! A document is either one block object or an array of them:
//!
//! ```json
//! {
//!   "selector": ".test",
//!   "styles": { "padding": "2rem", "borderRadius": 5 },
//!   "media": [{ "query": "(max-width: 50em)", "styles": { "padding": "1rem" } }]
//! }
//! ```
//!
//! Key order in `styles` objects is kept as written.

use crate::error::StyleError;
use crate::style::style_block::{Condition, Declarations, StyleBlock};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockInput {
    selector: String,
    #[serde(default)]
    styles: IndexMap<String, Value>,
    #[serde(default)]
    conditions: Vec<GuardInput>,
    #[serde(default)]
    media: Vec<QueryInput>,
    #[serde(default)]
    container: Vec<QueryInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GuardInput {
    guard: String,
    #[serde(default)]
    styles: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QueryInput {
    query: String,
    #[serde(default)]
    styles: IndexMap<String, Value>,
}

/// Parse a style document into blocks, in document order.
pub fn parse_style_document(json: &str) -> Result<Vec<StyleBlock>, StyleError> {
    // Going through `serde_json::Value` would sort object keys, so pick the
    // shape from the first token instead.
    let inputs: Vec<BlockInput> = if json.trim_start().starts_with('[') {
        serde_json::from_str(json)?
    } else {
        vec![serde_json::from_str(json)?]
    };

    let blocks = inputs
        .into_iter()
        .map(into_style_block)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("parsed {} style blocks", blocks.len());
    Ok(blocks)
}

fn into_style_block(input: BlockInput) -> Result<StyleBlock, StyleError> {
    let mut block = StyleBlock::new(input.selector).declarations(into_declarations(input.styles)?);

    for item in input.conditions {
        block = block.condition(Condition::new(item.guard, into_declarations(item.styles)?));
    }
    for item in input.media {
        block = block.condition(Condition::media(&item.query, into_declarations(item.styles)?));
    }
    for item in input.container {
        block = block.condition(Condition::container(&item.query, into_declarations(item.styles)?));
    }

    Ok(block)
}

fn into_declarations(styles: IndexMap<String, Value>) -> Result<Declarations, StyleError> {
    let mut declarations = Declarations::new();
    for (property, value) in styles {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(_) => return Err(unsupported(property, "boolean")),
            Value::Array(_) => return Err(unsupported(property, "array")),
            Value::Object(_) => return Err(unsupported(property, "object")),
        };
        declarations.insert(property, text);
    }
    Ok(declarations)
}

fn unsupported(property: String, kind: &'static str) -> StyleError {
    StyleError::UnsupportedValue { property, kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_keeps_key_order() {
        let blocks = parse_style_document(
            r#"{ "selector": ".t", "styles": { "zIndex": 3, "color": "red", "alignItems": "center" } }"#,
        )
        .unwrap();

        assert_eq!(blocks.len(), 1);
        let pairs: Vec<_> = blocks[0].declarations.iter().collect();
        assert_eq!(
            pairs,
            vec![("zIndex", "3"), ("color", "red"), ("alignItems", "center")]
        );
    }

    #[test]
    fn array_document() {
        let blocks = parse_style_document(
            r#"[ { "selector": ".a" }, { "selector": ".b", "styles": { "opacity": 0.5 } } ]"#,
        )
        .unwrap();

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].is_empty());
        assert_eq!(blocks[1].declarations.get("opacity"), Some("0.5"));
    }

    #[test]
    fn conditions_then_media_then_container() {
        let blocks = parse_style_document(
            r#"{
                "selector": ".t",
                "container": [{ "query": "(min-width: 30em)", "styles": { "color": "red" } }],
                "media": [{ "query": "(max-width: 50em)" }],
                "conditions": [{ "guard": "@supports (display: grid)" }]
            }"#,
        )
        .unwrap();

        let guards: Vec<&str> = blocks[0].conditions.iter().map(|c| c.guard.as_str()).collect();
        assert_eq!(
            guards,
            vec![
                "@supports (display: grid)",
                "@media (max-width: 50em)",
                "@container (min-width: 30em)",
            ]
        );
    }

    #[test]
    fn null_values_are_skipped() {
        let blocks =
            parse_style_document(r#"{ "selector": ".t", "styles": { "color": null, "margin": 0 } }"#)
                .unwrap();
        let pairs: Vec<_> = blocks[0].declarations.iter().collect();
        assert_eq!(pairs, vec![("margin", "0")]);
    }

    #[test]
    fn boolean_value_is_rejected() {
        let err = parse_style_document(r#"{ "selector": ".t", "styles": { "hidden": true } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            StyleError::UnsupportedValue { ref property, kind: "boolean" } if property == "hidden"
        ));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = parse_style_document(r#"{ "selector": ".t", "style": {} }"#).unwrap_err();
        assert!(matches!(err, StyleError::InvalidInput(_)));
    }
}
