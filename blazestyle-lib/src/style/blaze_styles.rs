use crate::error::StyleError;
use crate::style::property_name::normalize_declarations;
use crate::style::style_block::{Declarations, StyleBlock};
use log::debug;
use std::fmt::Write;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Render a block as stylesheet text: the base rule (if it has any
/// declarations), then one guarded rule per condition, in order, separated
/// by a blank line.
///
/// ```text
/// .test {
///   padding: 2rem;
/// }
///
/// @media (max-width: 50em) {
///   .test {
///     padding: 1rem;
///   }
/// }
/// ```
///
/// Selectors, guards and values are not validated or escaped. The only
/// failure is a key collision after hyphenation.
pub fn styles_to_string(block: &StyleBlock) -> Result<String, StyleError> {
    let mut sections = Vec::with_capacity(block.conditions.len() + 1);

    if !block.declarations.is_empty() {
        sections.push(rule_to_string(&block.selector, &block.selector, &block.declarations, 0)?);
    }

    for condition in &block.conditions {
        let inner = rule_to_string(&condition.guard, &block.selector, &condition.declarations, 1)?;
        sections.push(format!("{} {{\n{}\n}}", condition.guard, inner));
    }

    debug!(
        "formatted `{}`: {} declarations, {} conditions",
        block.selector,
        block.declarations.len(),
        block.conditions.len()
    );

    Ok(sections.join(BLOCK_SEPARATOR))
}

/// One `selector { ... }` rule, `depth` levels deep (two spaces per level).
fn rule_to_string(
    scope: &str,
    selector: &str,
    declarations: &Declarations,
    depth: usize,
) -> Result<String, StyleError> {
    let indent = "  ".repeat(depth);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}{} {{", indent, selector);
    for (property, value) in normalize_declarations(scope, declarations)? {
        let _ = writeln!(out, "{}  {}: {};", indent, property, value);
    }
    let _ = write!(out, "{}}}", indent);

    Ok(out)
}
