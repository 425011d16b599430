use crate::error::StyleError;
use crate::style::style_block::Declarations;
use log::{trace, warn};
use std::borrow::Cow;
use std::collections::HashMap;

/// `borderRadius` -> `border-radius`, `WebkitTransition` -> `-webkit-transition`.
///
/// Keys with no uppercase letters and custom properties (`--brand-Color`)
/// come back borrowed and unchanged.
pub fn camel_to_kebab(key: &str) -> Cow<'_, str> {
    if key.starts_with("--") || !key.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(key);
    }

    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Hyphenate every key of `declarations`, keeping insertion order.
///
/// `scope` only labels the error: the selector for base declarations, the
/// guard for conditional ones.
pub fn normalize_declarations<'a>(
    scope: &str,
    declarations: &'a Declarations,
) -> Result<Vec<(Cow<'a, str>, &'a str)>, StyleError> {
    let mut seen: HashMap<Cow<'a, str>, &'a str> = HashMap::with_capacity(declarations.len());
    let mut normalized = Vec::with_capacity(declarations.len());

    for (key, value) in declarations.iter() {
        let property = camel_to_kebab(key);
        trace!("{} -> {}", key, property);

        if let Some(first) = seen.get(&property) {
            warn!(
                "`{}` and `{}` collide on `{}` in `{}`",
                first, key, property, scope
            );
            return Err(StyleError::DeclarationKeyCollision {
                scope: scope.to_string(),
                first: first.to_string(),
                second: key.to_string(),
                property: property.into_owned(),
            });
        }
        seen.insert(property.clone(), key);
        normalized.push((property, value));
    }

    Ok(normalized)
}
