use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    /// Two distinct keys of one declaration mapping hyphenate to the same property.
    #[error("declarations for `{scope}`: `{first}` and `{second}` both map to `{property}`")]
    DeclarationKeyCollision {
        scope: String,
        first: String,
        second: String,
        property: String,
    },

    #[error("invalid style document: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("unsupported value for `{property}`: expected string, number or null, found {kind}")]
    UnsupportedValue { property: String, kind: &'static str },

    #[error("generated CSS did not parse: {0}")]
    InvalidCss(String),
}
