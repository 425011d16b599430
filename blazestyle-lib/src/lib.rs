pub mod blaze_generate;
pub mod error;
pub mod inline_styles;
pub mod parser;
pub mod style;

pub use error::StyleError;
pub use style::blaze_styles::styles_to_string;
pub use style::style_block::{Condition, Declarations, StyleBlock};
