pub mod blaze_styles;
pub mod property_name;
pub mod style_block;
