pub mod css_check;
pub mod style_json;
