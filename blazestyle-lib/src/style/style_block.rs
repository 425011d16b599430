// src/style/style_block.rs (the input side of the formatter)
use indexmap::IndexMap;

/// Property name => value, in insertion order.
///
/// Keys may be camel-cased (`borderRadius`) or already hyphenated
/// (`border-radius`); values are opaque text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(IndexMap<String, String>);

impl Declarations {
    pub fn new() -> Self {
        Declarations(IndexMap::new())
    }

    /// Re-inserting an existing key replaces its value but keeps its position.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Declarations
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut declarations = Declarations::new();
        for (k, v) in iter {
            declarations.insert(k, v);
        }
        declarations
    }
}

/// A guarded variant of a block, e.g. `@media (max-width: 50em)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Written verbatim in front of the nested rule.
    pub guard: String,
    pub declarations: Declarations,
}

impl Condition {
    pub fn new(guard: impl Into<String>, declarations: Declarations) -> Self {
        Condition {
            guard: guard.into(),
            declarations,
        }
    }

    pub fn media(query: &str, declarations: Declarations) -> Self {
        Condition::new(format!("@media {}", query), declarations)
    }

    pub fn container(query: &str, declarations: Declarations) -> Self {
        Condition::new(format!("@container {}", query), declarations)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBlock {
    /// e.g. ".test", "#header", ":root"; copied into the output untouched.
    pub selector: String,
    pub declarations: Declarations,
    pub conditions: Vec<Condition>,
}

impl StyleBlock {
    pub fn new(selector: impl Into<String>) -> Self {
        StyleBlock {
            selector: selector.into(),
            declarations: Declarations::new(),
            conditions: Vec::new(),
        }
    }

    pub fn declarations(mut self, declarations: Declarations) -> Self {
        self.declarations = declarations;
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.conditions.is_empty()
    }
}
