use indexmap::IndexMap;

/// A single HTML element. Owns its children; there are no parent links.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Node {
    tag: String,
    class_names: Vec<String>,
    attributes: Attributes,
    content: Content,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Content {
    Empty,
    Text(String),
    Children(Vec<Node>),
}

impl Default for Content {
    fn default() -> Self {
        Content::Children(vec![])
    }
}

/// Something that can be appended to a [`Node`]'s content
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum ContentItem {
    Text(String),
    Node(Node),
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum ContentKind {
    Empty,
    Text,
    Children,
}

/// Attribute name -> value, kept in insertion order so output is reproducible
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Attributes(pub IndexMap<String, String>);

impl Attributes {
    pub fn empty() -> Self {
        Self(IndexMap::new())
    }
    /// Upserts `key`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Upserts every pair of `other`, in order
    pub fn extend(&mut self, other: Attributes) {
        self.0.extend(other.0);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[macro_export]
macro_rules! attributes {
    ($($k:expr => $v:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut attributes = $crate::Attributes::empty();
        $(attributes.insert($k.to_string(), $v.to_string());)*
        attributes
    }};
}

/// Construction options for a [`Node`]. `tag`, `class_names` and `content` are
/// reserved; everything else is an attribute.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct NodeConfig {
    pub tag: Option<String>,
    pub class_names: Vec<String>,
    pub attributes: Attributes,
    pub content: Content,
}

pub mod components;
mod config;
mod document;
mod error;
mod node;
mod render;
pub mod theme;
#[cfg(test)]
mod tests;

pub use document::Document;
pub use error::{Error, Result};
pub use render::{escape, RenderOptions};

/// The tag used when a caller does not pick one
pub const DEFAULT_TAG: &str = "div";
