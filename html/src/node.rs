use crate::error::{Error, Result};
use crate::{Attributes, Content, ContentItem, ContentKind, Node, NodeConfig, DEFAULT_TAG};
use tracing::warn;

impl Node {
    /// Creates an element with no classes, no attributes and an empty child list
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: tag.as_ref().to_lowercase(),
            class_names: vec![],
            attributes: Attributes::empty(),
            content: Content::default(),
        }
    }

    /// Creates an element holding only `text`
    pub fn with_text(tag: impl AsRef<str>, text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::new(tag)
        }
    }

    /// Creates an element holding `children`, in order
    pub fn with_children(tag: impl AsRef<str>, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            content: Content::Children(children.into_iter().collect()),
            ..Self::new(tag)
        }
    }

    pub fn from_config(config: NodeConfig) -> Self {
        let tag = config.tag.as_deref().unwrap_or(DEFAULT_TAG);
        Self {
            tag: tag.to_lowercase(),
            class_names: config.class_names,
            attributes: config.attributes,
            content: config.content,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class_names.push(class.into());
        self
    }
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_names.extend(classes.into_iter().map(Into::into));
        self
    }
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }
    pub fn tag(&self) -> &str {
        &self.tag
    }
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key, value);
    }

    /// Appends text or a child node. Text grows text and nodes grow a child list;
    /// mixing the two fails and leaves the node untouched.
    pub fn append_content(&mut self, item: impl Into<ContentItem>) -> Result<()> {
        let item = item.into();
        match (&mut self.content, item) {
            (Content::Text(text), ContentItem::Text(more)) => text.push_str(&more),
            (Content::Children(children), ContentItem::Node(node)) => children.push(node),
            (content @ Content::Empty, item) => {
                *content = match item {
                    ContentItem::Text(text) => Content::Text(text),
                    ContentItem::Node(node) => Content::Children(vec![node]),
                }
            }
            (content, item) => {
                let err = Error::ContentTypeConflict {
                    tag: self.tag.clone(),
                    existing: content.kind(),
                    attempted: item.kind(),
                };
                warn!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Empty => ContentKind::Empty,
            Content::Text(_) => ContentKind::Text,
            Content::Children(_) => ContentKind::Children,
        }
    }
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Text(_) => ContentKind::Text,
            ContentItem::Node(_) => ContentKind::Children,
        }
    }
}

impl From<&str> for ContentItem {
    fn from(s: &str) -> Self {
        ContentItem::Text(s.to_string())
    }
}

impl From<String> for ContentItem {
    fn from(s: String) -> Self {
        ContentItem::Text(s)
    }
}

impl From<Node> for ContentItem {
    fn from(node: Node) -> Self {
        ContentItem::Node(node)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<Vec<Node>> for Content {
    fn from(children: Vec<Node>) -> Self {
        Content::Children(children)
    }
}

#[cfg(test)]
#[test]
fn test_tag_is_lowercased() {
    assert_eq!(Node::new("DiV").tag(), "div");
    assert_eq!(Node::new("INPUT").tag(), "input");
    let node = Node::from_config(NodeConfig::new().tag("SeLeCt"));
    assert_eq!(node.tag(), "select");
    assert_eq!(Node::from_config(NodeConfig::new()).tag(), "div");
}

#[cfg(test)]
#[test]
fn test_append_matrix() {
    let mut text = Node::with_text("p", "hello");
    assert!(text.append_content(", world").is_ok());
    assert_eq!(text.content(), &Content::Text("hello, world".into()));

    let mut list = Node::new("div");
    assert!(list.append_content(Node::new("span")).is_ok());
    assert!(list.append_content(Node::new("a")).is_ok());
    if let Content::Children(children) = list.content() {
        let tags: Vec<&str> = children.iter().map(Node::tag).collect();
        assert_eq!(tags, vec!["span", "a"]);
    } else {
        panic!("expected children");
    }
}

#[cfg(test)]
#[test]
fn test_text_node_keeps_text_when_child_is_refused() {
    let mut node = Node::with_text("p", "keep me");
    assert!(node.append_content(Node::new("b")).is_err());
    assert_eq!(node.content(), &Content::Text("keep me".into()));
    assert_eq!(node.render(), "<p>\n  keep me\n</p>\n");

    let mut node = Node::with_children("ul", [Node::new("li")]);
    assert!(node.append_content("text").is_err());
    assert_eq!(node.render(), "<ul>\n  <li></li>\n</ul>\n");
}
