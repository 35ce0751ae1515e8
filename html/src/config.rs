use crate::{Attributes, Content, Node, NodeConfig};

impl NodeConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
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
        self.attributes.insert(key, value);
        self
    }
    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }
    /// Replaces the content with text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }
    /// Adds a child, replacing any text content
    pub fn child(mut self, child: Node) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Removes and returns the attribute `key`, preserving the order of the rest
    pub(crate) fn take_attr(&mut self, key: &str) -> Option<String> {
        self.attributes.0.shift_remove(key)
    }
}

impl From<NodeConfig> for Node {
    fn from(config: NodeConfig) -> Self {
        Node::from_config(config)
    }
}
