use crate::{Content, Node};
use std::borrow::Cow;
use std::fmt;

const INDENT: &str = "  ";

/// Controls how a tree is turned into markup. The default emits text and attribute
/// values exactly as given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `& < > " '` in text, class names and attribute values
    pub escape: bool,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self { escape: true }
    }

    fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.escape {
            escape(s)
        } else {
            Cow::Borrowed(s)
        }
    }
}

/// Replaces the characters that can break out of text or a quoted attribute value
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub(crate) fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

pub(crate) fn push_text_line(out: &mut String, text: &str, options: &RenderOptions, depth: usize) {
    push_indent(out, depth);
    out.push_str(&options.apply(text));
    out.push('\n');
}

impl Node {
    /// Serializes this tree with no surrounding indentation
    pub fn render(&self) -> String {
        self.render_at(0)
    }

    pub fn render_at(&self, depth: usize) -> String {
        self.render_with(&RenderOptions::default(), depth)
    }

    pub fn render_with(&self, options: &RenderOptions, depth: usize) -> String {
        let mut out = String::new();
        self.write_html(&mut out, options, depth);
        out
    }

    fn write_html(&self, out: &mut String, options: &RenderOptions, depth: usize) {
        push_indent(out, depth);
        self.write_start_tag(out, options);
        match self.content() {
            // Empty elements collapse onto one line, void elements included
            Content::Empty => {}
            Content::Children(children) if children.is_empty() => {}
            Content::Text(text) => {
                out.push('\n');
                push_text_line(out, text, options, depth + 1);
                push_indent(out, depth);
            }
            Content::Children(children) => {
                out.push('\n');
                for child in children {
                    child.write_html(out, options, depth + 1);
                }
                push_indent(out, depth);
            }
        }
        self.write_end_tag(out);
        out.push('\n');
    }

    /// Writes `<tag class="..." key="value">`
    pub(crate) fn write_start_tag(&self, out: &mut String, options: &RenderOptions) {
        out.push('<');
        out.push_str(self.tag());
        if !self.class_names().is_empty() {
            out.push_str(" class=\"");
            for (i, class) in self.class_names().iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&options.apply(class));
            }
            out.push('"');
        }
        for (key, value) in self.attributes().iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&options.apply(value));
            out.push('"');
        }
        out.push('>');
    }

    pub(crate) fn write_end_tag(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
#[test]
fn test_escape() {
    assert_eq!(escape("plain"), Cow::Borrowed("plain"));
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}
