use crate::components::{body, head};
use crate::error::{Error, Result};
use crate::render::{push_text_line, RenderOptions};
use crate::{Attributes, Content, Node, NodeConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, span, Level};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// The root of a page. Always renders as `<html lang="en">` behind a doctype line.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Wraps `root`, retagging it as `html` and putting `lang="en"` first among its
    /// attributes. A `lang` already present on `root` keeps its value.
    pub fn new(root: Node) -> Self {
        let Node {
            class_names,
            attributes,
            content,
            ..
        } = root;
        let mut merged = Attributes::empty();
        merged.insert("lang", "en");
        merged.extend(attributes);
        Self {
            root: Node::from_config(NodeConfig {
                tag: Some("html".into()),
                class_names,
                attributes: merged,
                content,
            }),
        }
    }

    /// Builds a full page: a standard `<head>` titled `title`, and a `<body>` holding
    /// the config's content. Classes and attributes of `config` land on `<html>`.
    pub fn page(title: &str, config: NodeConfig) -> Self {
        let NodeConfig {
            class_names,
            attributes,
            content,
            ..
        } = config;
        let root = Node::from_config(NodeConfig {
            tag: None,
            class_names,
            attributes,
            content: Content::Children(vec![
                head(title, vec![]),
                body(NodeConfig::new().content(content)),
            ]),
        });
        Self::new(root)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Unlike [`Node::render`], children are joined by an extra newline and the
    /// root tags always sit on their own lines
    pub fn render_with(&self, options: &RenderOptions) -> String {
        let span = span!(Level::DEBUG, "Rendering document");
        let _enter = span.enter();
        let mut out = String::from(DOCTYPE);
        out.push('\n');
        self.root.write_start_tag(&mut out, options);
        out.push('\n');
        match self.root.content() {
            Content::Empty => {}
            Content::Text(text) => push_text_line(&mut out, text, options, 1),
            Content::Children(children) => {
                let inner: Vec<String> = children
                    .iter()
                    .map(|c| c.render_with(options, 1))
                    .collect();
                out.push_str(&inner.join("\n"));
            }
        }
        self.root.write_end_tag(&mut out);
        out.push('\n');
        out
    }

    /// Writes the rendered page to `dir/filename`, creating `dir` as needed. An
    /// existing file is overwritten, unless `reload` is false in which case it is left
    /// alone. Returns the path of the file.
    pub fn save(&self, dir: impl AsRef<Path>, filename: &str, reload: bool) -> Result<PathBuf> {
        self.save_with(dir, filename, reload, &RenderOptions::default())
    }

    pub fn save_with(
        &self,
        dir: impl AsRef<Path>,
        filename: &str,
        reload: bool,
        options: &RenderOptions,
    ) -> Result<PathBuf> {
        let dir = dir.as_ref();
        let path = dir.join(filename);
        let span = span!(Level::DEBUG, "Saving document", path = %path.display());
        let _enter = span.enter();
        if !reload && path.is_file() {
            debug!("keeping existing file");
            return Ok(path);
        }
        fs::create_dir_all(dir).map_err(|source| Error::MissingResource {
            path: dir.to_path_buf(),
            source,
        })?;
        let html = self.render_with(options);
        fs::write(&path, &html).map_err(|source| Error::MissingResource {
            path: path.clone(),
            source,
        })?;
        debug!(bytes = html.len(), "wrote document");
        Ok(path)
    }
}

impl From<Node> for Document {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
