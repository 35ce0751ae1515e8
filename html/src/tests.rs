use super::components::{column, input, row, select, text};
use super::*;

#[test]
fn test_nested_render() {
    let tree = Node::with_children("div", [Node::with_text("span", "hi")]).class("row");
    assert_eq!(
        tree.render(),
        "<div class=\"row\">\n  <span>\n    hi\n  </span>\n</div>\n"
    );
    assert_eq!(tree.to_string(), tree.render());
}

#[test]
fn test_text_render() {
    assert_eq!(Node::with_text("p", "hello").render(), "<p>\n  hello\n</p>\n");
    assert_eq!(
        Node::with_text("p", "hello").render_at(2),
        "    <p>\n      hello\n    </p>\n"
    );
}

#[test]
fn test_empty_render() {
    assert_eq!(Node::new("div").render(), "<div></div>\n");
    let node = Node::from_config(NodeConfig {
        content: Content::Empty,
        ..NodeConfig::new().tag("hr")
    });
    assert_eq!(node.render_at(1), "  <hr></hr>\n");
    // Void elements still get a closing tag
    let node = Node::new("input").attr("type", "text").attr("name", "q");
    assert_eq!(node.render(), "<input type=\"text\" name=\"q\"></input>\n");
}

#[test]
fn test_attributes_in_insertion_order() {
    let mut node = Node::new("a")
        .classes(["x", "y", "x"])
        .attr("href", "/")
        .attr("target", "_blank");
    node.set_attribute("href", "/home");
    node.set_attribute("rel", "noopener");
    assert_eq!(
        node.render(),
        "<a class=\"x y x\" href=\"/home\" target=\"_blank\" rel=\"noopener\"></a>\n"
    );
    assert_eq!(node.get_attribute("href"), Some(&"/home".to_string()));
}

#[test]
fn test_attributes_macro() {
    let attrs = attributes!("type" => "text", "size" => 3);
    let pairs: Vec<(&str, &str)> = attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(pairs, vec![("type", "text"), ("size", "3")]);
    assert!(attributes!().is_empty());
}

#[test]
fn test_append_conflicts() {
    let mut node = Node::with_text("p", "hello");
    let err = node.append_content(Node::new("b")).unwrap_err();
    assert!(matches!(
        err,
        Error::ContentTypeConflict {
            existing: ContentKind::Text,
            attempted: ContentKind::Children,
            ..
        }
    ));
    assert_eq!(node.content(), &Content::Text("hello".into()));

    let mut node = Node::with_children("ul", [Node::new("li")]);
    assert!(node.append_content("stray text").is_err());
    assert_eq!(node.content(), &Content::Children(vec![Node::new("li")]));

    // A freshly built node holds an empty child list, so text is refused
    let mut node = Node::new("div");
    assert!(node.append_content("text").is_err());
    assert_eq!(node.render(), "<div></div>\n");
}

#[test]
fn test_append_to_empty() {
    let mut node = Node::from_config(NodeConfig::new().content(Content::Empty));
    node.append_content("a").unwrap();
    node.append_content(String::from("b")).unwrap();
    assert_eq!(node.render(), "<div>\n  ab\n</div>\n");

    let mut node = Node::from_config(NodeConfig::new().content(Content::Empty));
    node.append_content(Node::new("i")).unwrap();
    assert_eq!(node.render(), "<div>\n  <i></i>\n</div>\n");
}

#[test]
fn test_escaping_is_opt_in() {
    let node = Node::with_text("p", "<b>bold</b> & more").attr("title", "\"quoted\"");
    assert_eq!(
        node.render(),
        "<p title=\"\"quoted\"\">\n  <b>bold</b> & more\n</p>\n"
    );
    assert_eq!(
        node.render_with(&RenderOptions::escaped(), 0),
        "<p title=\"&quot;quoted&quot;\">\n  &lt;b&gt;bold&lt;/b&gt; &amp; more\n</p>\n"
    );
}

#[test]
fn test_document() {
    let root = Node::with_children(
        "whatever",
        [Node::new("head"), Node::with_text("body", "hi")],
    );
    let doc = Document::new(root);
    assert_eq!(doc.root().tag(), "html");
    assert_eq!(
        doc.render(),
        "<!DOCTYPE html>\n<html lang=\"en\">\n  <head></head>\n\n  <body>\n    hi\n  </body>\n</html>\n"
    );
}

#[test]
fn test_empty_document() {
    let doc = Document::new(Node::new("html"));
    assert_eq!(doc.render(), "<!DOCTYPE html>\n<html lang=\"en\">\n</html>\n");
}

#[test]
fn test_document_lang_merge() {
    let doc = Document::new(Node::new("html").attr("id", "page").class("dark"));
    assert!(doc
        .render()
        .starts_with("<!DOCTYPE html>\n<html class=\"dark\" lang=\"en\" id=\"page\">\n"));

    let doc = Document::new(Node::new("html").attr("id", "page").attr("lang", "fr"));
    let keys: Vec<&String> = doc.root().attributes().iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["lang", "id"]);
    assert_eq!(doc.root().get_attribute("lang"), Some(&"fr".to_string()));
}

#[test]
fn test_page() {
    let doc = Document::page(
        "Demo",
        NodeConfig::new()
            .class("dark")
            .child(column(NodeConfig::new().child(text(NodeConfig::new().text("Form"))))),
    );
    let html = doc.render();
    assert!(html.starts_with("<!DOCTYPE html>\n<html class=\"dark\" lang=\"en\">\n  <head>\n"));
    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert!(html.contains("    <title>\n      Demo\n    </title>\n"));
    assert!(html.contains("    <meta charset=\"UTF-8\"></meta>\n"));
    assert!(html.contains(
        "  <body class=\"w-dvw h-dvh flex flex-col justify-center items-center overflow-x-hidden overflow-y-auto\""
    ));
    assert!(html.contains(
        "      <p style=\"color:var(--color-tertiary);\">\n        Form\n      </p>\n"
    ));
    assert!(html.ends_with("  </body>\n</html>\n"));
}

#[test]
fn test_components() {
    let node = input(NodeConfig::new().attr("type", "text"));
    assert_eq!(
        node.render(),
        "<input class=\"rounded-lg p-2.5 border-1\" style=\"background-color:var(--color-primary);color:var(--color-tertiary);\" type=\"text\"></input>\n"
    );

    let node = row(NodeConfig::new().class("w-full").attr("id", "r"));
    assert_eq!(
        node.class_names(),
        ["flex", "flex-row", "justify-center", "items-center", "gap-2", "w-full"]
    );
    assert_eq!(node.tag(), "div");

    let node = text(NodeConfig::new().tag("H1").attr("style", "color:red;"));
    assert_eq!(node.tag(), "h1");
    assert_eq!(node.get_attribute("style"), Some(&"color:red;".to_string()));
}

#[test]
fn test_select() {
    let node = select(["light_mode", "dark"], NodeConfig::new().attr("id", "picker"));
    assert_eq!(
        node.render(),
        r#"<select class="rounded-lg p-2.5 border-1" id="picker" style="background-color:var(--color-primary);color:var(--color-tertiary);">
  <option value="light_mode">
    Light mode
  </option>
  <option value="dark">
    Dark
  </option>
</select>
"#
    );

    let node = select(["a"], NodeConfig::new());
    let id = node.get_attribute("id").cloned().unwrap_or_default();
    assert_eq!(id.len(), 36);
    assert!(!id.contains('-'));
}

#[test]
fn test_save() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("templates").join("nested");
    let doc = Document::new(Node::with_children("html", [Node::new("body")]));

    let path = doc.save(&target, "index.html", true).unwrap();
    assert_eq!(path, target.join("index.html"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.render());

    // Without reload an existing file is kept as is
    std::fs::write(&path, "stale").unwrap();
    doc.save(&target, "index.html", false).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "stale");

    doc.save(&target, "index.html", true).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.render());
}

#[test]
fn test_save_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let doc = Document::new(Node::new("html"));
    let err = doc.save(blocker.join("sub"), "index.html", true).unwrap_err();
    assert!(matches!(err, Error::MissingResource { .. }));
}
