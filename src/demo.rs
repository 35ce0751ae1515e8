use css::ClassBuilder;
use html::components::{button, column, form, icon, input, select_theme, text, toggle_button};
use html::{Document, NodeConfig};

/// A form with three text fields and an upload button, a dark-mode switch and a
/// theme picker
pub fn form_page(title: &str) -> Document {
    let fields = (0..3).map(|_| input(NodeConfig::new().attr("type", "text")));
    let submit = button(
        NodeConfig::new()
            .classes(ClassBuilder::new().bg("blue-400").text("white"))
            .attr("type", "submit")
            .children([
                icon(NodeConfig::new().text("upload")),
                text(NodeConfig::new().text("upload")),
            ]),
    );
    let upload = form(
        NodeConfig::new()
            .attr("action", "/hello")
            .attr("method", "POST")
            .child(text(NodeConfig::new().text("Form")))
            .children(fields)
            .child(submit),
    );
    Document::page(
        title,
        NodeConfig::new().child(column(NodeConfig::new().children([
            upload,
            toggle_button("Dark mode", NodeConfig::new()),
            select_theme(NodeConfig::new()),
        ]))),
    )
}

#[cfg(test)]
#[test]
fn test_form_page() {
    let page = form_page("Upload").render();
    assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
    assert_eq!(page.matches("<input").count(), 4);
    assert!(page.contains("<form class=\"flex flex-col justify-center items-center gap-2 border rounded-lg p-5\" action=\"/hello\" method=\"POST\">"));
    assert!(page.contains("<span class=\"material-symbols-outlined\" style=\"color:var(--color-tertiary);\">"));
    assert!(page.contains("hover:opacity-75 bg-blue-400 text-white"));
    assert!(page.contains("<option value=\"yellow-gray\">"));
}
