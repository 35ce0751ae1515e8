//! Preconfigured elements. Every factory starts from a fixed tag, class list and
//! attribute set; caller classes are appended after the preset ones, caller
//! attributes override presets, and a caller tag replaces the preset tag.

use crate::theme::THEME;
use crate::{Attributes, Content, Node, NodeConfig};
use css::ClassBuilder;
use uuid::Uuid;

const TAILWIND_SRC: &str = "https://unpkg.com/@tailwindcss/browser@4";
const MATERIAL_SYMBOLS_HREF: &str = "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:opsz,wght,FILL,GRAD@24,400,0,0";

const TEXT_STYLE: &str = "color:var(--color-tertiary);";
const FIELD_STYLE: &str = "background-color:var(--color-primary);color:var(--color-tertiary);";
const BUTTON_STYLE: &str = "background-color:var(--color-secondary);color:var(--color-tertiary);";
const BODY_STYLE: &str = "background-color:var(--color-primary);transition:background-color 0.3s ease,color 0.3s ease;";

fn preset(tag: &str, classes: Vec<String>, attributes: Attributes, config: NodeConfig) -> Node {
    let NodeConfig {
        tag: custom_tag,
        class_names,
        attributes: custom_attributes,
        content,
    } = config;
    let mut merged_classes = classes;
    merged_classes.extend(class_names);
    let mut merged_attributes = attributes;
    merged_attributes.extend(custom_attributes);
    Node::from_config(NodeConfig {
        tag: Some(custom_tag.unwrap_or_else(|| tag.to_string())),
        class_names: merged_classes,
        attributes: merged_attributes,
        content,
    })
}

/// A fresh id usable from inline scripts (no dashes)
pub fn generate_id() -> String {
    Uuid::new_v4().to_string().replace('-', "_")
}

/// Takes the caller's `id`, or generates one
fn element_id(config: &mut NodeConfig) -> String {
    config.take_attr("id").unwrap_or_else(generate_id)
}

fn field_classes() -> ClassBuilder {
    ClassBuilder::new().rounded("lg").p("2.5").border("1")
}

// Document structure

pub fn title(title: &str) -> Node {
    Node::with_text("title", title)
}

pub fn meta(config: NodeConfig) -> Node {
    preset("meta", vec![], Attributes::empty(), config)
}

pub fn link(config: NodeConfig) -> Node {
    preset("link", vec![], Attributes::empty(), config)
}

pub fn script(config: NodeConfig) -> Node {
    preset("script", vec![], Attributes::empty(), config)
}

pub fn style(config: NodeConfig) -> Node {
    preset("style", vec![], Attributes::empty(), config)
}

/// The standard `<head>`: charset and viewport, the icon font, the Tailwind
/// runtime, the theme stylesheet and a title, followed by `extra`
pub fn head(page_title: &str, extra: Vec<Node>) -> Node {
    let mut children = vec![
        meta(NodeConfig::new().attr("charset", "UTF-8")),
        meta(
            NodeConfig::new()
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        ),
        link(
            NodeConfig::new()
                .attr("rel", "stylesheet")
                .attr("href", MATERIAL_SYMBOLS_HREF),
        ),
        script(NodeConfig::new().attr("src", TAILWIND_SRC)),
        style(NodeConfig::new().text(THEME.to_string())),
        title(page_title),
    ];
    children.extend(extra);
    Node::with_children("head", children)
}

pub fn body(config: NodeConfig) -> Node {
    let classes = ClassBuilder::new()
        .w("dvw")
        .h("dvh")
        .flex("col")
        .justify("center")
        .items("center")
        .overflow("x-hidden")
        .overflow("y-auto");
    preset(
        "body",
        classes.into_list(),
        attributes!("style" => BODY_STYLE),
        config,
    )
}

// Text

pub fn text(config: NodeConfig) -> Node {
    preset("p", vec![], attributes!("style" => TEXT_STYLE), config)
}

pub fn label(config: NodeConfig) -> Node {
    preset("label", vec![], attributes!("style" => TEXT_STYLE), config)
}

pub fn span(config: NodeConfig) -> Node {
    preset("span", vec![], attributes!("style" => TEXT_STYLE), config)
}

/// A Material Symbols glyph; the config's text is the icon name
pub fn icon(config: NodeConfig) -> Node {
    span(
        NodeConfig::new()
            .class("material-symbols-outlined")
            .classes(config.class_names)
            .attrs(config.attributes)
            .content(config.content),
    )
}

pub fn anchor(config: NodeConfig) -> Node {
    let classes = ClassBuilder::new().underline().cursor("pointer");
    preset(
        "a",
        classes.into_list(),
        attributes!("style" => TEXT_STYLE),
        config,
    )
}

// Layout

pub fn row(config: NodeConfig) -> Node {
    let classes = ClassBuilder::new()
        .flex("row")
        .justify("center")
        .items("center")
        .gap("2");
    preset("div", classes.into_list(), Attributes::empty(), config)
}

pub fn column(config: NodeConfig) -> Node {
    let classes = ClassBuilder::new()
        .flex("col")
        .justify("center")
        .items("center")
        .gap("2");
    preset("div", classes.into_list(), Attributes::empty(), config)
}

pub fn image(config: NodeConfig) -> Node {
    preset("img", vec![], Attributes::empty(), config)
}

// Forms

pub fn form(config: NodeConfig) -> Node {
    let classes = ClassBuilder::new()
        .flex("col")
        .justify("center")
        .items("center")
        .gap("2")
        .other("border")
        .rounded("lg")
        .p("5");
    preset("form", classes.into_list(), Attributes::empty(), config)
}

pub fn input(config: NodeConfig) -> Node {
    preset(
        "input",
        field_classes().into_list(),
        attributes!("style" => FIELD_STYLE),
        config,
    )
}

pub fn button(config: NodeConfig) -> Node {
    let classes = ClassBuilder::new()
        .flex("row")
        .justify("center")
        .items("center")
        .gap("2")
        .rounded("lg")
        .p("2.5")
        .cursor("pointer")
        .hover("opacity-75");
    preset(
        "button",
        classes.into_list(),
        attributes!("style" => BUTTON_STYLE),
        config,
    )
}

/// `<option value="dark_blue">Dark blue</option>`
pub fn option(value: &str) -> Node {
    Node::with_text("option", option_label(value)).attr("value", value)
}

fn option_label(value: &str) -> String {
    let spaced = value.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A drop-down with one option per item. Gets a generated id unless the config
/// carries one.
pub fn select<'a>(items: impl IntoIterator<Item = &'a str>, mut config: NodeConfig) -> Node {
    let id = element_id(&mut config);
    let options: Vec<Node> = items.into_iter().map(option).collect();
    preset(
        "select",
        field_classes().into_list(),
        attributes!("id" => id, "style" => FIELD_STYLE),
        config.content(Content::Children(options)),
    )
}

/// A drop-down listing the theme's color schemes. Picking one sets it as the class
/// of `<html>` and remembers it in local storage.
pub fn select_theme(mut config: NodeConfig) -> Node {
    let id = element_id(&mut config);
    let classes = ClassBuilder::new()
        .absolute()
        .bottom("5")
        .left("5")
        .rounded("lg")
        .p("2.5")
        .border("1");
    let mut children: Vec<Node> = THEME.keys().map(option).collect();
    children.push(script(NodeConfig::new().text(theme_script(&id))));
    preset(
        "select",
        classes.into_list(),
        attributes!("id" => id, "style" => FIELD_STYLE),
        config.content(Content::Children(children)),
    )
}

fn theme_script(id: &str) -> String {
    format!(
        r#"
const themeSelect = document.getElementById('{id}');
document.documentElement.className = localStorage.getItem('themeMode') || 'light';
themeSelect.value = document.documentElement.className;
themeSelect.addEventListener('change', function() {{
    document.documentElement.className = themeSelect.value;
    localStorage.setItem('themeMode', themeSelect.value);
}});
"#
    )
}

/// A switch that toggles the `dark` class on `<html>`, labelled `caption`
pub fn toggle_button(caption: &str, config: NodeConfig) -> Node {
    let id = generate_id();
    let classes = ClassBuilder::new()
        .inline_flex()
        .items("center")
        .cursor("pointer");
    let checkbox = input(
        NodeConfig::new()
            .classes(ClassBuilder::new().sr_only().peer())
            .attr("type", "checkbox")
            .attr("value", "")
            .attr("id", id.as_str()),
    );
    let track = Node::new("div").classes(
        ClassBuilder::new()
            .relative()
            .w("11")
            .h("6")
            .bg("gray-200")
            .other("peer-focus:outline-none")
            .other("peer-focus:ring-4")
            .other("peer-focus:ring-blue-300")
            .rounded("full")
            .peer()
            .other("peer-checked:after:translate-x-full")
            .other("peer-checked:after:border-white")
            .other("after:content-['']")
            .other("after:absolute")
            .other("after:top-[2px]")
            .other("after:start-[2px]")
            .other("after:bg-white")
            .other("after:border-gray-300")
            .other("after:border")
            .other("after:rounded-full")
            .other("after:h-5")
            .other("after:w-5")
            .other("after:transition-all")
            .other("peer-checked:bg-blue-600"),
    );
    let caption = span(
        NodeConfig::new()
            .classes(ClassBuilder::new().text("sm").font("medium").other("ms-3"))
            .text(caption),
    );
    let toggle = script(NodeConfig::new().text(dark_mode_script(&id)));
    label(
        NodeConfig::new()
            .classes(classes)
            .classes(config.class_names)
            .attrs(config.attributes)
            .children([checkbox, track, caption, toggle]),
    )
}

fn dark_mode_script(id: &str) -> String {
    format!(
        r#"
const darkToggle = document.getElementById('{id}');
if (localStorage.getItem('darkMode') === 'enabled') {{
    document.documentElement.classList.add('dark');
    darkToggle.checked = true;
}}
darkToggle.addEventListener('change', function() {{
    document.documentElement.classList.toggle('dark', darkToggle.checked);
    localStorage.setItem('darkMode', darkToggle.checked ? 'enabled' : 'disabled');
}});
"#
    )
}

#[cfg(test)]
#[test]
fn test_option_label() {
    assert_eq!(option_label("yellow-gray"), "Yellow-gray");
    assert_eq!(option_label("DARK_BLUE"), "Dark blue");
    assert_eq!(option_label(""), "");
}
