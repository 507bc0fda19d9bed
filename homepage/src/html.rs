//! HTML serialization for [`Node`] trees.

use crate::tree::{Element, Node};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serialize a tree to an HTML fragment.
///
/// Escaping goes through `html-escape`, the same encoder Leptos uses for
/// text and attributes in its SSR output. Attribute values are double-quoted,
/// classes are emitted as a single `class` attribute before any other attribute.
pub fn to_html(node: &Node) -> String {
    let mut out = String::with_capacity(4096);
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => {
            html_escape::encode_text_to_string(text, out);
        }
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        html_escape::encode_double_quoted_attribute_to_string(el.classes.join(" "), out);
        out.push('"');
    }
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        html_escape::encode_double_quoted_attribute_to_string(value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }

    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

/// Escape text content (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_nested_elements() {
        let node = Element::new("div")
            .class("container")
            .child(Element::new("h2").classes(["a", "b"]).text("Title"))
            .into_node();
        assert_eq!(
            to_html(&node),
            r#"<div class="container"><h2 class="a b">Title</h2></div>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node = Element::new("img")
            .attr("src", "/img/a.svg")
            .attr("role", "img")
            .into_node();
        assert_eq!(to_html(&node), r#"<img src="/img/a.svg" role="img">"#);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node = Element::new("a")
            .attr("title", r#"say "hi" & <go>"#)
            .text("Fish & <Chips>")
            .into_node();
        assert_eq!(
            to_html(&node),
            r#"<a title="say &quot;hi&quot; &amp; &lt;go&gt;">Fish &amp; &lt;Chips&gt;</a>"#
        );
    }

    #[test]
    fn attribute_escaping_leaves_single_quotes() {
        assert_eq!(escape_attr("it's \"x\""), "it's &quot;x&quot;");
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn escapes_class_names() {
        let node = Element::new("div").class("a\"b").into_node();
        assert_eq!(to_html(&node), r#"<div class="a&quot;b"></div>"#);
    }

    #[test]
    fn keeps_non_ascii_text() {
        let node = Node::text("🚀 Mulai → Belajar");
        assert_eq!(to_html(&node), "🚀 Mulai → Belajar");
    }
}
