//! Plain document tree produced by the page builders.
//!
//! Components never emit markup directly. They return a [`Node`] tree which
//! can be serialized to HTML ([`crate::html::to_html`]), dumped as JSON via
//! serde, or walked in tests.
//!
//! # Example
//!
//! ```rust
//! use homepage::tree::{Element, Node};
//!
//! let card = Element::new("div")
//!     .class("path-step")
//!     .child(Element::new("h3").text("Multithreading"))
//!     .into_node();
//!
//! assert_eq!(card.text_content(), "Multithreading");
//! ```

use serde::{Deserialize, Serialize};

/// A node in the document tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// An element with tag, classes, attributes and children
    Element(Element),
    /// A run of text (escaped on serialization)
    Text {
        /// Raw text content
        text: String,
    },
}

/// An element node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, e.g. `"section"`
    pub tag: String,
    /// Class names in assignment order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Attributes other than `class`, in assignment order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Start a new element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add one class name.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    /// Add several class names at once.
    pub fn classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set an attribute. A later call with the same name replaces the value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append every node from an iterator.
    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Wrap into a [`Node`].
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    /// Whether the element carries the given class.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Look up an attribute value.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Borrow as an element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All elements in document order (pre-order), including `self`.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut out);
        out
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if let Node::Element(el) = self {
            out.push(el);
            for child in &el.children {
                child.walk(out);
            }
        }
    }

    /// Elements carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// First element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.elements().into_iter().find(|el| el.has_class(class))
    }

    /// Elements with the given tag, in document order.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.tag == tag)
            .collect()
    }
}

impl Element {
    /// Text content of this element's subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Descendant elements carrying `class`, excluding `self`.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.children
            .iter()
            .flat_map(|c| c.find_all_by_class(class))
            .collect()
    }

    /// Descendant elements with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.children
            .iter()
            .flat_map(|c| c.find_all_by_tag(tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Node {
        Element::new("section")
            .class("outer")
            .child(Element::new("h2").class("title").text("Hello"))
            .child(
                Element::new("div")
                    .class("row")
                    .child(Element::new("p").class("item").text("a"))
                    .child(Element::new("p").class("item").text("b")),
            )
            .into_node()
    }

    #[test]
    fn text_content_concatenates_in_order() {
        assert_eq!(sample().text_content(), "Helloab");
    }

    #[test]
    fn finds_elements_by_class_in_document_order() {
        let tree = sample();
        let items = tree.find_all_by_class("item");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text_content(), "a");
        assert_eq!(items[1].text_content(), "b");
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn attr_replaces_existing_value() {
        let el = Element::new("a").attr("href", "/x").attr("href", "/y");
        assert_eq!(el.attrs.len(), 1);
        assert_eq!(el.attr_value("href"), Some("/y"));
    }

    #[test]
    fn serializes_with_type_tag() {
        let node = Element::new("p").text("hi").into_node();
        let json = serde_json::to_value(&node).expect("serialize node");
        assert_eq!(json["type"], "element");
        assert_eq!(json["tag"], "p");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["text"], "hi");
        assert!(json.get("classes").is_none());
    }
}
