//! The owned element tree mutated by the cleanup pipeline.
//!
//! A [`Document`] owns a vector of top-level [`Node`]s; every node is owned
//! by its parent's child vector, so the structure is a tree by construction
//! (no parent pointers, no sharing, no cycles).

use indexmap::IndexMap;

/// Root container produced by parsing one markup fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Top-level nodes of the fragment, in document order.
    pub children: Vec<Node>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level node.
    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

/// A single tree node: either an element or a literal text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Borrow the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Mutably borrow the element, if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

/// An element: a tag name, an ordered attribute map, and ordered children.
///
/// Tag and attribute names are normalized to lower case on the way in.
/// Attribute insertion order is preserved so serialization stays stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lower-case tag name. Never empty.
    pub name: String,
    /// Attribute name → value, insertion-ordered, names unique.
    pub attrs: IndexMap<String, String>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: &str) -> Self {
        debug_assert!(!name.is_empty(), "element tag name must be non-empty");
        Self {
            name: name.to_ascii_lowercase(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with the given attributes, in the given order.
    pub fn with_attrs(name: &str, attrs: &[(&str, &str)]) -> Self {
        let mut element = Self::new(name);
        for (attr_name, value) in attrs {
            element.set_attr(attr_name, value);
        }
        element
    }

    /// Look up an attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing any existing value.
    ///
    /// Replacing keeps the attribute's original position in the map, so
    /// repeated passes over the same tree serialize identically.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        debug_assert!(!name.is_empty(), "attribute name must be non-empty");
        self.attrs
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Remove an attribute, preserving the order of the remaining ones.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.shift_remove(&name.to_ascii_lowercase())
    }

    /// Append a child node.
    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Iterate over element children only, skipping text nodes.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
