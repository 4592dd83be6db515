//! Indented textual dump of a tree, for operator diagnostics.
//!
//! Read-only: the dump never mutates the tree and is not part of the
//! transformation contract.

use std::fmt::Write;

use crate::node::{Document, Node};

/// Render a document as an indented outline.
///
/// Elements render as `<tag attributes: [name, name]>`, two spaces of indent
/// per depth. Non-empty text nodes render as a quoted preview truncated to
/// `preview_width` characters.
///
/// # Example
///
/// ```rust
/// use tidymark_core::{dump, Document, Element, Node};
///
/// let mut li = Element::new("li");
/// li.push_child(Node::text("Weight: 1.5 lbs"));
/// let mut ul = Element::with_attrs("ul", &[("class", "content-list")]);
/// ul.push_child(Node::Element(li));
/// let mut document = Document::new();
/// document.push_child(Node::Element(ul));
///
/// let rendered = dump(&document, 20);
/// assert!(rendered.contains("<ul attributes: [class]>"));
/// assert!(rendered.contains("  <li attributes: []>"));
/// ```
pub fn dump(document: &Document, preview_width: usize) -> String {
    let mut output = String::new();
    let mut stack: Vec<(&Node, usize)> = Vec::new();
    for node in document.children.iter().rev() {
        stack.push((node, 0));
    }

    while let Some((node, depth)) = stack.pop() {
        match node {
            Node::Element(element) => {
                let names: Vec<&str> = element.attrs.keys().map(String::as_str).collect();
                let _ = writeln!(
                    output,
                    "{:indent$}<{} attributes: [{}]>",
                    "",
                    element.name,
                    names.join(", "),
                    indent = depth * 2
                );
                for child in element.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    let _ = writeln!(
                        output,
                        "{:indent$}\"{}\"",
                        "",
                        preview(trimmed, preview_width),
                        indent = depth * 2
                    );
                }
            }
        }
    }

    output
}

/// Truncate on a character boundary, appending an ellipsis when shortened.
fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width).collect();
    shortened.push('…');
    shortened
}
