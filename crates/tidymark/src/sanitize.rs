//! Attribute sanitization.
//!
//! Pasted markup arrives saturated with presentation noise: inline styles,
//! editor-generated classes and ids, table geometry attributes. This stage
//! strips everything down to a fixed allow-list. Elements are never removed
//! or reordered; only their attribute maps change, so running it twice is
//! the same as running it once.

use tidymark_core::{Document, Element, Node};

use crate::tags;

/// Attributes embeddable elements keep so they stay functional.
const EMBEDDED_ATTRIBUTES: &[&str] = &["src", "width", "height", "type"];

/// Attributes allowed on every element. `data-label` is the pipeline's own
/// annotation on table cells and has to survive a second pass over already
/// cleaned content.
const GLOBAL_ATTRIBUTES: &[&str] = &["data-label"];

/// Strip disallowed attributes from every element in the tree, in place.
///
/// The traversal is an explicit work-list rather than recursion, so
/// adversarially deep input cannot overflow the call stack.
pub fn sanitize(document: &mut Document) {
    let mut stack: Vec<&mut Node> = document.children.iter_mut().collect();

    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node {
            scrub_attributes(element);
            stack.extend(element.children.iter_mut());
        }
    }
}

fn scrub_attributes(element: &mut Element) {
    let embedded = tags::is_embedded(&element.name);
    element.attrs.retain(|name, _| {
        GLOBAL_ATTRIBUTES.contains(&name.as_str())
            || (embedded && EMBEDDED_ATTRIBUTES.contains(&name.as_str()))
    });
}
