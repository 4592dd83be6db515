//! Markup adapter: parsing over the `scraper` HTML engine.
//!
//! This module is the only place that touches the parser; everything else in
//! the pipeline works on the `tidymark_core` tree, so the engine can be
//! swapped without disturbing the transformation stages. Serialization is
//! the core crate's [`serialize`](tidymark_core::serialize).

use scraper::{ElementRef, Html, Node as HtmlNode};

use tidymark_core::{Document, Element, Node};

use crate::{Result, TidyError};

/// Parse a markup fragment (or a full document) into a [`Document`].
///
/// Fragments are run through the html5ever fragment algorithm; the synthetic
/// container it wraps them in never appears in the resulting tree, so
/// serializing gives back only the content that was supplied. Inputs that
/// look like complete documents (`<!doctype html…` / `<html…`) are parsed as
/// such and reduced to their `<body>` content.
///
/// Lenient parsing repairs malformed tags rather than failing;
/// [`TidyError::Parse`] is returned only when no usable tree exists at all.
pub fn parse(input: &str) -> Result<Document> {
    let head: String = input
        .trim_start()
        .chars()
        .take(14)
        .collect::<String>()
        .to_ascii_lowercase();
    let is_document = head.starts_with("<!doctype html") || head.starts_with("<html");

    if is_document {
        let parsed = Html::parse_document(input);
        let body = find_body(parsed.root_element())
            .ok_or_else(|| TidyError::Parse("document has no body element".to_string()))?;
        return Ok(Document {
            children: convert_children(body),
        });
    }

    let parsed = Html::parse_fragment(input);
    Ok(Document {
        children: convert_children(parsed.root_element()),
    })
}

fn find_body(root: ElementRef) -> Option<ElementRef> {
    root.children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "body")
}

/// Convert the children of a scraper element, dropping comments, doctypes,
/// and processing instructions.
fn convert_children(element: ElementRef) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in element.children() {
        match child.value() {
            HtmlNode::Text(text) => nodes.push(Node::text(&text.text)),
            HtmlNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    nodes.push(Node::Element(convert_element(child_element)));
                }
            }
            _ => {}
        }
    }

    nodes
}

fn convert_element(element: ElementRef) -> Element {
    let mut converted = Element::new(element.value().name());

    // Attribute order normalizes here so trees never depend on the
    // engine's internal map order.
    let mut attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    attrs.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (name, value) in attrs {
        converted.set_attr(name, value);
    }

    converted.children = convert_children(element);
    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidymark_core::serialize;

    #[test]
    fn test_parse_simple_fragment() {
        let document = parse("<p>Hello World</p>").unwrap();
        assert_eq!(document.children.len(), 1);

        let p = document.children[0].as_element().unwrap();
        assert_eq!(p.name, "p");
        assert_eq!(p.text_content(), "Hello World");
    }

    #[test]
    fn test_fragment_wrapper_does_not_leak() {
        let document = parse("<p>one</p><p>two</p>").unwrap();
        assert_eq!(serialize(&document), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_bare_text_fragment() {
        let document = parse("just text").unwrap();
        assert_eq!(serialize(&document), "just text");
    }

    #[test]
    fn test_full_document_reduced_to_body() {
        let input = "<!DOCTYPE html><html><head><title>T</title></head><body><p>content</p></body></html>";
        let document = parse(input).unwrap();
        assert_eq!(serialize(&document), "<p>content</p>");
    }

    #[test]
    fn test_html_root_without_doctype() {
        let document = parse("<html><body><ul><li>a</li></ul></body></html>").unwrap();
        assert_eq!(serialize(&document), "<ul><li>a</li></ul>");
    }

    #[test]
    fn test_attributes_sorted_on_parse() {
        let document = parse(r#"<p title="x" class="y" align="center">z</p>"#).unwrap();
        let p = document.children[0].as_element().unwrap();
        let keys: Vec<&str> = p.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["align", "class", "title"]);
    }

    #[test]
    fn test_malformed_markup_is_repaired() {
        // An unclosed tag is a repair case, not a parse failure.
        let document = parse("<div><p>text").unwrap();
        assert_eq!(serialize(&document), "<div><p>text</p></div>");
    }

    #[test]
    fn test_stray_end_tag_parses_to_nothing() {
        let document = parse("</div>").unwrap();
        assert!(document.children.is_empty());
    }

    #[test]
    fn test_comments_dropped() {
        let document = parse("<p>a</p><!-- note --><p>b</p>").unwrap();
        assert_eq!(serialize(&document), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let input = r#"<div><h2>Title</h2><ul><li>Weight: 1.5 lbs</li><li>Battery: 12h</li></ul><p>Order <strong>now</strong>!</p></div>"#;
        let document = parse(input).unwrap();
        let reparsed = parse(&serialize(&document)).unwrap();
        assert_eq!(reparsed, document);
    }

    #[test]
    fn test_round_trip_with_entities() {
        let document = parse("<p>a &amp; b &lt; c</p>").unwrap();
        assert_eq!(document.children[0].text_content(), "a & b < c");
        let reparsed = parse(&serialize(&document)).unwrap();
        assert_eq!(reparsed, document);
    }
}
