//! Element tree serialization back to HTML text.
//!
//! The output re-parses to an equivalent tree: lower-case tags, void
//! elements without closing tags, text and attribute values escaped.
//! Attributes are emitted in name order, so equivalent trees serialize
//! byte-identically no matter what order their attributes were set in.

use crate::node::{Document, Element, Node};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children hold raw, unescaped data.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serialize a whole document. Only the document's own content is emitted;
/// no wrapper element is added around it.
pub fn serialize(document: &Document) -> String {
    let mut output = String::with_capacity(256);
    for node in &document.children {
        write_node(&mut output, node, false);
    }
    output
}

/// Serialize a single node subtree.
pub fn serialize_node(node: &Node) -> String {
    let mut output = String::with_capacity(64);
    write_node(&mut output, node, false);
    output
}

fn write_node(out: &mut String, node: &Node, raw_text: bool) {
    match node {
        Node::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                push_escaped_text(out, text);
            }
        }
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.name);

    let mut attrs: Vec<(&String, &String)> = element.attrs.iter().collect();
    attrs.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            push_escaped_attr(out, value);
            out.push('"');
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.name.as_str()) {
        return;
    }

    let raw_text = RAW_TEXT_ELEMENTS.contains(&element.name.as_str());
    for child in &element.children {
        write_node(out, child, raw_text);
    }

    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

fn push_escaped_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn push_escaped_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(nodes: Vec<Node>) -> Document {
        Document { children: nodes }
    }

    #[test]
    fn test_simple_element() {
        let mut p = Element::new("p");
        p.push_child(Node::text("Hello World"));
        assert_eq!(serialize(&doc(vec![Node::Element(p)])), "<p>Hello World</p>");
    }

    #[test]
    fn test_attributes_in_name_order() {
        // Insertion order does not matter for output; names are sorted.
        let mut td = Element::with_attrs("td", &[("data-label", "Value"), ("class", "spec-cell")]);
        td.push_child(Node::text("12h"));
        assert_eq!(
            serialize_node(&Node::Element(td)),
            r#"<td class="spec-cell" data-label="Value">12h</td>"#
        );
    }

    #[test]
    fn test_bare_attribute_for_empty_value() {
        let option = Element::with_attrs("option", &[("selected", "")]);
        assert_eq!(serialize_node(&Node::Element(option)), "<option selected></option>");
    }

    #[test]
    fn test_void_elements() {
        assert_eq!(serialize_node(&Node::Element(Element::new("br"))), "<br>");

        let img = Element::with_attrs("img", &[("src", "test.png"), ("width", "10")]);
        assert_eq!(
            serialize_node(&Node::Element(img)),
            r#"<img src="test.png" width="10">"#
        );
    }

    #[test]
    fn test_text_escaping() {
        let mut p = Element::new("p");
        p.push_child(Node::text("1 < 2 & 3 > 2"));
        assert_eq!(
            serialize_node(&Node::Element(p)),
            "<p>1 &lt; 2 &amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn test_attribute_escaping() {
        let a = Element::with_attrs("a", &[("title", r#"say "hi" & bye"#)]);
        assert_eq!(
            serialize_node(&Node::Element(a)),
            r#"<a title="say &quot;hi&quot; &amp; bye"></a>"#
        );
    }

    #[test]
    fn test_raw_text_in_script() {
        let mut script = Element::new("script");
        script.push_child(Node::text("if (a < b) {}"));
        assert_eq!(
            serialize_node(&Node::Element(script)),
            "<script>if (a < b) {}</script>"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(serialize(&Document::new()), "");
    }

    #[test]
    fn test_repeated_serialization_is_stable() {
        let mut ul = Element::with_attrs("ul", &[("class", "content-list")]);
        let mut li = Element::new("li");
        li.push_child(Node::text("Weight: 1.5 lbs"));
        ul.push_child(Node::Element(li));
        let document = doc(vec![Node::Element(ul)]);

        assert_eq!(serialize(&document), serialize(&document));
    }
}
