//! Rewriting a specification list as a two-column table.

use tidymark_core::{Element, Node};

/// Separators tried against item text, in priority order.
const SEPARATORS: [char; 3] = [':', '-', '–'];

/// Build a `<table>` equivalent to the given specification list.
///
/// One body row per direct `<li>` child; item text is split into name and
/// value on the first separator found. The caller replaces the list with the
/// returned node at the same position among its parent's children.
pub fn build_table(list: &Element) -> Node {
    let mut header_row = Element::new("tr");
    for title in ["Specification", "Value"] {
        let mut th = Element::new("th");
        th.push_child(Node::text(title));
        header_row.push_child(Node::Element(th));
    }

    let mut thead = Element::new("thead");
    thead.push_child(Node::Element(header_row));

    let mut tbody = Element::new("tbody");
    for item in list.element_children().filter(|child| child.name == "li") {
        let (name, value) = split_entry(&item.text_content());

        let mut row = Element::new("tr");
        row.push_child(cell(&name, "Specification"));
        row.push_child(cell(&value, "Value"));
        tbody.push_child(Node::Element(row));
    }

    let mut table = Element::new("table");
    table.push_child(Node::Element(thead));
    table.push_child(Node::Element(tbody));
    Node::Element(table)
}

fn cell(text: &str, label: &str) -> Node {
    let mut td = Element::new("td");
    td.set_attr("data-label", label);
    if !text.is_empty() {
        td.push_child(Node::text(text));
    }
    Node::Element(td)
}

/// Split item text into (specification, value) on the first separator found,
/// trying each separator in priority order. Without a separator the whole
/// text is the specification and the value is empty. Both halves are
/// trimmed.
fn split_entry(text: &str) -> (String, String) {
    for separator in SEPARATORS {
        if let Some((name, value)) = text.split_once(separator) {
            return (name.trim().to_string(), value.trim().to_string());
        }
    }
    (text.trim().to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse;
    use tidymark_core::serialize_node;

    fn list_from(input: &str) -> Element {
        let document = parse(input).unwrap();
        document.children[0].as_element().unwrap().clone()
    }

    #[test]
    fn test_split_on_colon() {
        assert_eq!(
            split_entry("Weight: 1.5 lbs"),
            ("Weight".to_string(), "1.5 lbs".to_string())
        );
    }

    #[test]
    fn test_colon_beats_dash() {
        assert_eq!(
            split_entry("Weight: 1.5 lbs - approx"),
            ("Weight".to_string(), "1.5 lbs - approx".to_string())
        );
    }

    #[test]
    fn test_dash_beats_en_dash() {
        assert_eq!(
            split_entry("Range – 10 - 20 m"),
            ("Range – 10".to_string(), "20 m".to_string())
        );
    }

    #[test]
    fn test_en_dash() {
        assert_eq!(
            split_entry("Battery – 12 hours"),
            ("Battery".to_string(), "12 hours".to_string())
        );
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(
            split_entry("  Waterproof casing  "),
            ("Waterproof casing".to_string(), String::new())
        );
    }

    #[test]
    fn test_hyphenated_word_still_splits() {
        // A hyphen counts as a separator even mid-word.
        assert_eq!(
            split_entry("Aircraft-grade aluminum"),
            ("Aircraft".to_string(), "grade aluminum".to_string())
        );
    }

    #[test]
    fn test_table_structure() {
        let list = list_from("<ul><li>Weight: 1.5 lbs</li><li>Battery: 12h</li></ul>");
        let table = build_table(&list);
        assert_eq!(
            serialize_node(&table),
            "<table><thead><tr><th>Specification</th><th>Value</th></tr></thead><tbody>\
             <tr><td data-label=\"Specification\">Weight</td><td data-label=\"Value\">1.5 lbs</td></tr>\
             <tr><td data-label=\"Specification\">Battery</td><td data-label=\"Value\">12h</td></tr>\
             </tbody></table>"
        );
    }

    #[test]
    fn test_item_without_separator_gets_empty_value() {
        let list = list_from("<ul><li>Waterproof</li></ul>");
        let table = build_table(&list);
        assert_eq!(
            serialize_node(&table),
            "<table><thead><tr><th>Specification</th><th>Value</th></tr></thead><tbody>\
             <tr><td data-label=\"Specification\">Waterproof</td><td data-label=\"Value\"></td></tr>\
             </tbody></table>"
        );
    }

    #[test]
    fn test_nested_markup_in_items_flattened_to_text() {
        let list = list_from("<ul><li><b>Weight</b>: <i>1.5</i> lbs</li></ul>");
        let table = build_table(&list);
        let rendered = serialize_node(&table);
        assert!(rendered.contains(r#"<td data-label="Specification">Weight</td>"#));
        assert!(rendered.contains(r#"<td data-label="Value">1.5 lbs</td>"#));
    }
}
