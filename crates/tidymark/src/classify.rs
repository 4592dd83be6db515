//! Detecting specification lists and rewriting them in place.
//!
//! Two strategies run in order; the first that claims a list wins:
//!
//! 1. heading-anchored — a heading whose text names product specifications
//!    marks the next list among its siblings;
//! 2. pattern-anchored — a labelled preceding sibling, or a majority of
//!    items whose text looks like a name/value pair.

use once_cell::sync::Lazy;
use regex::Regex;

use tidymark_core::{Document, Element, Node};

use crate::service::TidyOptions;
use crate::table;
use crate::tags;

/// Phrases that mark a heading or label as introducing specifications.
const SPEC_KEYWORDS: &[&str] = &[
    "product specifications",
    "specifications",
    "tech specs",
    "technical specifications",
];

/// A word-run followed by a space and a digit ("Battery Life 12", "USB 3").
static MEASUREMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s]+ \d").expect("measurement pattern is valid"));

fn mentions_specifications(text: &str) -> bool {
    let lowered = text.to_lowercase();
    SPEC_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Convert every detected specification list in the tree into a table.
pub fn restructure(document: &mut Document, options: &TidyOptions) {
    if let Some(level) = anchor_heading_level(document) {
        for_each_sibling_run(document, |siblings| convert_after_headings(siblings, level));
    }
    for_each_sibling_run(document, |siblings| convert_pattern_lists(siblings, options));
}

/// Run a visitor over every sibling vector in the tree (the document's
/// top-level children and each element's children), via an explicit
/// work-list.
fn for_each_sibling_run(document: &mut Document, mut visit: impl FnMut(&mut Vec<Node>)) {
    let mut stack: Vec<&mut Vec<Node>> = vec![&mut document.children];

    while let Some(siblings) = stack.pop() {
        visit(siblings);
        for node in siblings.iter_mut() {
            if let Node::Element(element) = node {
                stack.push(&mut element.children);
            }
        }
    }
}

/// The first heading level (h1, then h2, then h3) present anywhere in the
/// tree. Only that level is scanned for anchors.
fn anchor_heading_level(document: &Document) -> Option<&'static str> {
    let mut counts = [0usize; 3];
    let mut stack: Vec<&Node> = document.children.iter().collect();

    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node {
            match element.name.as_str() {
                "h1" => counts[0] += 1,
                "h2" => counts[1] += 1,
                "h3" => counts[2] += 1,
                _ => {}
            }
            stack.extend(element.children.iter());
        }
    }

    ["h1", "h2", "h3"]
        .into_iter()
        .zip(counts)
        .find_map(|(level, count)| (count > 0).then_some(level))
}

/// Heading-anchored detection: after each matching heading of the anchor
/// level, the first following `<ul>`/`<ol>` sibling becomes a table. The
/// walk skips other nodes and gives up at the next heading or end of parent.
fn convert_after_headings(siblings: &mut Vec<Node>, level: &str) {
    for anchor in 0..siblings.len() {
        let is_anchor = match &siblings[anchor] {
            Node::Element(element) if element.name == level => {
                mentions_specifications(&element.text_content())
            }
            _ => false,
        };
        if !is_anchor {
            continue;
        }

        let mut next = anchor + 1;
        while next < siblings.len() {
            let Node::Element(element) = &siblings[next] else {
                next += 1;
                continue;
            };
            if tags::is_list(&element.name) {
                log::debug!("heading anchor: converting <{}> to specification table", element.name);
                let replacement = table::build_table(element);
                siblings[next] = replacement;
                break;
            }
            if tags::is_heading(&element.name) {
                break;
            }
            next += 1;
        }
    }
}

/// Pattern-anchored detection over every remaining `<ul>`: a labelled
/// preceding sibling converts outright; otherwise the item-text heuristic
/// decides.
fn convert_pattern_lists(siblings: &mut Vec<Node>, options: &TidyOptions) {
    for index in 0..siblings.len() {
        let Node::Element(element) = &siblings[index] else {
            continue;
        };
        if element.name != "ul" {
            continue;
        }
        if !preceded_by_label(siblings, index) && !scores_as_specification(element, options) {
            continue;
        }

        log::debug!("pattern anchor: converting <ul> to specification table");
        let replacement = table::build_table(element);
        siblings[index] = replacement;
    }
}

/// Check the nearest preceding sibling that is not whitespace-only text for
/// a specification label.
fn preceded_by_label(siblings: &[Node], index: usize) -> bool {
    siblings[..index]
        .iter()
        .rev()
        .find(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()))
        .is_some_and(|node| mentions_specifications(&node.text_content()))
}

/// Fraction of direct `<li>` children whose text looks like a name/value
/// pair, compared against the configured threshold. Empty lists never
/// match.
fn scores_as_specification(list: &Element, options: &TidyOptions) -> bool {
    let items: Vec<&Element> = list
        .element_children()
        .filter(|child| child.name == "li")
        .collect();
    if items.is_empty() {
        return false;
    }

    let matching = items
        .iter()
        .filter(|item| looks_like_spec_entry(&item.text_content()))
        .count();

    matching as f64 / items.len() as f64 > options.spec_score_threshold
}

fn looks_like_spec_entry(text: &str) -> bool {
    text.contains(':') || text.contains(" - ") || MEASUREMENT_PATTERN.is_match(text.trim())
}
