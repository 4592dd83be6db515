//! Applying the fixed visual-class vocabulary and table cell labels.

use tidymark_core::{Document, Element, Node};

use crate::tags;

/// The fixed class string for a tag, or `None` for tags the stylist leaves
/// alone.
fn class_for(tag: &str) -> Option<&'static str> {
    Some(match tag {
        "h1" => "content-title",
        "h2" => "content-heading",
        "h3" => "content-subheading",
        "h4" | "h5" | "h6" => "content-minor-heading",
        "p" => "content-paragraph",
        "ul" => "content-list",
        "ol" => "content-list content-list-ordered",
        "li" => "content-list-item",
        "strong" | "b" => "content-bold",
        "em" | "i" => "content-italic",
        "table" => "specifications-table",
        "th" => "spec-header-cell",
        "td" => "spec-cell",
        "center" => "content-centered",
        tag if tags::is_embedded(tag) => "embedded-media",
        _ => return None,
    })
}

/// Overwrite the `class` attribute of every mapped element and label every
/// table's data cells, in place. Work-list traversal; idempotent.
pub fn apply_styles(document: &mut Document) {
    let mut stack: Vec<&mut Node> = document.children.iter_mut().collect();

    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node {
            if let Some(class) = class_for(&element.name) {
                element.set_attr("class", class);
            }
            if element.name == "table" {
                label_table(element);
            }
            stack.extend(element.children.iter_mut());
        }
    }
}

/// Give every data cell a `data-label` matching its column header, so a
/// narrow-viewport stylesheet can render each cell with its own caption.
///
/// Works on any table shape: built by the pipeline, pasted in by the user,
/// with or without a `<thead>`, with or without header cells at all.
fn label_table(table: &mut Element) {
    let (headers, skip_first_row) = header_texts(table);
    if headers.is_empty() {
        return;
    }

    let mut rows = Vec::new();
    collect_data_rows(table, &mut rows);

    let skipped = usize::from(skip_first_row);
    for row in rows.into_iter().skip(skipped) {
        let mut column = 0;
        for cell in row.children.iter_mut() {
            let Some(element) = cell.as_element_mut() else {
                continue;
            };
            if element.name != "td" {
                continue;
            }
            if let Some(header) = headers.get(column) {
                element.set_attr("data-label", header);
            }
            column += 1;
        }
    }
}

/// Column header texts for a table, plus whether the first collected row
/// served as the header row (and must not be labelled as data).
///
/// Priority: `<th>` cells inside a `<thead>`; then `<th>` cells of the first
/// row; then synthesized `Column N` placeholders sized to the first row.
/// Blank header cells also fall back to `Column N`.
fn header_texts(table: &Element) -> (Vec<String>, bool) {
    if let Some(thead) = table.element_children().find(|child| child.name == "thead") {
        let mut texts = Vec::new();
        for row in thead.element_children().filter(|child| child.name == "tr") {
            for cell in row.element_children().filter(|child| child.name == "th") {
                texts.push(header_label(&cell.text_content(), texts.len()));
            }
        }
        if !texts.is_empty() {
            return (texts, false);
        }
    }

    let Some(first_row) = first_row(table) else {
        return (Vec::new(), false);
    };

    let th_texts: Vec<String> = first_row
        .element_children()
        .filter(|child| child.name == "th")
        .enumerate()
        .map(|(index, cell)| header_label(&cell.text_content(), index))
        .collect();
    if !th_texts.is_empty() {
        return (th_texts, true);
    }

    let cell_count = first_row
        .element_children()
        .filter(|child| child.name == "td")
        .count();
    ((1..=cell_count).map(|n| format!("Column {n}")).collect(), false)
}

fn header_label(text: &str, index: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        format!("Column {}", index + 1)
    } else {
        trimmed.to_string()
    }
}

/// The first row outside any `<thead>`, whether a direct child or inside a
/// row group.
fn first_row(table: &Element) -> Option<&Element> {
    for child in table.element_children() {
        match child.name.as_str() {
            "tr" => return Some(child),
            "tbody" | "tfoot" => {
                if let Some(row) = child.element_children().find(|el| el.name == "tr") {
                    return Some(row);
                }
            }
            _ => {}
        }
    }
    None
}

/// Collect mutable references to every data row, in document order,
/// excluding rows inside `<thead>` and anything inside a nested table (the
/// outer pass must not relabel an inner table's cells).
fn collect_data_rows<'a>(table: &'a mut Element, rows: &mut Vec<&'a mut Element>) {
    // Children are pushed in reverse so rows pop off in document order.
    let mut pending: Vec<&'a mut Node> = table.children.iter_mut().rev().collect();

    while let Some(node) = pending.pop() {
        let Node::Element(element) = node else {
            continue;
        };
        match element.name.as_str() {
            "tr" => rows.push(element),
            "tbody" | "tfoot" => pending.extend(element.children.iter_mut().rev()),
            _ => {}
        }
    }
}
