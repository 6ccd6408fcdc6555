//! DOM Operations Adapter
//!
//! Read-only helpers over the `dom_query` crate. Extraction never mutates the
//! parsed document: every function here inspects nodes or navigates between
//! them, and all extraction state lives outside the tree.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Identity of the first node in the selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|n| n.id)
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get next element sibling (skipping text and comment nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::next_element_sibling)
        .map(Selection::from)
}

/// Direct element children, in document order.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children().nodes().iter().map(|n| Selection::from(*n)).collect()
}

/// Every element below `sel`, in document order.
#[must_use]
pub fn descendants<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.select("*").nodes().iter().map(|n| Selection::from(*n)).collect()
}

/// Node ids of every element ancestor, nearest first.
#[must_use]
pub fn ancestor_ids(sel: &Selection) -> Vec<NodeId> {
    let mut ids = Vec::new();
    let mut current = sel.nodes().first().and_then(dom_query::NodeRef::parent);
    while let Some(node) = current {
        if node.is_element() {
            ids.push(node.id);
        }
        current = node.parent();
    }
    ids
}

// === Document Helpers ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Trimmed text of the first `<title>` element, if non-empty.
#[must_use]
pub fn title(doc: &Document) -> Option<String> {
    let title = doc.select("title");
    if !title.exists() {
        return None;
    }
    let text = title.first().text().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
