//! Extraction state.
//!
//! The document is never annotated during extraction. Everything a pass
//! accumulates lives here: the append-only `ContentBuffer`, and a
//! `NodeTracker` that remembers which nodes have already been emitted so a
//! nested `<code>` inside an emitted `<pre>` is not written twice.

use std::collections::HashSet;

use dom_query::{NodeId, Selection};

use crate::dom;

/// Ordered, append-only sequence of extracted fragments for one pass.
///
/// Blank fragments are dropped on push. The joined text uses blank-line
/// separators and is trimmed.
#[derive(Debug, Default, Clone)]
pub struct ContentBuffer {
    fragments: Vec<String>,
}

impl ContentBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Whitespace-only fragments are ignored.
    pub fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !fragment.trim().is_empty() {
            self.fragments.push(fragment);
        }
    }

    /// Append every fragment of `other`, in order.
    pub fn extend(&mut self, other: ContentBuffer) {
        self.fragments.extend(other.fragments);
    }

    /// Whether no fragment has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether any fragment contains `symbol` as a substring.
    #[must_use]
    pub fn mentions(&self, symbol: &str) -> bool {
        self.fragments.iter().any(|f| f.contains(symbol))
    }

    /// Fragments in append order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Join with blank lines and trim.
    #[must_use]
    pub fn joined(&self) -> String {
        self.fragments.join("\n\n").trim().to_string()
    }
}

/// Tracks nodes already written to a buffer.
#[derive(Debug, Default)]
pub struct NodeTracker {
    processed_nodes: HashSet<NodeId>,
}

impl NodeTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a node as emitted.
    pub fn mark_done(&mut self, node_id: NodeId) {
        self.processed_nodes.insert(node_id);
    }

    /// Check if a node has been emitted.
    #[must_use]
    pub fn is_done(&self, node_id: NodeId) -> bool {
        self.processed_nodes.contains(&node_id)
    }

    /// Whether the node or any of its ancestors has been emitted.
    #[must_use]
    pub fn is_covered(&self, sel: &Selection) -> bool {
        let Some(id) = dom::node_id(sel) else {
            return false;
        };
        self.is_done(id) || dom::ancestor_ids(sel).into_iter().any(|a| self.is_done(a))
    }
}
