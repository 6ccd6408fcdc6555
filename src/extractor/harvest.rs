//! Document-level code and table harvester.
//!
//! Runs independently of the container selectors on the targeted pass: every
//! `pre`/`code`/`table` in the document whose text mentions the symbol (or
//! every one of them when no symbol is given) is appended after the section
//! text. Code is emitted as a fenced block of its text, tables as HTML.

use dom_query::Document;

use crate::dom;
use crate::selector::{self, utils, Selector};

use super::state::{ContentBuffer, NodeTracker};
use super::tags::CODE_TAGS;

const HARVEST_SELECTORS: &[Selector] = &[
    Selector::Tag("pre"),
    Selector::Tag("code"),
    Selector::Tag("table"),
];

/// Collect code samples and tables from the whole document, in document order.
///
/// A `code` nested in an already collected `pre` is not collected again.
#[must_use]
pub fn harvest_document(doc: &Document, symbol: &str) -> ContentBuffer {
    let mut buffer = ContentBuffer::new();
    let mut tracker = NodeTracker::new();

    for item in selector::query_all(doc, HARVEST_SELECTORS, symbol) {
        if tracker.is_covered(&item) {
            continue;
        }
        let text = dom::text_content(&item);
        if text.trim().is_empty() || (!symbol.is_empty() && !text.contains(symbol)) {
            continue;
        }
        if let Some(id) = dom::node_id(&item) {
            tracker.mark_done(id);
        }

        if utils::is_one_of_tags(&item, &CODE_TAGS) {
            buffer.push(fence(text.trim_end_matches(['\n', '\r'])));
        } else {
            buffer.push(dom::outer_html(&item).to_string());
        }
    }

    buffer
}

fn fence(code: &str) -> String {
    format!("```\n{code}\n```")
}
