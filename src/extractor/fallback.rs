//! Fallback pass.
//!
//! Trades selectivity for recall: every element of a freshly fetched
//! document is visited, and any content-bearing element whose text contains
//! the symbol goes through the same section extractor as the targeted pass.
//! Only run when the targeted pass produced nothing usable.

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::selector::{self, utils, Selector};
use crate::Options;

use super::section::extract_relevant_section;
use super::state::ContentBuffer;

/// Run the wildcard pass over `doc`. Always starts from an empty buffer.
///
/// An empty symbol yields an empty buffer.
#[must_use]
pub fn fallback_pass(doc: &Document, symbol: &str, options: &Options) -> ContentBuffer {
    let mut buffer = ContentBuffer::new();
    if symbol.is_empty() {
        return buffer;
    }
    let mut visited = 0usize;

    for node in selector::query_all(doc, &[Selector::Wildcard], symbol) {
        visited += 1;
        let tag = utils::tag(&node);
        if !options.is_content_tag(&tag) {
            continue;
        }

        if !dom::text_content(&node).contains(symbol) {
            continue;
        }
        let section = extract_relevant_section(&node, symbol, options.max_search_depth);
        if !section.is_empty() {
            debug!(%tag, id = %utils::id(&node), len = section.len(), "fallback section extracted");
            buffer.push(section);
        }
    }

    debug!(visited, fragments = buffer.len(), "fallback pass finished");
    buffer
}
