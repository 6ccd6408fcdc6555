//! Tag tables used by the extractor.
//!
//! Arrays for iteration, plus `heading_level` for section boundaries.

use dom_query::Selection;

use crate::selector::utils;

/// Heading tags, most significant first.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Block elements that can be claimed as a container through an embedded
/// heading whose text is exactly the symbol.
pub static BLOCK_CONTAINER_TAGS: [&str; 3] = ["section", "div", "article"];

/// Code sample tags.
pub static CODE_TAGS: [&str; 2] = ["pre", "code"];

/// Parameter/return tables and lists.
pub static LIST_TABLE_TAGS: [&str; 4] = ["table", "ul", "ol", "dl"];

/// Content-bearing tags accepted by the fallback pass.
///
/// Block and text containers only. Page chrome (`nav`, `header`, `footer`)
/// and inline tags are left out.
pub static CONTENT_TAGS: &[&str] = &[
    "div", "section", "article", "main", "p", "pre", "code", "table", "ul", "ol", "dl",
    "blockquote", "figure", "details", "summary", "aside", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Level of a heading element (1 for `h1` .. 6 for `h6`), `None` for anything else.
#[must_use]
pub fn heading_level(sel: &Selection) -> Option<u8> {
    let tag = utils::tag(sel);
    HEADING_TAGS
        .iter()
        .position(|h| *h == tag)
        .and_then(|i| u8::try_from(i + 1).ok())
}

/// Whether the element is `h1`..`h6`.
#[inline]
#[must_use]
pub fn is_heading(sel: &Selection) -> bool {
    heading_level(sel).is_some()
}
