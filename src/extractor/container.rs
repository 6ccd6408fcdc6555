//! Function-container heuristic.
//!
//! Decides whether a node is "the place where this symbol is documented".
//! Two matching rules coexist:
//!
//! - substring: a heading whose text merely *contains* the symbol qualifies;
//! - exact: a generic block (`section`/`div`/`article`) only qualifies through
//!   an embedded heading whose trimmed text *equals* the symbol, so a page
//!   region is not claimed just because the name appears in its prose.

use dom_query::Selection;

use crate::dom;
use crate::selector::{self, utils, Selector};

use super::tags::{is_heading, BLOCK_CONTAINER_TAGS};

/// Attributes checked for a symbol-derived value.
pub const SYMBOL_ATTRIBUTES: [&str; 4] = ["id", "name", "data-function", "data-method"];

const HEADING_SELECTORS: &[Selector] = &[
    Selector::Tag("h1"),
    Selector::Tag("h2"),
    Selector::Tag("h3"),
    Selector::Tag("h4"),
    Selector::Tag("h5"),
    Selector::Tag("h6"),
];

/// Why a node was accepted as a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// A heading whose text contains the symbol.
    Heading,
    /// An `id`/`name`/`data-*` attribute equal to the symbol or a decorated form.
    Attribute,
    /// A block element with a descendant heading whose text is exactly the symbol.
    EmbeddedHeading,
}

/// The values an attribute may hold to name `symbol`.
#[must_use]
pub fn decorated_forms(symbol: &str) -> [String; 5] {
    [
        symbol.to_string(),
        format!("{symbol}-method"),
        format!("{symbol}-function"),
        format!("method-{symbol}"),
        format!("function-{symbol}"),
    ]
}

/// Classify `sel` as a container for `symbol`, if it is one.
///
/// Rules are tried in the order of [`ContainerKind`]. An empty symbol never
/// matches.
#[must_use]
pub fn classify(sel: &Selection, symbol: &str) -> Option<ContainerKind> {
    if symbol.is_empty() {
        return None;
    }
    if is_symbol_heading(sel, symbol) {
        return Some(ContainerKind::Heading);
    }
    if has_symbol_attribute(sel, symbol) {
        return Some(ContainerKind::Attribute);
    }
    if has_exact_heading(sel, symbol) {
        return Some(ContainerKind::EmbeddedHeading);
    }
    None
}

/// Whether `sel` is a function container for `symbol`.
#[inline]
#[must_use]
pub fn is_function_container(sel: &Selection, symbol: &str) -> bool {
    classify(sel, symbol).is_some()
}

/// Heading whose text contains `symbol` (case-sensitive substring).
#[must_use]
pub fn is_symbol_heading(sel: &Selection, symbol: &str) -> bool {
    !symbol.is_empty() && is_heading(sel) && dom::text_content(sel).contains(symbol)
}

/// One of [`SYMBOL_ATTRIBUTES`] equals a decorated form of `symbol`, either
/// as written or after lowercasing the attribute value. The symbol itself is
/// never lowercased.
#[must_use]
pub fn has_symbol_attribute(sel: &Selection, symbol: &str) -> bool {
    if symbol.is_empty() {
        return false;
    }
    let forms = decorated_forms(symbol);
    SYMBOL_ATTRIBUTES.iter().any(|name| {
        let value = utils::attr(sel, name);
        if value.is_empty() {
            return false;
        }
        forms
            .iter()
            .any(|form| *form == value || *form == value.to_lowercase())
    })
}

/// `section`/`div`/`article` holding a heading whose trimmed text is exactly `symbol`.
#[must_use]
pub fn has_exact_heading(sel: &Selection, symbol: &str) -> bool {
    if symbol.is_empty() || !utils::is_one_of_tags(sel, &BLOCK_CONTAINER_TAGS) {
        return false;
    }
    selector::query_within(sel, HEADING_SELECTORS, symbol)
        .iter()
        .any(|heading| dom::text_content(heading).trim() == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_substring_match() {
        let doc = dom::parse("<h3>client.createUser(options)</h3>");
        let h3 = doc.select("h3");
        assert_eq!(classify(&h3, "createUser"), Some(ContainerKind::Heading));
    }

    #[test]
    fn test_heading_match_is_case_sensitive() {
        let doc = dom::parse("<h3>CreateUser</h3>");
        assert_eq!(classify(&doc.select("h3"), "createUser"), None);
    }

    #[test]
    fn test_attribute_forms() {
        for id in ["foo", "foo-method", "foo-function", "method-foo", "function-foo"] {
            let doc = dom::parse(&format!(r#"<div id="{id}">text</div>"#));
            assert_eq!(
                classify(&doc.select("div"), "foo"),
                Some(ContainerKind::Attribute),
                "id {id} should qualify"
            );
        }
    }

    #[test]
    fn test_attribute_names() {
        let html = r#"
            <a name="foo">1</a>
            <span data-function="foo">2</span>
            <span data-method="method-foo">3</span>
        "#;
        let doc = dom::parse(html);
        assert!(has_symbol_attribute(&doc.select("a"), "foo"));
        assert!(has_symbol_attribute(&doc.select("[data-function]"), "foo"));
        assert!(has_symbol_attribute(&doc.select("[data-method]"), "foo"));
    }

    #[test]
    fn test_attribute_lowercased_value_matches_lowercase_symbol() {
        let doc = dom::parse(r#"<div id="CreateUser-Method">text</div>"#);
        assert!(has_symbol_attribute(&doc.select("div"), "createuser"));
    }

    #[test]
    fn test_attribute_mixed_case_symbol_not_lowercased() {
        let doc = dom::parse(r#"<div id="CREATEUSER-METHOD">text</div>"#);
        assert!(!has_symbol_attribute(&doc.select("div"), "createUser"));
        let doc = dom::parse(r#"<div id="createuser-method">text</div>"#);
        assert!(!has_symbol_attribute(&doc.select("div"), "createUser"));
    }

    #[test]
    fn test_attribute_partial_value_rejected() {
        let doc = dom::parse(r#"<div id="foo-method-list">text</div>"#);
        assert!(!has_symbol_attribute(&doc.select("div"), "foo"));
    }

    #[test]
    fn test_embedded_heading_exact_match() {
        let doc = dom::parse("<section><h4>  deleteUser \n</h4><p>Deletes.</p></section>");
        assert_eq!(
            classify(&doc.select("section"), "deleteUser"),
            Some(ContainerKind::EmbeddedHeading)
        );
    }

    #[test]
    fn test_block_rejected_on_substring_only() {
        let html = r#"
            <div>
                <h2>User management</h2>
                <p>Call deleteUser to remove an account.</p>
                <h3>deleteUser options</h3>
            </div>
        "#;
        let doc = dom::parse(html);
        assert_eq!(classify(&doc.select("div"), "deleteUser"), None);
    }

    #[test]
    fn test_embedded_heading_requires_block_tag() {
        let doc = dom::parse("<aside><h4>deleteUser</h4></aside>");
        assert_eq!(classify(&doc.select("aside"), "deleteUser"), None);
    }

    #[test]
    fn test_empty_symbol_never_matches() {
        let doc = dom::parse(r#"<section id=""><h2></h2></section>"#);
        assert_eq!(classify(&doc.select("section"), ""), None);
        assert_eq!(classify(&doc.select("h2"), ""), None);
    }

    #[test]
    fn test_plain_paragraph_is_not_container() {
        let doc = dom::parse("<p>foo is mentioned here</p>");
        assert!(!is_function_container(&doc.select("p"), "foo"));
    }
}
