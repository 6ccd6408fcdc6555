//! Utility functions for selector pattern matching
//!
//! Attribute access with empty-string defaults and tag checks used by the
//! selector matcher and the container heuristic.

use crate::dom;
use dom_query::Selection;

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Whether the whitespace-separated class list contains `token`.
///
/// # Example
///
/// ```rust
/// use rs_docscrape::selector::utils;
/// use rs_docscrape::dom;
///
/// let doc = dom::parse(r#"<div class="markdown-body wide">text</div>"#);
/// let div = doc.select("div");
///
/// assert!(utils::has_class(&div, "markdown-body"));
/// assert!(!utils::has_class(&div, "markdown"));
/// ```
#[must_use]
pub fn has_class(sel: &Selection, token: &str) -> bool {
    sel.attr("class")
        .is_some_and(|c| c.split_ascii_whitespace().any(|t| t == token))
}

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}

/// Check if element is one of the specified tags
///
/// # Example
///
/// ```rust
/// use rs_docscrape::selector::utils;
/// use rs_docscrape::dom;
///
/// let doc = dom::parse("<article>content</article>");
/// let article = doc.select("article");
///
/// assert!(utils::is_one_of_tags(&article, &["article", "div", "section"]));
/// assert!(!utils::is_one_of_tags(&article, &["div", "span", "p"]));
/// ```
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attributes_are_empty() {
        let doc = dom::parse("<p>text</p>");
        let p = doc.select("p");
        assert_eq!(id(&p), "");
        assert_eq!(class(&p), "");
        assert_eq!(attr(&p, "data-method"), "");
    }

    #[test]
    fn test_present_attributes() {
        let doc = dom::parse(r#"<div id="main" class="content" data-function="run">text</div>"#);
        let div = doc.select("div");
        assert_eq!(id(&div), "main");
        assert_eq!(class(&div), "content");
        assert_eq!(attr(&div, "data-function"), "run");
    }

    #[test]
    fn test_has_class_token_boundaries() {
        let doc = dom::parse(r#"<div class="api-docs  content">x</div>"#);
        let div = doc.select("div");
        assert!(has_class(&div, "api-docs"));
        assert!(has_class(&div, "content"));
        assert!(!has_class(&div, "docs"));
        assert!(!has_class(&div, "api"));
    }

    #[test]
    fn test_is_tag() {
        let doc = dom::parse("<section>x</section>");
        let section = doc.select("section");
        assert!(is_tag(&section, "section"));
        assert!(!is_tag(&section, "div"));
    }
}
