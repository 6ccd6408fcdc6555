//! Selector Infrastructure
//!
//! Selectors are declarative data rather than branching code: each variant
//! describes one CSS-like test, and a single generic matcher evaluates any of
//! them against a node. Selectors are pure and stateless.

use std::fmt;

use dom_query::{Document, Selection};

use crate::dom;

pub mod docs;
pub mod utils;

/// A declarative node pattern.
///
/// `SymbolAttr` is the only variant that depends on the symbol being
/// searched for: its expected value is `{prefix}{symbol}{suffix}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Element with this tag name (`main`).
    Tag(&'static str),
    /// Element carrying this class token (`.docs`).
    Class(&'static str),
    /// Element with this exact id (`#documentation`).
    Id(&'static str),
    /// Element whose attribute equals a fixed value (`[role='main']`).
    AttrEquals {
        /// Attribute name.
        name: &'static str,
        /// Required value.
        value: &'static str,
    },
    /// Element whose attribute equals the decorated symbol (`[id='method-{symbol}']`).
    SymbolAttr {
        /// Attribute name.
        name: &'static str,
        /// Text placed before the symbol.
        prefix: &'static str,
        /// Text placed after the symbol.
        suffix: &'static str,
    },
    /// Any element (`*`).
    Wildcard,
}

impl Selector {
    /// Symbol-substituted attribute selector with no decoration.
    #[must_use]
    pub const fn symbol(name: &'static str) -> Self {
        Self::SymbolAttr {
            name,
            prefix: "",
            suffix: "",
        }
    }

    /// Test one node against this selector.
    ///
    /// `SymbolAttr` never matches when `symbol` is empty.
    #[must_use]
    pub fn matches(&self, sel: &Selection, symbol: &str) -> bool {
        match *self {
            Self::Tag(tag) => utils::is_tag(sel, tag),
            Self::Class(class) => utils::has_class(sel, class),
            Self::Id(id) => utils::id(sel) == id,
            Self::AttrEquals { name, value } => sel.attr(name).is_some_and(|v| &*v == value),
            Self::SymbolAttr { name, prefix, suffix } => {
                if symbol.is_empty() {
                    return false;
                }
                sel.attr(name).is_some_and(|v| {
                    v.strip_prefix(prefix)
                        .and_then(|rest| rest.strip_suffix(suffix))
                        .is_some_and(|middle| middle == symbol)
                })
            }
            Self::Wildcard => sel.nodes().first().is_some_and(|n| n.is_element()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Id(id) => write!(f, "#{id}"),
            Self::AttrEquals { name, value } => write!(f, "[{name}='{value}']"),
            Self::SymbolAttr { name, prefix, suffix } => {
                write!(f, "[{name}='{prefix}{{symbol}}{suffix}']")
            }
            Self::Wildcard => write!(f, "*"),
        }
    }
}

/// All elements of `doc` that match any of `selectors`, in document order.
///
/// A node matched by several selectors is returned once.
///
/// # Example
///
/// ```rust
/// use rs_docscrape::dom;
/// use rs_docscrape::selector::{self, Selector};
///
/// let doc = dom::parse(r#"<main><div class="docs">a</div></main><article>b</article>"#);
/// let found = selector::query_all(&doc, &[Selector::Tag("article"), Selector::Class("docs")], "");
/// assert_eq!(found.len(), 2);
/// assert_eq!(dom::text_content(&found[0]).to_string(), "a");
/// ```
#[must_use]
pub fn query_all<'a>(doc: &'a Document, selectors: &[Selector], symbol: &str) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();
    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        if selectors.iter().any(|s| s.matches(&sel, symbol)) {
            matches.push(sel);
        }
    }
    matches
}

/// The first of `selectors` that matches `sel`.
#[must_use]
pub fn first_match(selectors: &[Selector], sel: &Selection, symbol: &str) -> Option<Selector> {
    selectors.iter().copied().find(|s| s.matches(sel, symbol))
}

/// Like [`query_all`], but only below `root`. `root` itself is not tested.
#[must_use]
pub fn query_within<'a>(root: &Selection<'a>, selectors: &[Selector], symbol: &str) -> Vec<Selection<'a>> {
    dom::descendants(root)
        .into_iter()
        .filter(|sel| selectors.iter().any(|s| s.matches(sel, symbol)))
        .collect()
}
