//! Documentation container selectors.
//!
//! Two tiers. The symbol tier holds exact-match containers (an id, name or
//! data attribute built from the symbol) and is always tried first; the
//! generic tier holds the usual "main content" regions of documentation
//! sites.

use super::Selector;

/// Which list a selector came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Attribute patterns derived from the symbol.
    Symbol,
    /// Generic documentation containers.
    Generic,
}

/// Selectors built from the symbol name, in priority order.
pub const SYMBOL_SELECTORS: &[Selector] = &[
    Selector::symbol("id"),
    Selector::SymbolAttr { name: "id", prefix: "", suffix: "-method" },
    Selector::SymbolAttr { name: "id", prefix: "", suffix: "-function" },
    Selector::SymbolAttr { name: "id", prefix: "method-", suffix: "" },
    Selector::SymbolAttr { name: "id", prefix: "function-", suffix: "" },
    Selector::symbol("name"),
    Selector::symbol("data-function"),
    Selector::symbol("data-method"),
];

/// Generic documentation containers.
pub const GENERIC_CONTAINERS: &[Selector] = &[
    Selector::Tag("main"),
    Selector::Tag("article"),
    Selector::Class("documentation"),
    Selector::Class("docs"),
    Selector::Class("content"),
    Selector::Class("main-content"),
    Selector::Class("api-docs"),
    Selector::Class("api-reference"),
    Selector::Id("documentation"),
    Selector::Class("markdown-body"),
    Selector::AttrEquals { name: "role", value: "main" },
    Selector::Class("api-content"),
];

/// Selector tiers to run for `symbol`, in order.
///
/// An empty symbol means "extract broadly" and skips the symbol tier.
#[must_use]
pub fn tiers(symbol: &str) -> Vec<(Tier, &'static [Selector])> {
    let mut tiers = Vec::with_capacity(2);
    if !symbol.is_empty() {
        tiers.push((Tier::Symbol, SYMBOL_SELECTORS));
    }
    tiers.push((Tier::Generic, GENERIC_CONTAINERS));
    tiers
}
