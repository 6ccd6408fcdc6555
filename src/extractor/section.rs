//! Section extractor.
//!
//! Given an entry node that may relate to the symbol, find the container(s)
//! documenting it and render them:
//!
//! - a heading that mentions the symbol yields the heading plus every
//!   following element sibling up to, not including, the next heading of the
//!   same or a shallower level (document-outline semantics);
//! - any other container is emitted verbatim, descendants included;
//! - in both cases code samples, tables and lists inside the matched region
//!   that mention the symbol are appended as raw HTML.
//!
//! The container search descends at most `max_depth` levels below the entry
//! node and never below a node it has already claimed.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::patterns::clean_text;
use crate::selector::{self, utils, Selector};

use super::container::{classify, ContainerKind};
use super::state::{ContentBuffer, NodeTracker};
use super::tags::{heading_level, CODE_TAGS, LIST_TABLE_TAGS};

const REGION_SELECTORS: &[Selector] = &[
    Selector::Tag("pre"),
    Selector::Tag("code"),
    Selector::Tag("table"),
    Selector::Tag("ul"),
    Selector::Tag("ol"),
    Selector::Tag("dl"),
];

const BROAD_SELECTORS: &[Selector] = &[
    Selector::Tag("pre"),
    Selector::Tag("code"),
    Selector::Tag("table"),
];

/// Extract everything under `entry` that documents `symbol`.
///
/// Returns an empty string when no container is found within `max_depth`
/// levels; the caller decides what emptiness means.
#[must_use]
pub fn extract_relevant_section(entry: &Selection, symbol: &str, max_depth: usize) -> String {
    let mut buffer = ContentBuffer::new();
    search(entry, symbol, 0, max_depth, &mut buffer);
    buffer.joined()
}

fn search(node: &Selection, symbol: &str, depth: usize, max_depth: usize, out: &mut ContentBuffer) {
    if depth > max_depth {
        return;
    }

    if let Some(kind) = classify(node, symbol) {
        debug!(
            tag = %utils::tag(node),
            id = %utils::id(node),
            ?kind,
            depth,
            "function container found"
        );
        out.push(extract_container(node, symbol, kind));
        return;
    }

    for child in dom::element_children(node) {
        search(&child, symbol, depth + 1, max_depth, out);
    }
}

/// Render one container according to how it was matched.
#[must_use]
pub fn extract_container(node: &Selection, symbol: &str, kind: ContainerKind) -> String {
    let mut parts = Vec::new();
    let region = if kind == ContainerKind::Heading {
        let (heading, siblings) = heading_section(node);
        parts.push(heading);
        parts.extend(siblings.iter().map(|s| dom::outer_html(s).to_string()));
        siblings
    } else {
        parts.push(dom::inner_html(node).to_string());
        vec![node.clone()]
    };

    parts.extend(harvest_region(&region, symbol));
    parts.retain(|p| !p.trim().is_empty());
    parts.join("\n")
}

/// The heading rendered as `<hN>inner</hN>` and the element siblings that
/// belong to its section.
fn heading_section<'a>(heading: &Selection<'a>) -> (String, Vec<Selection<'a>>) {
    let tag = utils::tag(heading);
    let rendered = format!("<{tag}>{}</{tag}>", dom::inner_html(heading));
    let level = heading_level(heading).unwrap_or(u8::MAX);

    let mut siblings = Vec::new();
    let mut next = dom::next_element_sibling(heading);
    while let Some(sibling) = next {
        if heading_level(&sibling).is_some_and(|l| l <= level) {
            break;
        }
        next = dom::next_element_sibling(&sibling);
        siblings.push(sibling);
    }

    (rendered, siblings)
}

/// Code samples, tables and lists in `region` that mention `symbol`.
///
/// Region roots are candidates themselves. A candidate nested inside one
/// already taken is skipped.
fn harvest_region(region: &[Selection], symbol: &str) -> Vec<String> {
    let mut tracker = NodeTracker::new();
    let mut out = Vec::new();

    for root in region {
        let mut candidates = Vec::new();
        if utils::is_one_of_tags(root, &CODE_TAGS) || utils::is_one_of_tags(root, &LIST_TABLE_TAGS) {
            candidates.push(root.clone());
        }
        candidates.extend(selector::query_within(root, REGION_SELECTORS, symbol));

        for candidate in candidates {
            if tracker.is_covered(&candidate) || !dom::text_content(&candidate).contains(symbol) {
                continue;
            }
            if let Some(id) = dom::node_id(&candidate) {
                tracker.mark_done(id);
            }
            out.push(dom::outer_html(&candidate).to_string());
        }
    }

    out
}

/// Broad extraction of a container when no symbol is given: its cleaned text
/// followed by the inner HTML of every code sample and table inside it.
#[must_use]
pub fn extract_broad(container: &Selection) -> ContentBuffer {
    let mut buffer = ContentBuffer::new();
    buffer.push(clean_text(&dom::text_content(container)));

    let mut tracker = NodeTracker::new();
    for item in selector::query_within(container, BROAD_SELECTORS, "") {
        if tracker.is_covered(&item) {
            continue;
        }
        if let Some(id) = dom::node_id(&item) {
            tracker.mark_done(id);
        }
        buffer.push(dom::inner_html(&item).to_string());
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_for(html: &str, entry: &str, symbol: &str) -> String {
        let doc = dom::parse(html);
        extract_relevant_section(&doc.select(entry).first(), symbol, 3)
    }

    #[test]
    fn test_heading_section_stops_at_same_level() {
        let html = r#"
            <div id="root">
                <h2 id="createUser">createUser</h2>
                <p>Creates a user.</p>
                <h2>deleteUser</h2>
                <p>Deletes a user.</p>
            </div>
        "#;
        let out = section_for(html, "#createUser", "createUser");
        assert!(out.starts_with("<h2>createUser</h2>"));
        assert!(out.contains("<p>Creates a user.</p>"));
        assert!(!out.contains("deleteUser"));
        assert!(!out.contains("Deletes a user."));
    }

    #[test]
    fn test_heading_section_continues_through_deeper_headings() {
        let html = r#"
            <div>
                <h3>createUser</h3>
                <p>Intro.</p>
                <h4>Parameters</h4>
                <table><tr><td>name</td></tr></table>
                <h5>Notes</h5>
                <p>Rate limited.</p>
                <h6>Fine print</h6>
                <h3>updateUser</h3>
                <p>Other.</p>
            </div>
        "#;
        let out = section_for(html, "h3", "createUser");
        assert!(out.contains("Intro."));
        assert!(out.contains("<h4>Parameters</h4>"));
        assert!(out.contains("<td>name</td>"));
        assert!(out.contains("Rate limited."));
        assert!(out.contains("Fine print"));
        assert!(!out.contains("updateUser"));
        assert!(!out.contains("Other."));
    }

    #[test]
    fn test_heading_section_stops_at_shallower_heading() {
        let html = r#"
            <div>
                <h3>createUser</h3>
                <p>Inside.</p>
                <h2>Groups</h2>
                <p>Outside.</p>
            </div>
        "#;
        let out = section_for(html, "h3", "createUser");
        assert!(out.contains("Inside."));
        assert!(!out.contains("Groups"));
        assert!(!out.contains("Outside."));
    }

    #[test]
    fn test_heading_section_runs_to_end_of_parent() {
        let html = "<div><h2>run</h2><p>one</p><p>two</p></div><p>after</p>";
        let out = section_for(html, "h2", "run");
        assert!(out.contains("one"));
        assert!(out.contains("two"));
        assert!(!out.contains("after"));
    }

    #[test]
    fn test_non_heading_container_verbatim() {
        let html = r#"<div id="foo-method"><h3>Something else</h3><p>mentions foo only once</p></div>"#;
        let out = section_for(html, "#foo-method", "foo");
        assert!(out.contains("<h3>Something else</h3>"));
        assert!(out.contains("<p>mentions foo only once</p>"));
    }

    #[test]
    fn test_embedded_heading_container_verbatim() {
        let html = r#"
            <article id="a">
                <section>
                    <h3>listUsers</h3>
                    <p>Lists users.</p>
                    <h3>Pagination</h3>
                    <p>Cursor based.</p>
                </section>
            </article>
        "#;
        let out = section_for(html, "#a", "listUsers");
        // the article is claimed whole, so content after the second h3 is kept
        assert!(out.contains("Lists users."));
        assert!(out.contains("Cursor based."));
    }

    #[test]
    fn test_region_harvest_appends_code_mentioning_symbol() {
        let html = r#"
            <div>
                <h2>createUser</h2>
                <div class="example">
                    <pre><code>client.createUser({ name })</code></pre>
                    <pre><code>client.other()</code></pre>
                </div>
                <h2>next</h2>
            </div>
        "#;
        let out = section_for(html, "h2", "createUser");
        // once inside the walked sibling, once harvested
        assert_eq!(out.matches("client.createUser").count(), 2);
        assert_eq!(out.matches("client.other()").count(), 1);
    }

    #[test]
    fn test_region_harvest_skips_nested_code() {
        let html = r#"<div id="run-function"><pre><code>run()</code></pre></div>"#;
        let out = section_for(html, "#run-function", "run");
        // verbatim copy plus a single harvested <pre>, not an extra <code>
        assert_eq!(out.matches("run()").count(), 2);
        assert_eq!(out.matches("<pre>").count(), 2);
    }

    #[test]
    fn test_region_harvest_includes_tables_and_lists() {
        let html = r#"
            <div>
                <h2>createUser</h2>
                <ul><li>createUser accepts a name</li></ul>
                <table><tr><td>unrelated</td></tr></table>
            </div>
        "#;
        let out = section_for(html, "h2", "createUser");
        assert_eq!(out.matches("createUser accepts a name").count(), 2);
        assert_eq!(out.matches("unrelated").count(), 1);
    }

    #[test]
    fn test_search_finds_container_at_depth_three() {
        let html = r#"<main id="m"><aside><blockquote><h2>foo</h2><p>body</p></blockquote></aside></main>"#;
        let out = section_for(html, "#m", "foo");
        assert!(out.contains("<h2>foo</h2>"));
        assert!(out.contains("body"));
    }

    #[test]
    fn test_search_stops_below_depth_three() {
        let html = r#"<main id="m"><aside><blockquote><figure><h2>foo</h2><p>body</p></figure></blockquote></aside></main>"#;
        assert_eq!(section_for(html, "#m", "foo"), "");
    }

    #[test]
    fn test_search_depth_is_configurable() {
        let html = r#"<main id="m"><aside><blockquote><figure><h2>foo</h2></figure></blockquote></aside></main>"#;
        let doc = dom::parse(html);
        let out = extract_relevant_section(&doc.select("#m"), "foo", 4);
        assert!(out.contains("<h2>foo</h2>"));
    }

    #[test]
    fn test_no_container_returns_empty() {
        let html = r#"<main id="m"><p>nothing about it</p></main>"#;
        assert_eq!(section_for(html, "#m", "foo"), "");
    }

    #[test]
    fn test_search_does_not_descend_into_claimed_container() {
        let html = r#"<aside id="root"><section><h3>foo</h3><p>once</p></section></aside>"#;
        let out = section_for(html, "#root", "foo");
        assert_eq!(out.matches("once").count(), 1);
    }

    #[test]
    fn test_document_is_not_mutated() {
        let html = r#"<div id="root"><h2>foo</h2><p>a</p><h2>bar</h2></div>"#;
        let doc = dom::parse(html);
        let before = doc.html().to_string();
        let _ = extract_relevant_section(&doc.select("#root"), "foo", 3);
        assert_eq!(doc.html().to_string(), before);
    }

    #[test]
    fn test_extract_broad_text_then_code() {
        let html = r#"
            <main id="m">
                <p>Welcome   to the   docs.</p>
                <pre><code>npm install thing</code></pre>
                <table><tr><td>opt</td></tr></table>
            </main>
        "#;
        let doc = dom::parse(html);
        let buffer = extract_broad(&doc.select("#m"));
        let fragments = buffer.fragments();
        assert_eq!(fragments.len(), 3);
        assert!(fragments[0].starts_with("Welcome to the docs."));
        assert_eq!(fragments[1], "<code>npm install thing</code>");
        assert!(fragments[2].contains("<td>opt</td>"));
    }
}
