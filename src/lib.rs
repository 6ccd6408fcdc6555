//! # rs-docscrape
//!
//! Symbol-focused content extraction for API documentation pages.
//!
//! Given a documentation URL and an optional function or method name, this
//! library fetches the page and pulls out the HTML that documents that
//! symbol: its heading and the section under it, parameter tables, and code
//! samples. Navigation and unrelated sections are left behind. Everything is
//! driven by heuristics over tag names, attributes and the heading outline;
//! no JavaScript is executed and no site-specific templates are used.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_docscrape::{extract_from_html, Options};
//!
//! let html = r#"<html><body>
//!   <h2 id="createUser">createUser</h2>
//!   <p>Creates a user.</p>
//!   <h2>deleteUser</h2>
//!   <p>Deletes a user.</p>
//! </body></html>"#;
//!
//! let result = extract_from_html(html, "createUser", &Options::default())?;
//! assert!(result.content.contains("Creates a user."));
//! assert!(!result.content.contains("deleteUser"));
//! # Ok::<(), rs_docscrape::Error>(())
//! ```
//!
//! ## How it works
//!
//! - **Targeted pass**: symbol-derived selectors (`#createUser`,
//!   `[data-method='createUser']`, ...) then generic documentation
//!   containers (`main`, `.docs`, `[role='main']`, ...). Each match goes
//!   through the section extractor, and a document-wide harvester appends code
//!   samples and tables mentioning the symbol.
//! - **Fallback pass**: only when a symbol was requested and the targeted
//!   pass produced nothing mentioning it. The page is fetched again and every
//!   content-bearing element is considered.
//!
//! Failures are typed: see [`Error`].

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Read-only DOM helpers over `dom_query`.
pub mod dom;

/// Declarative selectors and the documentation selector tiers.
pub mod selector;

/// Section extractor, container heuristic, harvester and fallback pass.
pub mod extractor;

/// Document fetching (HTTP and in-memory).
pub mod fetch;

/// URL validation and same-site checks.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::needs_fallback;
pub use fetch::{FetchRequest, Fetcher, StaticPage};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use options::{Options, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use result::DocExtract;

/// URL reported for documents passed in directly rather than fetched.
pub const INLINE_DOCUMENT_URL: &str = "http://localhost/";

/// Fetches `url` and returns the documentation text for `symbol`.
///
/// An empty `symbol` extracts every generic documentation container.
///
/// # Errors
///
/// - [`Error::InvalidUrl`] if `url` is not an absolute http(s) URL
/// - [`Error::Fetch`] on network, timeout or HTTP failure
/// - [`Error::SymbolNotFound`] if nothing about `symbol` was found
/// - [`Error::NoContentExtracted`] if `symbol` is empty and the page had no content
///
/// # Example
///
/// ```rust,no_run
/// use rs_docscrape::{scrape_documentation, Options};
///
/// let text = scrape_documentation("https://docs.example.com/api", "createUser", &Options::default())?;
/// println!("{text}");
/// # Ok::<(), rs_docscrape::Error>(())
/// ```
#[cfg(feature = "http")]
pub fn scrape_documentation(url: &str, symbol: &str, options: &Options) -> Result<String> {
    extract_docs(url, symbol, options).map(|r| r.content)
}

/// Like [`scrape_documentation`], returning the full [`DocExtract`].
#[cfg(feature = "http")]
pub fn extract_docs(url: &str, symbol: &str, options: &Options) -> Result<DocExtract> {
    extract::extract_with_fetcher(&HttpFetcher::new(), url, symbol, options)
}

/// Runs extraction against a caller-supplied [`Fetcher`].
///
/// The fetcher is called once for the targeted pass and once more if the
/// fallback pass runs.
///
/// # Example
///
/// ```rust
/// use rs_docscrape::{extract_docs_with, Options, StaticPage};
///
/// let page = StaticPage::new(r#"<div id="createUser"><p>Creates a user.</p></div>"#);
/// let result = extract_docs_with(&page, "https://docs.example.com/", "createUser", &Options::default());
///
/// // The id match never mentions the symbol, so the page was fetched twice.
/// assert!(result.is_err());
/// assert_eq!(page.calls(), 2);
/// ```
pub fn extract_docs_with(
    fetcher: &dyn Fetcher,
    url: &str,
    symbol: &str,
    options: &Options,
) -> Result<DocExtract> {
    extract::extract_with_fetcher(fetcher, url, symbol, options)
}

/// Runs extraction over an HTML string already in memory.
///
/// Both passes see the same document. The result's `url` is
/// [`INLINE_DOCUMENT_URL`].
pub fn extract_from_html(html: &str, symbol: &str, options: &Options) -> Result<DocExtract> {
    let page = StaticPage::new(html);
    extract::extract_with_fetcher(&page, INLINE_DOCUMENT_URL, symbol, options)
}

/// Runs extraction over raw HTML bytes with encoding detection.
///
/// The charset is taken from `<meta charset>` or `http-equiv`, defaulting to
/// UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_docscrape::{extract_from_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><main><p>Caf\xE9</p></main></body></html>";
/// let result = extract_from_bytes(html, "", &Options::default())?;
/// assert!(result.content.contains("Café"));
/// # Ok::<(), rs_docscrape::Error>(())
/// ```
pub fn extract_from_bytes(html: &[u8], symbol: &str, options: &Options) -> Result<DocExtract> {
    extract_from_html(&encoding::decode_body(html, None), symbol, options)
}
