//! Configuration options for documentation extraction.
//!
//! The `Options` struct controls fetch behaviour, diagnostic logging, and the
//! two cost bounds of the extractor (container search depth and the fallback
//! tag whitelist).

use std::time::Duration;

use crate::extractor::tags::CONTENT_TAGS;
use crate::extractor::MAX_SEARCH_DEPTH;

/// User agent sent with every request. Some documentation hosts reject
/// obvious bot agents outright.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36";

/// Per-request timeout used when the caller does not supply one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration options for documentation extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_docscrape::Options;
///
/// let options = Options {
///     timeout: Duration::from_secs(10),
///     verbose: true,
///     ..Options::default()
/// };
/// assert_eq!(options.max_search_depth, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Per-request timeout. Exceeding it is a fetch error, never a hang.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// User agent header value.
    ///
    /// Default: a desktop Chrome user agent
    pub user_agent: String,

    /// Emit pass-level diagnostics at `info` instead of `debug`.
    ///
    /// Never changes extraction behaviour.
    ///
    /// Default: `false`
    pub verbose: bool,

    /// Prepend `# {page title}` to a successful result.
    ///
    /// The title is never counted when deciding whether the fallback pass runs.
    ///
    /// Default: `true`
    pub include_title: bool,

    /// Skip generic containers once the symbol-specific selectors produced
    /// content mentioning the symbol.
    ///
    /// Default: `false`
    pub stop_after_symbol_match: bool,

    /// How many levels below an entry node the container search descends.
    ///
    /// Default: `3`
    pub max_search_depth: usize,

    /// Tags whose elements the fallback pass will extract from.
    ///
    /// Default: [`CONTENT_TAGS`]
    pub content_tags: Vec<String>,

    /// Number of characters shown in the verbose preview log line.
    ///
    /// Default: `200`
    pub preview_len: usize,
}

impl Options {
    /// Whether `tag` is in the fallback whitelist.
    #[must_use]
    pub fn is_content_tag(&self, tag: &str) -> bool {
        self.content_tags.iter().any(|t| t == tag)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verbose: false,
            include_title: true,
            stop_after_symbol_match: false,
            max_search_depth: MAX_SEARCH_DEPTH,
            content_tags: CONTENT_TAGS.iter().map(|t| (*t).to_string()).collect(),
            preview_len: 200,
        }
    }
}
