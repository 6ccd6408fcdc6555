//! Error types for rs-docscrape.
//!
//! Every extraction call ends in either a non-empty, symbol-relevant buffer or
//! one of these typed failures. There is no partial-success variant.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was not an absolute, well-formed http(s) URL.
    ///
    /// Raised before any network I/O.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Network, timeout, or HTTP-level failure on either pass.
    #[error("error visiting {url}: {message}")]
    Fetch {
        /// The URL that was being fetched.
        url: String,
        /// Human-readable cause.
        message: String,
    },

    /// The page was fetched and scanned, but nothing about the symbol was found,
    /// even after the fallback pass.
    #[error("function or method '{0}' not found in the documentation")]
    SymbolNotFound(String),

    /// No symbol was requested and the page yielded no documentation content.
    #[error("no content extracted from the documentation URL")]
    NoContentExtracted,
}

impl Error {
    /// Build a fetch error for `url`.
    pub(crate) fn fetch(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Returns true for network/HTTP failures.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_not_found_names_the_symbol() {
        let err = Error::SymbolNotFound("createUser".to_string());
        assert_eq!(
            err.to_string(),
            "function or method 'createUser' not found in the documentation"
        );
    }

    #[test]
    fn fetch_helper_keeps_url_and_cause() {
        let err = Error::fetch("https://example.com/docs", "HTTP 404 Not Found");
        assert!(err.is_fetch());
        assert!(err.to_string().contains("https://example.com/docs"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn non_fetch_errors_are_not_fetch() {
        assert!(!Error::NoContentExtracted.is_fetch());
        assert!(!Error::InvalidUrl("nope".into()).is_fetch());
    }
}
