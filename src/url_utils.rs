//! URL Utility Functions
//!
//! Validation of documentation URLs before any network call, and the
//! same-site test used to bound redirect following.

use url::Url;

use crate::error::{Error, Result};

/// Parse `s` as an absolute http(s) URL with a host.
///
/// Fails with [`Error::InvalidUrl`] for relative references, other schemes,
/// or anything the URL parser rejects.
///
/// # Example
///
/// ```rust
/// use rs_docscrape::url_utils::validate_doc_url;
///
/// assert!(validate_doc_url("https://docs.example.com/api#createUser").is_ok());
/// assert!(validate_doc_url("/api/reference").is_err());
/// ```
pub fn validate_doc_url(s: &str) -> Result<Url> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::InvalidUrl("empty URL".to_string()));
    }

    let url = Url::parse(s).map_err(|e| Error::InvalidUrl(format!("{s}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidUrl(format!(
            "{s}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(Error::InvalidUrl(format!("{s}: missing host")));
    }

    Ok(url)
}

/// Lowercase host with any leading `www.` removed.
#[must_use]
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    host.strip_prefix("www.").unwrap_or(&host).to_string()
}

/// Whether two URLs point at the same site (host match, ignoring `www.`).
#[must_use]
pub fn is_same_site(a: &Url, b: &Url) -> bool {
    match (a.host_str(), b.host_str()) {
        (Some(ha), Some(hb)) => normalize_host(ha) == normalize_host(hb),
        _ => false,
    }
}
