//! Document fetching.
//!
//! The extractor consumes HTML through the [`Fetcher`] trait. Each pass asks
//! for a fresh document; nothing is cached between passes. Failures are
//! never retried here: one failed fetch fails the extraction attempt.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use url::Url;

use crate::error::Result;
use crate::Options;

/// Crawl depth of the targeted pass.
pub const PRIMARY_CRAWL_DEPTH: usize = 2;

/// Crawl depth of the fallback pass (single page).
pub const FALLBACK_CRAWL_DEPTH: usize = 1;

/// Parameters of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User agent header value.
    pub user_agent: String,
    /// Crawl depth bound. For HTTP this caps the number of same-site
    /// redirect hops followed.
    pub max_depth: usize,
}

impl FetchRequest {
    /// Request parameters for a pass with the given crawl depth.
    #[must_use]
    pub fn from_options(options: &Options, max_depth: usize) -> Self {
        Self {
            timeout: options.timeout,
            user_agent: options.user_agent.clone(),
            max_depth,
        }
    }
}

/// Something that turns a URL into an HTML string.
pub trait Fetcher {
    /// Fetch `url` and return its body decoded to UTF-8.
    fn fetch(&self, url: &Url, request: &FetchRequest) -> Result<String>;
}

impl<F> Fetcher for F
where
    F: Fn(&Url, &FetchRequest) -> Result<String>,
{
    fn fetch(&self, url: &Url, request: &FetchRequest) -> Result<String> {
        self(url, request)
    }
}

/// In-memory page. Serves the same HTML for every URL and counts requests.
#[derive(Debug, Default)]
pub struct StaticPage {
    html: String,
    calls: AtomicUsize,
    depths: Mutex<Vec<usize>>,
}

impl StaticPage {
    /// Serve `html` for every request.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            calls: AtomicUsize::new(0),
            depths: Mutex::new(Vec::new()),
        }
    }

    /// Number of fetches served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Crawl depth of each request served, in order.
    #[must_use]
    pub fn depths(&self) -> Vec<usize> {
        self.depths.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl Fetcher for StaticPage {
    fn fetch(&self, _url: &Url, request: &FetchRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut depths) = self.depths.lock() {
            depths.push(request.max_depth);
        }
        Ok(self.html.clone())
    }
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use reqwest::blocking::Client;
    use reqwest::header::{ACCEPT, CONTENT_TYPE};
    use reqwest::redirect::{Attempt, Policy};
    use tracing::debug;
    use url::Url;

    use super::{FetchRequest, Fetcher};
    use crate::encoding::decode_body;
    use crate::error::{Error, Result};
    use crate::url_utils::is_same_site;

    const ACCEPT_HTML: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";

    /// Blocking HTTP fetcher backed by `reqwest`.
    ///
    /// A client is built per request so timeout, user agent and redirect
    /// bound always match the request.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct HttpFetcher;

    impl HttpFetcher {
        /// Create a fetcher.
        #[must_use]
        pub fn new() -> Self {
            Self
        }

        fn client(request: &FetchRequest) -> reqwest::Result<Client> {
            let max_hops = request.max_depth;
            Client::builder()
                .timeout(request.timeout)
                .user_agent(request.user_agent.as_str())
                .redirect(Policy::custom(move |attempt| redirect_decision(attempt, max_hops)))
                .build()
        }
    }

    fn redirect_decision(attempt: Attempt, max_hops: usize) -> reqwest::redirect::Action {
        if attempt.previous().len() > max_hops {
            return attempt.stop();
        }
        let same_site = attempt
            .previous()
            .first()
            .is_some_and(|origin| is_same_site(origin, attempt.url()));
        if same_site {
            attempt.follow()
        } else {
            attempt.stop()
        }
    }

    fn describe(err: &reqwest::Error, request: &FetchRequest) -> String {
        if err.is_timeout() {
            format!("request timed out after {}s", request.timeout.as_secs_f64())
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        }
    }

    impl Fetcher for HttpFetcher {
        fn fetch(&self, url: &Url, request: &FetchRequest) -> Result<String> {
            let client = Self::client(request).map_err(|e| Error::fetch(url.as_str(), e))?;

            let response = client
                .get(url.as_str())
                .header(ACCEPT, ACCEPT_HTML)
                .send()
                .map_err(|e| Error::fetch(url.as_str(), describe(&e, request)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::fetch(url.as_str(), format!("HTTP {status}")));
            }

            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response
                .bytes()
                .map_err(|e| Error::fetch(url.as_str(), describe(&e, request)))?;

            debug!(
                url = %url,
                status = status.as_u16(),
                bytes = body.len(),
                content_type = content_type.as_deref().unwrap_or(""),
                "document fetched"
            );
            Ok(decode_body(&body, content_type.as_deref()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn url() -> Url {
        Url::parse("https://docs.example.com/api").unwrap()
    }

    #[test]
    fn test_request_from_options() {
        let options = Options {
            timeout: Duration::from_secs(5),
            ..Options::default()
        };
        let request = FetchRequest::from_options(&options, PRIMARY_CRAWL_DEPTH);
        assert_eq!(request.timeout, Duration::from_secs(5));
        assert_eq!(request.max_depth, 2);
        assert_eq!(request.user_agent, options.user_agent);
    }

    #[test]
    fn test_static_page_counts_calls() {
        let page = StaticPage::new("<p>x</p>");
        let request = FetchRequest::from_options(&Options::default(), FALLBACK_CRAWL_DEPTH);
        assert_eq!(page.fetch(&url(), &request).unwrap(), "<p>x</p>");
        assert_eq!(page.fetch(&url(), &request).unwrap(), "<p>x</p>");
        assert_eq!(page.calls(), 2);
        assert_eq!(page.depths(), vec![1, 1]);
    }

    #[test]
    fn test_closure_fetcher() {
        let failing = |u: &Url, _: &FetchRequest| -> Result<String> { Err(Error::fetch(u.as_str(), "boom")) };
        let request = FetchRequest::from_options(&Options::default(), PRIMARY_CRAWL_DEPTH);
        let err = failing.fetch(&url(), &request).unwrap_err();
        assert!(err.is_fetch());
    }
}
