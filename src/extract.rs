//! Two-pass extraction driver.
//!
//! A call moves through four states:
//!
//! ```text
//! Targeted ──► Evaluating ──► Done
//!                  │
//!                  └──► Fallback ──► Done
//! ```
//!
//! `Targeted` fetches the page and runs the selector tiers, the section
//! extractor and the document harvester into one buffer. `Evaluating` decides
//! whether that buffer is usable. `Fallback` discards it, fetches the page
//! again at single-page depth and runs the wildcard pass. `Done` turns the
//! final buffer into a result or a typed failure.
//!
//! A fetch failure in either pass ends the call immediately.

use tracing::{debug, info, warn};
use url::Url;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::extractor::{
    extract_broad, extract_relevant_section, fallback_pass, harvest_document, ContentBuffer,
};
use crate::fetch::{FetchRequest, Fetcher, FALLBACK_CRAWL_DEPTH, PRIMARY_CRAWL_DEPTH};
use crate::options::Options;
use crate::result::DocExtract;
use crate::selector::docs::{self, Tier};
use crate::selector::{self, utils};
use crate::url_utils::validate_doc_url;

/// Log at `info` in verbose mode and at `debug` otherwise.
macro_rules! pass_event {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!($($arg)+);
        } else {
            debug!($($arg)+);
        }
    };
}

enum PassState {
    Targeted,
    Evaluating(ContentBuffer),
    Fallback,
    Done { buffer: ContentBuffer, used_fallback: bool },
}

/// Whether the targeted pass output must be thrown away for a fallback pass.
///
/// True when a symbol was requested and no fragment contains it, which
/// includes an empty buffer. Without a symbol there is no second pass: an
/// empty targeted buffer is final.
#[must_use]
pub fn needs_fallback(buffer: &ContentBuffer, symbol: &str) -> bool {
    !symbol.is_empty() && (buffer.is_empty() || !buffer.mentions(symbol))
}

/// Validate `url`, then run both passes against `fetcher`.
pub(crate) fn extract_with_fetcher<F>(
    fetcher: &F,
    url: &str,
    symbol: &str,
    options: &Options,
) -> Result<DocExtract>
where
    F: Fetcher + ?Sized,
{
    let url = validate_doc_url(url)?;
    run(fetcher, &url, symbol, options)
}

fn run<F>(fetcher: &F, url: &Url, symbol: &str, options: &Options) -> Result<DocExtract>
where
    F: Fetcher + ?Sized,
{
    let verbose = options.verbose;
    let mut title = None;
    let mut state = PassState::Targeted;

    loop {
        state = match state {
            PassState::Targeted => {
                pass_event!(verbose, url = %url, symbol, "starting targeted pass");
                let doc = fetch_document(fetcher, url, options, PRIMARY_CRAWL_DEPTH)?;
                title = dom::title(&doc);
                PassState::Evaluating(targeted_pass(&doc, symbol, options))
            }
            PassState::Evaluating(buffer) => {
                if needs_fallback(&buffer, symbol) {
                    warn!(
                        fragments = buffer.len(),
                        symbol,
                        "targeted pass produced no usable content, falling back"
                    );
                    PassState::Fallback
                } else {
                    PassState::Done { buffer, used_fallback: false }
                }
            }
            PassState::Fallback => {
                pass_event!(verbose, url = %url, symbol, "starting fallback pass");
                let doc = fetch_document(fetcher, url, options, FALLBACK_CRAWL_DEPTH)?;
                PassState::Done {
                    buffer: fallback_pass(&doc, symbol, options),
                    used_fallback: true,
                }
            }
            PassState::Done { buffer, used_fallback } => {
                return finish(url, symbol, title, &buffer, used_fallback, options);
            }
        };
    }
}

fn fetch_document<F>(fetcher: &F, url: &Url, options: &Options, depth: usize) -> Result<Document>
where
    F: Fetcher + ?Sized,
{
    let request = FetchRequest::from_options(options, depth);
    let html = fetcher.fetch(url, &request)?;
    debug!(depth, len = html.len(), "document received");
    Ok(dom::parse(&html))
}

/// Selector tiers, then the document-level harvester, into one buffer.
fn targeted_pass(doc: &Document, symbol: &str, options: &Options) -> ContentBuffer {
    let mut buffer = ContentBuffer::new();

    for (tier, selectors) in docs::tiers(symbol) {
        if tier == Tier::Generic && options.stop_after_symbol_match && buffer.mentions(symbol) {
            pass_event!(options.verbose, "symbol selectors matched, skipping generic containers");
            break;
        }

        let matches = selector::query_all(doc, selectors, symbol);
        pass_event!(options.verbose, ?tier, matches = matches.len(), "selector tier");

        for node in matches {
            if let Some(matched) = selector::first_match(selectors, &node, symbol) {
                pass_event!(options.verbose, ?tier, selector = %matched, tag = %utils::tag(&node), "selector matched");
            }
            match tier {
                Tier::Symbol => {
                    buffer.push(extract_relevant_section(&node, symbol, options.max_search_depth));
                }
                Tier::Generic if symbol.is_empty() => buffer.extend(extract_broad(&node)),
                Tier::Generic => {
                    if !dom::text_content(&node).contains(symbol) {
                        continue;
                    }
                    debug!(tag = %utils::tag(&node), class = %utils::class(&node), "generic container mentions symbol");
                    buffer.push(extract_relevant_section(&node, symbol, options.max_search_depth));
                }
            }
        }
    }

    buffer.extend(harvest_document(doc, symbol));
    buffer
}

fn finish(
    url: &Url,
    symbol: &str,
    title: Option<String>,
    buffer: &ContentBuffer,
    used_fallback: bool,
    options: &Options,
) -> Result<DocExtract> {
    let body = buffer.joined();
    if body.is_empty() {
        return Err(if symbol.is_empty() {
            Error::NoContentExtracted
        } else {
            Error::SymbolNotFound(symbol.to_string())
        });
    }

    let content = match title.as_deref() {
        Some(t) if options.include_title => format!("# {t}\n\n{body}"),
        _ => body,
    };

    if options.verbose {
        let preview: String = content.chars().take(options.preview_len).collect();
        info!(len = content.len(), used_fallback, %preview, "extraction finished");
    }

    Ok(DocExtract {
        url: url.to_string(),
        symbol: (!symbol.is_empty()).then(|| symbol.to_string()),
        title,
        content,
        used_fallback,
    })
}
