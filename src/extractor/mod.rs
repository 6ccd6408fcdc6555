//! Symbol-focused extraction building blocks.
//!
//! # Module Structure
//!
//! - `tags`: heading levels and the tag tables used by the heuristics
//! - `container`: the function-container heuristic
//! - `section`: heading-boundary walk and verbatim container extraction
//! - `harvest`: document-level code/table harvester
//! - `state`: `ContentBuffer` and emitted-node tracking
//! - `fallback`: wildcard recall pass
//!
//! # Usage
//!
//! ```rust
//! use rs_docscrape::dom;
//! use rs_docscrape::extractor::{self, section};
//!
//! let doc = dom::parse("<div><h2>createUser</h2><p>Creates a user.</p><h2>deleteUser</h2></div>");
//! let h2 = doc.select("h2").first();
//! assert!(extractor::container::is_function_container(&h2, "createUser"));
//!
//! let text = section::extract_relevant_section(&h2, "createUser", extractor::MAX_SEARCH_DEPTH);
//! assert!(text.contains("Creates a user."));
//! assert!(!text.contains("deleteUser"));
//! ```

pub mod container;
pub mod fallback;
pub mod harvest;
pub mod section;
pub mod state;
pub mod tags;

pub use container::{classify, is_function_container, ContainerKind};
pub use fallback::fallback_pass;
pub use harvest::harvest_document;
pub use section::{extract_broad, extract_relevant_section};
pub use state::{ContentBuffer, NodeTracker};

/// How many levels below an entry node the container search descends.
///
/// Caps the cost on deeply nested documentation trees. Sections nested
/// deeper are left to the fallback pass, which enters at every element.
pub const MAX_SEARCH_DEPTH: usize = 3;
