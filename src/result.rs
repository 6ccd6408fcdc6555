//! Result type for extraction output.

use std::fmt;

use serde::Serialize;

/// Outcome of a successful extraction.
///
/// `content` is the exact text handed to downstream consumers; it is never
/// empty. `Display` writes `content` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocExtract {
    /// The documentation URL, normalized.
    pub url: String,

    /// The requested symbol, `None` for broad extraction.
    pub symbol: Option<String>,

    /// Page `<title>` from the targeted pass, if any.
    pub title: Option<String>,

    /// Extracted text and HTML fragments separated by blank lines.
    pub content: String,

    /// Whether the wildcard fallback pass produced `content`.
    pub used_fallback: bool,
}

impl DocExtract {
    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for DocExtract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DocExtract {
        DocExtract {
            url: "https://docs.example.com/api".to_string(),
            symbol: Some("createUser".to_string()),
            title: None,
            content: "<h2>createUser</h2>".to_string(),
            used_fallback: true,
        }
    }

    #[test]
    fn test_display_is_content() {
        assert_eq!(sample().to_string(), "<h2>createUser</h2>");
    }

    #[test]
    fn test_json_fields() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["symbol"], "createUser");
        assert_eq!(json["used_fallback"], true);
        assert!(json["title"].is_null());
    }
}
