//! Compiled regex patterns for text cleanup.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Runs of horizontal whitespace, including non-breaking spaces.
pub static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\x0C\r\u{a0}]+").expect("HORIZONTAL_SPACE regex"));

/// Three or more newlines in a row.
pub static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("BLANK_LINES regex"));

/// `charset=` parameter of a `Content-Type` header value.
pub static HEADER_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("HEADER_CHARSET regex")
});

/// Collapse layout whitespace in rendered element text.
///
/// Horizontal runs become one space, each line is trimmed, and no more than
/// one blank line separates paragraphs. The result is trimmed.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let collapsed = HORIZONTAL_SPACE.replace_all(text, " ");
    let lines: Vec<&str> = collapsed.lines().map(str::trim).collect();
    let joined = lines.join("\n");
    BLANK_LINES.replace_all(&joined, "\n\n").trim().to_string()
}
