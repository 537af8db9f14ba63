// ABOUTME: Extracts failure explanations the console embeds in HTML responses.
// ABOUTME: Text-pattern scraping of `error_line` spans, isolated behind one function.

use regex::Regex;
use std::sync::LazyLock;

static ERROR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span\s+class\s*=\s*["']error_line["']\s*>(.*?)</span\s*>"#)
        .expect("error_line pattern should be a valid regex")
});

/// Concatenate the text of every `<span class="error_line">` in `body`,
/// separated by a single space.
///
/// Returns an empty string when the body has no such span; callers treat
/// that as "no additional diagnostic", not as success.
pub fn extract_error_message(body: &str) -> String {
    ERROR_LINE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
