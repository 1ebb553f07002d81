//! Whitespace normalization for generated source text

use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+$").unwrap());
static PARAGRAPH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static AFTER_OPEN_BRACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\n\n+").unwrap());
static BEFORE_CLOSE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}([ \t]*\})").unwrap());
static AFTER_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</summary>\n\n+").unwrap());
static BETWEEN_ATTRIBUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\n\n+([ \t]*\[)").unwrap());

/// Normalizes the whitespace of generated source text as much as possible.
///
/// Line endings become `\n`. Whitespace-only lines are blanked, runs of
/// blank lines collapse to a single paragraph break, and blank lines
/// directly after an opening brace, before a closing brace, after a doc
/// summary, or between attribute lines are removed.
pub fn normalize_whitespace(source: &str) -> String {
    let source = source.trim_start();
    let source = source.replace("\r\n", "\n");
    let source = BLANK_LINE.replace_all(&source, "");
    let source = PARAGRAPH_RUN.replace_all(&source, "\n\n");
    let source = AFTER_OPEN_BRACE.replace_all(&source, "{\n");
    let source = BEFORE_CLOSE_BRACE.replace_all(&source, "\n$1");
    let source = AFTER_SUMMARY.replace_all(&source, "</summary>\n");
    let source = BETWEEN_ATTRIBUTES.replace_all(&source, "]\n$1");

    source.into_owned()
}
