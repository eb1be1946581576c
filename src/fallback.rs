//! Plain-text degradation for input that cannot be structurally parsed.
//!
//! This is the safety floor of the sanitizer: no markup survives it, only
//! text with collapsed whitespace. It runs when the crate is built without
//! the `tree` feature and when parsing yields nothing usable.

use regex::Regex;
use std::sync::LazyLock;

/// HTML comment spans. Stripped before tag spans so a `>` inside a comment
/// can't terminate the tag match early.
#[allow(clippy::expect_used)]
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|$)").expect("valid regex"));

/// Tag spans, opening or closing.
#[allow(clippy::expect_used)]
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));

/// Strip all markup from `raw` and collapse whitespace.
///
/// Comments go first, then anything between `<` and `>`. Text content of
/// removed tags is kept - this is a lexical pass, not a parse.
///
/// # Examples
///
/// ```
/// use richtext_sanitizer::fallback::strip_markup;
///
/// assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_markup("a <!-- <b> --> c"), "a c");
/// ```
#[must_use]
pub fn strip_markup(raw: &str) -> String {
    let without_comments = COMMENT_RE.replace_all(raw, " ");
    let without_tags = TAG_RE.replace_all(&without_comments, " ");
    collapse_whitespace(&without_tags)
}

/// Collapse every whitespace run to a single space and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
