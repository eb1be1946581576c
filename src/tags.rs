//! Tag and class catalogs backing the default sanitization policy.
//!
//! Arrays are kept for ordered iteration; the `LazyLock` sets provide
//! O(1) membership checks during the walk.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags that survive sanitization with a restricted attribute set.
pub static ALLOWED_TAGS: [&str; 18] = [
    "a", "b", "br", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6", "i", "li", "ol", "p", "span",
    "strong", "ul",
];

/// Tags whose entire subtree is discarded. Takes precedence over
/// [`ALLOWED_TAGS`] for any tag listed in both.
pub static DROPPED_TAGS: [&str; 5] = ["script", "style", "iframe", "object", "embed"];

/// Class tokens allowed to survive on kept elements.
pub static ALLOWED_CLASSES: [&str; 3] = ["white-space-pre", "text-heading-large", "mt4"];

/// Void elements: serialized without a closing tag and never given children
/// by the parser.
pub static VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// `ALLOWED_TAGS` as a `HashSet`
pub static ALLOWED_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALLOWED_TAGS.into_iter().collect());

/// `DROPPED_TAGS` as a `HashSet`
pub static DROPPED_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DROPPED_TAGS.into_iter().collect());

/// `ALLOWED_CLASSES` as a `HashSet`
pub static ALLOWED_CLASS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALLOWED_CLASSES.into_iter().collect());

/// `VOID_ELEMENTS` as a `HashSet`
pub static VOID_ELEMENT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VOID_ELEMENTS.into_iter().collect());
