//! Behavior of a build without the `tree` feature: every call is the
//! lexical tag-strip fallback.
//!
//! Run with: `cargo test --no-default-features`

#![cfg(not(feature = "tree"))]

use richtext_sanitizer::sanitize;

#[test]
fn without_tree_feature_no_markup_survives() {
    assert_eq!(sanitize("<p>Hello <b>world</b></p>"), "Hello world");
    assert_eq!(sanitize("<div class=\"x\">a</div> <!-- c --> b"), "a b");
}

#[test]
fn without_tree_feature_whitespace_is_collapsed() {
    assert_eq!(sanitize("  one \n two\t<br>  three "), "one two three");
}

#[test]
fn without_tree_feature_empty_input_is_empty() {
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize("   "), "");
}
