//! # richtext-sanitizer
//!
//! Reduces untrusted rich-text HTML - think job descriptions scraped from
//! external sites - to a small, safe-to-render subset: an allow-list of
//! tags, an allow-list of class tokens as the only surviving attribute,
//! and anchors restricted to absolute http/https links with forced
//! `target`/`rel`.
//!
//! Sanitization is total: malformed markup, empty input, or a build
//! without a tree parser all degrade to a defined plain-text output
//! instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use richtext_sanitizer::sanitize;
//!
//! let raw = r#"<script>alert(1)</script><p class="intro">Apply <a href="https://jobs.example.com">here</a>.</p>"#;
//! assert_eq!(
//!     sanitize(raw),
//!     r#"<p>Apply <a href="https://jobs.example.com" target="_blank" rel="noopener noreferrer">here</a>.</p>"#
//! );
//! ```
//!
//! ## Features
//!
//! - **tree** (default): parse input with a real HTML parser and walk the
//!   tree. Without it, every call is the lexical tag-strip fallback - the
//!   right behavior for contexts where a DOM is unavailable.

mod error;
mod policy;
#[cfg(feature = "tree")]
mod sanitize;

/// Byte-payload decoding (charset sniffing, lossy UTF-8 conversion).
pub mod encoding;

/// Lexical tag stripping and whitespace collapsing.
pub mod fallback;

/// Tag and class catalogs behind the default policy.
pub mod tags;

/// Parser adapter over `dom_query`.
#[cfg(feature = "tree")]
pub mod dom;

// Public API - re-exports
pub use error::{Error, Result};
pub use policy::Policy;

/// Sanitizes untrusted HTML with the default policy.
///
/// Never fails: unparseable input degrades to collapsed plain text, and a
/// build without the `tree` feature strips tags lexically.
///
/// # Example
///
/// ```rust
/// use richtext_sanitizer::sanitize;
///
/// assert_eq!(sanitize("<div><b>bold</b> move</div>"), "<div><b>bold</b> move</div>");
/// assert_eq!(sanitize("<span class=\"evil\"></span>"), "");
/// ```
#[must_use]
pub fn sanitize(raw_html: &str) -> String {
    sanitize_with_policy(raw_html, &policy::DEFAULT_POLICY)
}

/// Sanitizes untrusted HTML with a caller-supplied [`Policy`].
///
/// # Example
///
/// ```rust
/// use richtext_sanitizer::{sanitize_with_policy, Policy};
///
/// let mut policy = Policy::default();
/// policy.allowed_classes.insert("badge".to_string());
///
/// let clean = sanitize_with_policy(r#"<span class="badge hype">New</span>"#, &policy);
/// assert_eq!(clean, r#"<span class="badge">New</span>"#);
/// ```
#[must_use]
pub fn sanitize_with_policy(raw_html: &str, policy: &Policy) -> String {
    #[cfg(feature = "tree")]
    {
        sanitize::sanitize_tree(raw_html, policy)
    }
    #[cfg(not(feature = "tree"))]
    {
        let _ = policy;
        fallback::strip_markup(raw_html)
    }
}

/// Sanitizes raw HTML bytes, sniffing the charset first.
///
/// Accepts payloads exactly as scraped: the declared encoding is detected
/// from meta tags and decoded lossily before sanitization.
///
/// # Example
///
/// ```rust
/// use richtext_sanitizer::sanitize_bytes;
///
/// let raw = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert_eq!(sanitize_bytes(raw), "<p>Caf\u{e9}</p>");
/// ```
#[must_use]
pub fn sanitize_bytes(raw: &[u8]) -> String {
    sanitize(&encoding::decode_to_utf8(raw))
}

/// Sanitizes raw HTML bytes with a caller-supplied [`Policy`].
#[must_use]
pub fn sanitize_bytes_with_policy(raw: &[u8], policy: &Policy) -> String {
    sanitize_with_policy(&encoding::decode_to_utf8(raw), policy)
}
