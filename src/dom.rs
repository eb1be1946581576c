//! Thin adapter over `dom_query`.
//!
//! All parser access is funneled through this module so the walk in
//! `sanitize` stays free of `dom_query` details. Only compiled with the
//! `tree` feature; without it the crate is the lexical fallback alone.

pub use dom_query::{Document, NodeRef, Selection};

use crate::error::{Error, Result};
use crate::fallback::collapse_whitespace;

/// Parse an HTML string into a document tree.
///
/// The parse itself cannot fail - malformed markup produces a best-effort
/// tree, the HTML way.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The container whose contents get sanitized and re-serialized.
///
/// Returns [`Error::NoRoot`] when the parse produced no `body` element.
pub fn root_container(doc: &Document) -> Result<Selection<'_>> {
    let body = doc.select("body");
    if body.exists() {
        Ok(body)
    } else {
        Err(Error::NoRoot)
    }
}

/// Collapsed plain text of the whole document.
///
/// Returns [`Error::NoText`] when nothing non-whitespace remains.
pub fn document_text(doc: &Document) -> Result<String> {
    let text = collapse_whitespace(&doc.select("html").text());
    if text.is_empty() {
        Err(Error::NoText)
    } else {
        Ok(text)
    }
}

/// Lowercased tag name of an element node. `None` for non-elements.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|name| name.to_ascii_lowercase())
}

/// Attribute value of an element node, if present.
#[must_use]
pub fn attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_always_yields_a_root_container() {
        for html in ["<p>hi</p>", "", "not html at all", "<<<>>>"] {
            let doc = parse(html);
            assert!(root_container(&doc).is_ok(), "no container for {html:?}");
        }
    }

    #[test]
    fn document_text_collapses_whitespace() {
        let doc = parse("<div>  one\n  <span>two</span>\t</div>");
        let text = match document_text(&doc) {
            Ok(text) => text,
            Err(err) => panic!("expected text, got {err:?}"),
        };
        assert_eq!(text, "one two");
    }

    #[test]
    fn document_text_errors_on_empty_document() {
        let doc = parse("<div>   </div>");
        assert!(matches!(document_text(&doc), Err(Error::NoText)));
    }

    #[test]
    fn tag_name_is_lowercased() {
        let doc = parse("<DIV><P>x</P></DIV>");
        let body = doc.select("body");
        let node = body.nodes().first().copied();
        let div = node.and_then(|n| n.children().into_iter().find(NodeRef::is_element));
        assert_eq!(div.as_ref().and_then(tag_name), Some("div".to_string()));
    }

    #[test]
    fn attribute_reads_raw_value() {
        let doc = parse(r#"<a href=" https://example.com ">x</a>"#);
        let a = doc.select("a");
        let node = a.nodes().first().copied();
        let href = node.as_ref().and_then(|n| attribute(n, "href"));
        // value comes back untrimmed; trimming is policy's business
        assert_eq!(href, Some(" https://example.com ".to_string()));
        assert_eq!(node.as_ref().and_then(|n| attribute(n, "missing")), None);
    }
}
