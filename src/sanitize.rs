//! The sanitization walk.
//!
//! Children are processed in document order and serialized into a fresh
//! buffer, so tree mutation during iteration never comes up. Each element's
//! subtree is assembled before the element itself is emitted, which lets the
//! empty-wrapper predicate look at what actually survived below it.

use crate::dom::{self, NodeRef};
use crate::fallback;
use crate::policy::Policy;
use crate::tags::VOID_ELEMENT_SET;

/// What the walk does with an element, decided per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    /// Discard the element and its entire subtree.
    Drop,
    /// Replace the element with its children, in place.
    Unwrap,
    /// Keep the element with a restricted attribute set.
    Keep,
}

/// Denylist first: a tag that is both dropped and allowed is removed,
/// never kept or unwrapped.
fn classify(tag: &str, policy: &Policy) -> Disposition {
    if policy.drops_tag(tag) {
        Disposition::Drop
    } else if policy.allows_tag(tag) {
        Disposition::Keep
    } else {
        Disposition::Unwrap
    }
}

/// What a node contributed to its parent's sanitized content. Feeds the
/// empty `span`/`div` removal predicate.
#[derive(Debug, Default, Clone, Copy)]
struct Contribution {
    /// At least one element survived.
    element: bool,
    /// At least one non-whitespace text run survived.
    text: bool,
}

impl Contribution {
    fn absorb(&mut self, other: Contribution) {
        self.element |= other.element;
        self.text |= other.text;
    }
}

/// Tree-backed sanitization. Total: every input maps to a defined string.
pub(crate) fn sanitize_tree(raw_html: &str, policy: &Policy) -> String {
    let trimmed = raw_html.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let doc = dom::parse(trimmed);
    let Ok(root) = dom::root_container(&doc) else {
        // No usable container: degrade to the document's plain text, then
        // to raw tag stripping.
        return dom::document_text(&doc).unwrap_or_else(|_| fallback::strip_markup(trimmed));
    };

    let mut out = String::new();
    if let Some(node) = root.nodes().first() {
        emit_children(node, &mut out, policy);
    }
    out.trim().to_string()
}

/// Walk `parent`'s children in document order, appending sanitized HTML to
/// `out`. Comments and other non-element, non-text nodes vanish here.
fn emit_children(parent: &NodeRef, out: &mut String, policy: &Policy) -> Contribution {
    let mut contribution = Contribution::default();

    for child in parent.children() {
        if child.is_text() {
            let text = child.text();
            if !text.trim().is_empty() {
                contribution.text = true;
            }
            push_escaped(&text, out);
            continue;
        }
        if !child.is_element() {
            continue;
        }
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };
        match classify(&tag, policy) {
            Disposition::Drop => {}
            Disposition::Unwrap => {
                contribution.absorb(emit_children(&child, out, policy));
            }
            Disposition::Keep => {
                contribution.absorb(emit_element(&child, &tag, out, policy));
            }
        }
    }

    contribution
}

/// Serialize one kept element. Returns what it contributed to the parent:
/// nothing (removed), its children (anchor unwrapped), or itself.
fn emit_element(node: &NodeRef, tag: &str, out: &mut String, policy: &Policy) -> Contribution {
    // Children first, so the emptiness predicate sees the sanitized subtree.
    let mut inner = String::new();
    let inner_contribution = emit_children(node, &mut inner, policy);

    let class = surviving_classes(node, policy);

    let href = if tag == "a" {
        match checked_href(node, policy) {
            Some(href) => Some(href),
            None => {
                // Missing or unsafe href: unwrap the anchor.
                out.push_str(&inner);
                return inner_contribution;
            }
        }
    } else {
        None
    };

    if (tag == "span" || tag == "div")
        && class.is_none()
        && !inner_contribution.element
        && !inner_contribution.text
    {
        // Empty, class-less wrapper: removed entirely, not unwrapped.
        return Contribution::default();
    }

    out.push('<');
    out.push_str(tag);
    if let Some(class) = &class {
        push_attribute("class", class, out);
    }
    if let Some(href) = &href {
        push_attribute("href", href, out);
        push_attribute("target", &policy.link_target, out);
        push_attribute("rel", &policy.link_rel, out);
    }
    out.push('>');

    if !VOID_ELEMENT_SET.contains(tag) {
        out.push_str(&inner);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    Contribution {
        element: true,
        text: inner_contribution.text,
    }
}

/// Trimmed href of an anchor, if the policy permits its scheme.
fn checked_href(node: &NodeRef, policy: &Policy) -> Option<String> {
    let href = dom::attribute(node, "href")?;
    let trimmed = href.trim();
    policy.permits_href(trimmed).then(|| trimmed.to_string())
}

/// Allow-listed class tokens of `node`, space-joined in their original
/// relative order. `None` when nothing survives.
fn surviving_classes(node: &NodeRef, policy: &Policy) -> Option<String> {
    let class = dom::attribute(node, "class")?;
    let kept: Vec<&str> = class
        .split_whitespace()
        .filter(|token| policy.allows_class(token))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

fn push_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(value, out);
    out.push('"');
}

/// Minimal entity escaping for text and attribute values.
fn push_escaped(input: &str, out: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
