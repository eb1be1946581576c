//! Sanitization policy.
//!
//! The `Policy` struct carries the allow-lists and forced link attributes
//! applied by the walk. `Policy::default()` is the fixed production policy;
//! all fields are public so callers can widen or narrow it.

use crate::tags::{ALLOWED_CLASSES, ALLOWED_TAGS, DROPPED_TAGS};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Shared instance backing [`crate::sanitize`], so repeated calls don't
/// rebuild the hash sets.
pub(crate) static DEFAULT_POLICY: LazyLock<Policy> = LazyLock::new(Policy::default);

/// Configuration for a sanitization pass.
///
/// # Example
///
/// ```rust
/// use richtext_sanitizer::Policy;
///
/// // Default policy, plus underline support
/// let mut policy = Policy::default();
/// policy.allowed_tags.insert("u".to_string());
///
/// let clean = richtext_sanitizer::sanitize_with_policy("<u>hi</u>", &policy);
/// assert_eq!(clean, "<u>hi</u>");
/// ```
#[derive(Debug, Clone)]
pub struct Policy {
    /// Tags kept in the output. Anything else is unwrapped.
    ///
    /// Lowercase names; the parser lowercases HTML tags before the check.
    pub allowed_tags: HashSet<String>,

    /// Tags removed together with their whole subtree. Checked before
    /// `allowed_tags`, so a tag in both sets is dropped.
    pub dropped_tags: HashSet<String>,

    /// Class tokens that survive on kept elements. Token comparison is
    /// case-sensitive, matching the CSS the classes target.
    pub allowed_classes: HashSet<String>,

    /// URL schemes an anchor may carry, matched as a case-insensitive
    /// `scheme://` prefix of the trimmed href. Anchors failing the check
    /// are unwrapped.
    pub allowed_schemes: Vec<String>,

    /// `target` attribute forced onto every kept anchor.
    pub link_target: String,

    /// `rel` attribute forced onto every kept anchor.
    pub link_rel: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            allowed_tags: ALLOWED_TAGS.into_iter().map(str::to_string).collect(),
            dropped_tags: DROPPED_TAGS.into_iter().map(str::to_string).collect(),
            allowed_classes: ALLOWED_CLASSES.into_iter().map(str::to_string).collect(),
            allowed_schemes: vec!["http".to_string(), "https".to_string()],
            link_target: "_blank".to_string(),
            link_rel: "noopener noreferrer".to_string(),
        }
    }
}

impl Policy {
    /// Whether elements with this tag are kept (attribute-restricted).
    #[must_use]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.allowed_tags.contains(tag)
    }

    /// Whether elements with this tag are removed with their subtree.
    #[must_use]
    pub fn drops_tag(&self, tag: &str) -> bool {
        self.dropped_tags.contains(tag)
    }

    /// Whether this class token survives on a kept element.
    #[must_use]
    pub fn allows_class(&self, token: &str) -> bool {
        self.allowed_classes.contains(token)
    }

    /// Whether an anchor may keep this href. Expects the value already
    /// trimmed; the scheme comparison is case-insensitive.
    #[must_use]
    pub fn permits_href(&self, href: &str) -> bool {
        let lower = href.to_ascii_lowercase();
        self.allowed_schemes
            .iter()
            .any(|scheme| lower.starts_with(&format!("{scheme}://")))
    }
}
