//! Candidate anchor location.
//!
//! Finds the anchors whose `href` matches the result-link pattern, scanning
//! only the main results subtree when the page marks one.

use tracing::{trace, warn};

use crate::dom::{self, Document, Selection};

/// How an anchor's `href` must match to be a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefPattern<'p> {
    /// `href` starts with the given text.
    Prefix(&'p str),
    /// `href` contains the given text anywhere.
    Contains(&'p str),
}

impl HrefPattern<'_> {
    /// Test a raw `href` value.
    #[must_use]
    pub fn matches(&self, href: &str) -> bool {
        match self {
            Self::Prefix(prefix) => href.starts_with(prefix),
            Self::Contains(needle) => href.contains(needle),
        }
    }
}

/// The subtree to scan: the first element matching `scope_selector`, or the
/// whole document when there is none.
#[must_use]
pub fn search_root<'a>(document: &'a Document, scope_selector: &str) -> Selection<'a> {
    let scoped = document.select(scope_selector).first();
    if scoped.exists() {
        return scoped;
    }
    warn!(selector = scope_selector, "main scope not found; scanning whole document");
    document.select("html")
}

/// Anchors under the search root whose `href` matches `pattern`, in
/// document order.
#[must_use]
pub fn locate_anchors<'a>(
    document: &'a Document,
    pattern: HrefPattern<'_>,
    scope_selector: &str,
) -> Vec<Selection<'a>> {
    let root = search_root(document, scope_selector);

    let anchors: Vec<Selection<'a>> = dom::query_all(&root, "a[href]")
        .into_iter()
        .filter(|anchor| {
            dom::get_attribute(anchor, "href").is_some_and(|href| pattern.matches(&href))
        })
        .collect();

    trace!(count = anchors.len(), ?pattern, "located candidate anchors");
    anchors
}
