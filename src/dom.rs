//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the locator and the
//! extractors: attribute access, direct element children, text content and
//! the closed set of node kinds a result card is built from.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_NORMALIZE;

// === Node Classification ===

/// Structural role of an element inside a result card.
///
/// Cards are matched by kind, never by scattered tag literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Carries an image reference (`img`).
    Image,
    /// Block container holding name or annotation text (`div`).
    Container,
    /// Anything else (`span`, `svg`, ...).
    Other,
}

impl NodeKind {
    /// Classify an element by its tag name.
    #[must_use]
    pub fn classify(sel: &Selection) -> Self {
        match tag_name(sel).as_deref() {
            Some("img") => Self::Image,
            Some("div") => Self::Container,
            _ => Self::Other,
        }
    }
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, treating whitespace-only values as missing
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Check whether the element carries any `data-*` attribute
#[must_use]
pub fn has_data_attribute(sel: &Selection) -> bool {
    sel.nodes().first().is_some_and(|node| {
        node.attrs()
            .iter()
            .any(|attr| attr.name.local.starts_with("data-"))
    })
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants, entity-decoded
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content trimmed with inner whitespace runs collapsed to one space
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    collapse_whitespace(&text_content(sel))
}

/// Descendant text nodes joined with spaces, then collapsed.
///
/// Unlike [`normalized_text`], adjacent elements never run together:
/// `<span>Museum</span><span>1889</span>` reads "Museum 1889".
#[must_use]
pub fn spaced_text(sel: &Selection) -> String {
    let mut out = String::new();
    for root in sel.nodes() {
        for node in root.descendants() {
            if node.is_text() {
                out.push_str(&node.text());
                out.push(' ');
            }
        }
    }
    collapse_whitespace(&out)
}

/// Trim and collapse inner whitespace runs to one space
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Direct element children in document order.
///
/// Text and comment nodes are skipped.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .filter(|node| node.is_element())
        .map(|node| Selection::from(*node))
        .collect()
}

/// Direct element children of the given kind
#[must_use]
pub fn children_of_kind<'a>(sel: &Selection<'a>, kind: NodeKind) -> Vec<Selection<'a>> {
    element_children(sel)
        .into_iter()
        .filter(|child| NodeKind::classify(child) == kind)
        .collect()
}

// === Querying ===

/// Query all elements by CSS selector, one `Selection` per match in
/// document order
#[must_use]
pub fn query_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
