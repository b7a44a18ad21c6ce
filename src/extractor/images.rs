//! Inline image lookup.
//!
//! Result pages embed thumbnails as `data:image/...;base64,` literals, either
//! on the `img` element itself or inside page scripts that swap them in
//! after load. Lenient extraction looks for them on the card first and
//! falls back to the raw markup.

use std::collections::HashSet;

use crate::dom::{self, Selection};
use crate::patterns::BASE64_IMAGE;

/// Attributes checked for an inline image, in priority order.
///
/// The source-set attributes may list several candidates; only the first
/// inline literal is taken.
const SOURCE_ATTRIBUTES: &[(&str, AttributeKind)] = &[
    ("src", AttributeKind::Single),
    ("data-src", AttributeKind::Single),
    ("srcset", AttributeKind::SourceSet),
    ("data-srcset", AttributeKind::SourceSet),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttributeKind {
    /// The whole value is one URL.
    Single,
    /// Comma-separated `url descriptor` candidates.
    SourceSet,
}

/// Inline base64 image held by the given attribute value, if any.
fn inline_literal(value: &str, kind: AttributeKind) -> Option<String> {
    let value = value.trim();
    let found = BASE64_IMAGE.find(value)?;
    match kind {
        AttributeKind::Single if found.start() != 0 => None,
        _ => Some(found.as_str().to_string()),
    }
}

/// First inline base64 image under `scope` (the scope element included).
///
/// Attribute priority beats document order: any `src` literal wins over any
/// `data-src` literal, which wins over source-set literals.
#[must_use]
pub fn find_inline_image(scope: &Selection) -> Option<String> {
    let mut images = Vec::new();
    if dom::tag_name(scope).as_deref() == Some("img") {
        images.push(scope.clone());
    }
    images.extend(dom::query_all(scope, "img"));

    SOURCE_ATTRIBUTES.iter().find_map(|(attr, kind)| {
        images
            .iter()
            .filter_map(|img| dom::get_attribute(img, attr))
            .find_map(|value| inline_literal(&value, *kind))
    })
}

/// Every inline base64 image literal in the raw markup, in document order.
///
/// Script-escaped `=` padding (`\x3d`) is restored first so the literal
/// matches what the rendered `img` would carry.
#[must_use]
pub fn markup_literals(markup: &str) -> Vec<String> {
    let unescaped = markup.replace("\\x3d", "=");
    BASE64_IMAGE
        .find_iter(&unescaped)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Hands out markup literals to records that have no image.
///
/// Literals are given in document order and never twice; a literal already
/// attached to a record counts as used.
pub struct Backfill {
    literals: std::vec::IntoIter<String>,
    used: HashSet<String>,
}

impl Backfill {
    /// Start a backfill over `markup`, treating `already_used` as taken.
    #[must_use]
    pub fn new<'r>(markup: &str, already_used: impl IntoIterator<Item = &'r str>) -> Self {
        Self {
            literals: markup_literals(markup).into_iter(),
            used: already_used
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Next unused literal, or `None` when the markup is exhausted.
    pub fn next_unused(&mut self) -> Option<String> {
        for literal in self.literals.by_ref() {
            if self.used.insert(literal.clone()) {
                return Some(literal);
            }
        }
        None
    }
}
