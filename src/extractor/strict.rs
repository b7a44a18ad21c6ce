//! Strict card extraction.
//!
//! A result card is an anchor with exactly two element children: one image
//! and one container. The container's first sub-container holds the name,
//! the optional second one holds the extensions.

use serde_json::Value;
use tracing::debug;

use crate::dom::{self, NodeKind, Selection};
use crate::extractor::SkipReason;
use crate::link::{absolute_link, is_valid_link};
use crate::options::{Mode, Options};
use crate::record::ArtworkRecord;

/// Lazy-load attribute preferred over `src`.
const LAZY_SRC: &str = "data-src";

/// Extract one record from a located anchor.
///
/// Returns the reason the anchor was skipped when it is not a valid card.
/// No partial record is ever produced.
pub fn extract_anchor(anchor: &Selection, options: &Options) -> Result<ArtworkRecord, SkipReason> {
    let href = dom::get_attribute(anchor, "href").ok_or(SkipReason::MissingHref)?;
    if !is_valid_link(&href, Mode::Strict) {
        return Err(SkipReason::InvalidLink(href));
    }

    let (image_el, container) = card_parts(anchor)?;

    let image = dom::non_empty_attribute(&image_el, LAZY_SRC)
        .or_else(|| dom::non_empty_attribute(&image_el, "src"))
        .unwrap_or_default();

    let sections = dom::children_of_kind(&container, NodeKind::Container);
    let name = sections
        .first()
        .map(dom::normalized_text)
        .filter(|name| !name.is_empty())
        .ok_or(SkipReason::MissingName)?;

    let extensions = sections
        .get(1)
        .map(|section| parse_extensions(dom::text_content(section).trim()))
        .unwrap_or_default();

    Ok(ArtworkRecord {
        name,
        link: absolute_link(options.origin_base(), &href),
        image,
        extensions: (!extensions.is_empty()).then_some(extensions),
    })
}

/// Split a card anchor into its image child and its container child.
fn card_parts<'a>(anchor: &Selection<'a>) -> Result<(Selection<'a>, Selection<'a>), SkipReason> {
    let children = dom::element_children(anchor);
    if children.len() != 2 {
        return Err(SkipReason::ChildCount(children.len()));
    }

    let mut images = Vec::new();
    let mut containers = Vec::new();
    for child in children {
        match NodeKind::classify(&child) {
            NodeKind::Image => images.push(child),
            NodeKind::Container => containers.push(child),
            NodeKind::Other => {}
        }
    }

    if images.len() != 1 || containers.len() != 1 {
        return Err(SkipReason::CardShape {
            images: images.len(),
            containers: containers.len(),
        });
    }

    match (images.pop(), containers.pop()) {
        (Some(image), Some(container)) => Ok((image, container)),
        _ => Err(SkipReason::CardShape { images: 0, containers: 0 }),
    }
}

/// Turn the second sub-container's text into an extension list.
///
/// JSON-looking arrays are parsed; anything that fails to parse is kept as a
/// single raw entry.
#[must_use]
pub fn parse_extensions(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    if text.starts_with('[') && text.ends_with(']') {
        match serde_json::from_str::<Vec<Value>>(text) {
            Ok(values) => return values.into_iter().filter_map(json_to_text).collect(),
            Err(err) => debug!(%err, text, "extension text is not valid JSON; keeping raw text"),
        }
    }

    vec![text.to_string()]
}

/// Strings verbatim, other scalars by their JSON text; `null` is dropped.
fn json_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
