//! Lenient (broad-search) extraction.
//!
//! Noisier pages do not keep the clean two-child card shape, so every
//! anchor pointing at a search is treated as a candidate. The card around
//! it is approximated by the nearest ancestor that looks like a result
//! container, and name, years and image are pulled from that neighbourhood
//! on a best-effort basis. [`rules`](super::rules) decides what survives.

use std::collections::HashSet;

use crate::dom::{self, Selection};
use crate::link::{absolute_link, is_valid_link};
use crate::options::{Mode, Options};
use crate::patterns::{TRAILING_YEAR, YEAR_TOKEN};
use crate::record::ArtworkRecord;

use super::images;

/// A lenient record in the making.
///
/// `index` and `href` are bookkeeping for dedupe, ordering and the rule
/// table; they are dropped by [`Candidate::into_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the source anchor in scan order.
    pub index: usize,
    /// Best-effort display name, trailing year stripped.
    pub name: String,
    /// Raw `href` of the anchor.
    pub href: String,
    /// Absolute link.
    pub link: String,
    /// Inline image literal, empty until found or backfilled.
    pub image: String,
    /// Year tokens found around the card, at most `max_extensions`.
    pub years: Vec<String>,
}

impl Candidate {
    /// Strip bookkeeping; lenient records always carry `extensions`.
    #[must_use]
    pub fn into_record(self) -> ArtworkRecord {
        ArtworkRecord {
            name: self.name,
            link: self.link,
            image: self.image,
            extensions: Some(self.years),
        }
    }
}

/// Build a candidate from a located anchor.
///
/// Returns `None` only when the anchor has no usable `href`; everything else
/// is left to the rule table.
#[must_use]
pub fn collect_candidate(anchor: &Selection, index: usize, options: &Options) -> Option<Candidate> {
    let href = dom::get_attribute(anchor, "href")?;
    if !is_valid_link(&href, Mode::Lenient) {
        return None;
    }

    let container = card_container(anchor, options.ancestor_depth);
    let raw_name = raw_name(anchor);
    let name = TRAILING_YEAR.replace(&raw_name, "").trim().to_string();

    let container_text = dom::spaced_text(&container);
    let years = year_tokens([raw_name.as_str(), container_text.as_str()], options);

    let image = images::find_inline_image(anchor)
        .or_else(|| images::find_inline_image(&container))
        .unwrap_or_default();

    Some(Candidate {
        index,
        name,
        link: absolute_link(options.origin_base(), &href),
        href,
        image,
        years,
    })
}

/// Selects every anchor that can become a lenient candidate.
const RESULT_ANCHOR_SELECTOR: &str = r#"a[href*="/search?"]"#;

/// Nearest ancestor (within `depth` levels) that carries a `role` or a
/// `data-*` attribute.
///
/// The container never holds another result anchor: the walk stops at the
/// first ancestor shared with a sibling card. Without a marked ancestor the
/// widest unshared one is used, or the anchor itself.
#[must_use]
pub fn card_container<'a>(anchor: &Selection<'a>, depth: usize) -> Selection<'a> {
    let mut own = anchor.clone();
    let mut current = dom::parent(anchor);

    for _ in 0..depth {
        if !current.exists()
            || dom::tag_name(&current).as_deref() == Some("body")
            || holds_other_results(&current)
        {
            break;
        }
        if current.has_attr("role") || dom::has_data_attribute(&current) {
            return current;
        }
        own = current.clone();
        current = dom::parent(&current);
    }

    own
}

/// More than one result anchor lives under `sel`.
fn holds_other_results(sel: &Selection) -> bool {
    sel.select(RESULT_ANCHOR_SELECTOR).nodes().len() > 1
}

/// Anchor text, else its `aria-label`, else the `alt` of an image inside it.
fn raw_name(anchor: &Selection) -> String {
    let text = dom::normalized_text(anchor);
    if !text.is_empty() {
        return text;
    }

    dom::non_empty_attribute(anchor, "aria-label")
        .or_else(|| {
            dom::query_all(anchor, "img")
                .iter()
                .find_map(|img| dom::non_empty_attribute(img, "alt"))
        })
        .map(|s| dom::collapse_whitespace(&s))
        .unwrap_or_default()
}

/// 3–4 digit tokens inside the plausible year range, in scan order,
/// deduplicated and capped at `max_extensions`.
#[must_use]
pub fn year_tokens<'t>(texts: impl IntoIterator<Item = &'t str>, options: &Options) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut years = Vec::new();

    for text in texts {
        for token in YEAR_TOKEN.find_iter(text) {
            if years.len() >= options.max_extensions {
                return years;
            }
            let Ok(value) = token.as_str().parse::<u32>() else {
                continue;
            };
            if options.year_range.contains(&value) && seen.insert(value) {
                years.push(token.as_str().to_string());
            }
        }
    }

    years
}
