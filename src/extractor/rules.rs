//! Rejection rules for lenient candidates.
//!
//! Each rule is a plain predicate over a [`Candidate`]. Rules run in order
//! and the first one that fires names the rejection, so every dropped card
//! can be traced to a single reason.

use crate::extractor::lenient::Candidate;
use crate::link::{self, SEARCH_PATH};
use crate::options::Options;
use crate::patterns::{NAVIGATION_PHRASE, NUMERIC_ONLY};

/// A candidate rule: returns true when the candidate must be rejected.
pub type Rule = fn(&Candidate, &Options) -> bool;

/// Why a lenient candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Nothing left after trimming and year stripping.
    #[error("empty name")]
    EmptyName,
    /// Longer than `Options::max_name_len`; usually a snippet, not a title.
    #[error("name too long")]
    NameTooLong,
    /// Only digits and punctuation (result counts, page numbers, bare years).
    #[error("numeric name")]
    NumericName,
    /// A tab, filter chip or footer label rather than an artwork.
    #[error("known non-artwork label")]
    KnownLabel,
    /// Pagination or "see more" style navigation.
    #[error("navigation phrase")]
    NavigationPhrase,
    /// Link does not resolve under `<origin>/search`.
    #[error("link outside the search origin")]
    ForeignLink,
    /// No letter in the name, or no year, image or query to back it up.
    #[error("implausible artwork card")]
    Implausible,
}

/// Labels Google puts next to artwork carousels; compared lowercase.
pub const NON_ARTWORK_LABELS: &[&str] = &[
    "all", "images", "videos", "short videos", "news", "shopping", "maps", "books",
    "flights", "finance", "web", "forums", "more", "tools", "settings", "search settings",
    "advanced search", "safesearch", "sign in", "feedback", "privacy", "terms", "help",
    "about", "overview", "artworks", "artwork", "paintings", "works", "artists",
    "exhibitions", "collections", "museums", "visually similar", "ai mode", "wikipedia",
    "google", "next", "previous", "send feedback",
];

/// Ordered rule table.
pub static CANDIDATE_RULES: &[(Rejection, Rule)] = &[
    (Rejection::EmptyName, empty_name),
    (Rejection::NameTooLong, name_too_long),
    (Rejection::NumericName, numeric_name),
    (Rejection::KnownLabel, known_label),
    (Rejection::NavigationPhrase, navigation_phrase),
    (Rejection::ForeignLink, foreign_link),
    (Rejection::Implausible, implausible),
];

/// First rule that rejects the candidate, or `None` when it passes.
#[must_use]
pub fn first_rejection(candidate: &Candidate, options: &Options) -> Option<Rejection> {
    CANDIDATE_RULES
        .iter()
        .find(|(_, rule)| rule(candidate, options))
        .map(|(rejection, _)| *rejection)
}

fn empty_name(c: &Candidate, _: &Options) -> bool {
    c.name.trim().is_empty()
}

fn name_too_long(c: &Candidate, options: &Options) -> bool {
    c.name.chars().count() > options.max_name_len
}

fn numeric_name(c: &Candidate, _: &Options) -> bool {
    NUMERIC_ONLY.is_match(&c.name)
}

fn known_label(c: &Candidate, _: &Options) -> bool {
    let lower = c.name.to_lowercase();
    NON_ARTWORK_LABELS.contains(&lower.as_str())
}

fn navigation_phrase(c: &Candidate, _: &Options) -> bool {
    NAVIGATION_PHRASE.is_match(&c.name)
}

fn foreign_link(c: &Candidate, options: &Options) -> bool {
    let expected = format!("{}{SEARCH_PATH}", options.origin_base());
    !c.link.starts_with(&expected)
}

fn implausible(c: &Candidate, _: &Options) -> bool {
    let has_letter = c.name.chars().any(char::is_alphabetic);
    let backed = !c.years.is_empty() || !c.image.is_empty() || link::has_param(&c.href, "q");
    !(has_letter && backed)
}
