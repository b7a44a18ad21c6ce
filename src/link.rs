//! Result link validation.
//!
//! Decides whether an anchor's raw `href` looks like a search-result card
//! link. Validation never fails: malformed input is simply invalid.

use url::form_urlencoded;

use crate::options::Mode;

/// Path every result link starts with.
pub const SEARCH_PATH: &str = "/search";

/// Substring a lenient result link must contain.
pub const LENIENT_MARKER: &str = "/search?";

/// Session parameter a strict result link must carry.
pub const SESSION_PARAM: &str = "sca_esv";

/// Check a raw `href` against the rules of the given mode.
///
/// Strict links must start with `/search`, carry a query string, and have a
/// non-empty `sca_esv` parameter. Lenient links only need `/search?`
/// somewhere in the address.
///
/// # Example
///
/// ```rust
/// use rs_serp_artworks::link::is_valid_link;
/// use rs_serp_artworks::Mode;
///
/// assert!(is_valid_link("/search?sca_esv=abc&q=Mona+Lisa", Mode::Strict));
/// assert!(!is_valid_link("/search?sca_esv=&q=x", Mode::Strict));
/// assert!(is_valid_link("https://www.google.com/search?q=x", Mode::Lenient));
/// ```
#[must_use]
pub fn is_valid_link(href: &str, mode: Mode) -> bool {
    match mode {
        Mode::Strict => is_strict_link(href),
        Mode::Lenient => href.contains(LENIENT_MARKER),
    }
}

fn is_strict_link(href: &str) -> bool {
    if !href.starts_with(SEARCH_PATH) {
        return false;
    }

    let Some(query) = query_string(href) else {
        return false;
    };

    query_param(query, SESSION_PARAM).is_some_and(|value| !value.is_empty())
}

/// Text between the first `?` and any `#` fragment, if non-empty.
#[must_use]
pub fn query_string(href: &str) -> Option<&str> {
    let (_, rest) = href.split_once('?')?;
    let query = rest.split_once('#').map_or(rest, |(q, _)| q);
    (!query.is_empty()).then_some(query)
}

/// First value of a query parameter, percent-decoded.
///
/// Pairs are `&`-separated `key=value`; a segment without `=` yields an
/// empty value.
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Whether the link's query carries a non-empty parameter of this name.
#[must_use]
pub fn has_param(href: &str, key: &str) -> bool {
    query_string(href)
        .and_then(|query| query_param(query, key))
        .is_some_and(|value| !value.trim().is_empty())
}

/// Build the absolute record link from the site origin and the raw `href`.
///
/// Absolute `href` values are kept as they are.
#[must_use]
pub fn absolute_link(origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    format!("{origin}{href}")
}
