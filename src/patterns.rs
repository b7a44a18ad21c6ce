//! Compiled regex patterns used by the extractors.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches a trailing 4-digit year (optionally parenthesised or after a
/// separator) at the end of a name, e.g. "Mona Lisa 1503" or "Guernica (1937)".
pub static TRAILING_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s,\-–·]*\(?\b\d{4}\)?\s*$").expect("TRAILING_YEAR regex")
});

// =============================================================================
// Lenient Heuristic Patterns
// =============================================================================

/// Matches standalone 3–4 digit tokens that may be years.
pub static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3,4}\b").expect("YEAR_TOKEN regex"));

/// Matches names made only of digits, punctuation and whitespace.
pub static NUMERIC_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d\s.,:;/\-–+()#%]+$").expect("NUMERIC_ONLY regex")
});

/// Matches navigation and pagination phrases found around result carousels.
pub static NAVIGATION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:see|view|show)\s+(?:all|more|less)\b|more\s+(?:results|about|images|artworks)\b|people\s+also\s+(?:ask|search)|related\s+searches|search\s+(?:instead|for)\b|did\s+you\s+mean|next\s+page|previous\s+page|go\s+to\s+page|page\s+\d+$|feedback$|skip\s+to\b|sign\s+in$|learn\s+more$)",
    )
    .expect("NAVIGATION_PHRASE regex")
});

// =============================================================================
// Inline Image Patterns
// =============================================================================

/// Matches one inline base64 image literal.
///
/// Base64 payloads contain commas only after the `base64` marker, so a
/// `srcset` value cannot simply be split on commas.
pub static BASE64_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"data:image/[A-Za-z0-9.+\-]+;base64,[A-Za-z0-9+/]+=*").expect("BASE64_IMAGE regex")
});
