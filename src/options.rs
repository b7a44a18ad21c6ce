//! Configuration options for artwork extraction.
//!
//! The `Options` struct selects the extraction mode and carries the constants
//! the heuristics depend on (site origin, anchor prefix, year range).

use std::ops::RangeInclusive;

use chrono::Datelike;
use url::Url;

use crate::error::{Error, Result};

/// Default site origin prefixed onto relative result links.
pub const DEFAULT_ORIGIN: &str = "https://www.google.com";

/// Default `href` prefix for strict anchor location.
pub const DEFAULT_ANCHOR_PREFIX: &str = "/search?sca_esv=";

/// Default selector for the main results subtree.
pub const DEFAULT_MAIN_SELECTOR: &str = r#"[role="main"]"#;

/// Earliest year accepted as an extension token in lenient mode.
pub const EARLIEST_YEAR: u32 = 800;

/// Extraction variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Exact two-child card shape and a validated `sca_esv` link.
    ///
    /// `extensions` is omitted from records when empty.
    #[default]
    Strict,

    /// Broad candidate search with heuristic filtering, deduplication and
    /// image backfill. `extensions` is always present, possibly empty.
    Lenient,
}

impl Mode {
    /// Lowercase name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" | "broad" => Ok(Self::Lenient),
            other => Err(format!("unknown mode '{other}' (expected strict or lenient)")),
        }
    }
}

/// Configuration options for artwork extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the strict pipeline or [`Options::lenient`] for the broad one.
///
/// # Example
///
/// ```rust
/// use rs_serp_artworks::{Mode, Options};
///
/// let options = Options {
///     origin: "https://www.google.de".to_string(),
///     ..Options::lenient()
/// };
/// assert_eq!(options.mode, Mode::Lenient);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Which extraction pipeline to run.
    ///
    /// Default: `Mode::Strict`
    pub mode: Mode,

    /// Site origin prefixed onto each relative `href`.
    ///
    /// Default: `https://www.google.com`
    pub origin: String,

    /// `href` prefix an anchor must start with to be located in strict mode.
    ///
    /// Lenient mode ignores this and matches `/search?` anywhere.
    ///
    /// Default: `/search?sca_esv=`
    pub anchor_prefix: String,

    /// CSS selector of the subtree the anchor scan is narrowed to.
    ///
    /// When nothing matches, the whole document is scanned.
    ///
    /// Default: `[role="main"]`
    pub main_selector: String,

    /// Years accepted as extension tokens in lenient mode.
    ///
    /// Default: `800..=` next calendar year
    pub year_range: RangeInclusive<u32>,

    /// Maximum number of year extensions per lenient record.
    ///
    /// Default: `2`
    pub max_extensions: usize,

    /// Names longer than this (in characters) are rejected in lenient mode.
    ///
    /// Default: `120`
    pub max_name_len: usize,

    /// How many ancestors above an anchor are searched for a card container
    /// in lenient mode.
    ///
    /// Default: `4`
    pub ancestor_depth: usize,

    /// Assign unused inline images from the raw markup to lenient records
    /// that ended up without one.
    ///
    /// Default: `true`
    pub backfill_images: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::Strict,
            origin: DEFAULT_ORIGIN.to_string(),
            anchor_prefix: DEFAULT_ANCHOR_PREFIX.to_string(),
            main_selector: DEFAULT_MAIN_SELECTOR.to_string(),
            year_range: EARLIEST_YEAR..=latest_plausible_year(),
            max_extensions: 2,
            max_name_len: 120,
            ancestor_depth: 4,
            backfill_images: true,
        }
    }
}

impl Options {
    /// Strict pipeline with default settings.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient pipeline with default settings.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            mode: Mode::Lenient,
            ..Self::default()
        }
    }

    /// Check that the origin is an absolute http(s) URL without a path.
    ///
    /// A trailing slash is tolerated by [`Options::origin_base`].
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(self.origin.trim())
            .map_err(|e| Error::InvalidOrigin(format!("{}: {e}", self.origin)))?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(Error::InvalidOrigin(self.origin.clone()));
        }
        if parsed.path() != "/" || parsed.query().is_some() {
            return Err(Error::InvalidOrigin(self.origin.clone()));
        }
        Ok(())
    }

    /// Origin with surrounding whitespace and trailing slashes removed.
    #[must_use]
    pub fn origin_base(&self) -> &str {
        self.origin.trim().trim_end_matches('/')
    }
}

/// Next calendar year; covers pages saved around New Year.
fn latest_plausible_year() -> u32 {
    u32::try_from(chrono::Utc::now().year() + 1).unwrap_or(2100)
}
