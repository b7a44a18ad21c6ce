//! # rs-serp-artworks
//!
//! Extracts artwork records (name, link, image, extensions) from saved
//! Google search-result pages.
//!
//! Anchors pointing at `/search` are located in the page's main results
//! area, their links validated, and each one that has the shape of a result
//! card turned into an [`ArtworkRecord`]. Anchors that don't fit are skipped;
//! they never fail the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_serp_artworks::extract;
//!
//! let html = r#"<div role="main">
//!   <a href="/search?sca_esv=8a1f&q=Mona+Lisa">
//!     <img src="https://example.com/mona.jpg">
//!     <div><div>Mona Lisa</div><div>["1503","Louvre"]</div></div>
//!   </a>
//! </div>"#;
//!
//! let records = extract(html)?;
//! assert_eq!(records[0].name, "Mona Lisa");
//! assert_eq!(records[0].extensions(), ["1503", "Louvre"]);
//! # Ok::<(), rs_serp_artworks::Error>(())
//! ```
//!
//! ## Modes
//!
//! - **Strict** (default): anchor must hold exactly one image and one
//!   container, and its link a non-empty `sca_esv` parameter. Records
//!   without extensions have no `extensions` key when serialized.
//! - **Lenient**: every `/search?` anchor is a candidate; names, years and
//!   inline images are gathered heuristically, filtered by an ordered rule
//!   table, deduplicated and sorted by name. `extensions` is always present.

mod assemble;
mod error;
mod extract;
mod patterns;
mod record;

/// DOM helpers over `dom_query` and card node classification.
pub mod dom;

/// Character encoding detection for saved pages.
pub mod encoding;

/// Per-anchor extractors, lenient rules and inline image lookup.
pub mod extractor;

/// Result link validation.
pub mod link;

/// Loading saved pages from disk.
pub mod loader;

/// Candidate anchor location.
pub mod locator;

/// Extraction options and mode selection.
pub mod options;

use std::path::Path;

// Public API - re-exports
pub use error::{Error, Result};
pub use loader::{DocumentLoader, SavedPageLoader};
pub use options::{Mode, Options};
pub use record::ArtworkRecord;

/// Extracts artwork records from an HTML page using default (strict) options.
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<Vec<ArtworkRecord>> {
    extract_with_options(html, &Options::default())
}

/// Extracts artwork records from an HTML page with custom options.
///
/// # Example
///
/// ```rust
/// use rs_serp_artworks::{extract_with_options, Options};
///
/// let html = r#"<div><a href="/search?q=Guernica"><img alt="Guernica"></a> 1937</div>"#;
/// let records = extract_with_options(html, &Options::lenient())?;
/// assert_eq!(records[0].name, "Guernica");
/// assert_eq!(records[0].extensions(), ["1937"]);
/// # Ok::<(), rs_serp_artworks::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<Vec<ArtworkRecord>> {
    extract::extract_records(html, options)
}

/// Extracts artwork records from HTML bytes with automatic encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<Vec<ArtworkRecord>> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts artwork records from HTML bytes with custom options and
/// automatic encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Vec<ArtworkRecord>> {
    let html = encoding::decode_html(html);
    extract_with_options(&html, options)
}

/// Extracts artwork records from a document the caller already parsed.
#[allow(clippy::missing_errors_doc)]
pub fn extract_document(
    document: &dom::Document,
    options: &Options,
) -> Result<Vec<ArtworkRecord>> {
    extract::extract_from_document(document, options)
}

/// Loads a saved page from disk and extracts its artwork records.
#[allow(clippy::missing_errors_doc)]
pub fn extract_file(path: impl AsRef<Path>, options: &Options) -> Result<Vec<ArtworkRecord>> {
    extract_file_with(&SavedPageLoader, path, options)
}

/// Loads a page through a custom [`DocumentLoader`] and extracts its
/// artwork records.
#[allow(clippy::missing_errors_doc)]
pub fn extract_file_with<L: DocumentLoader + ?Sized>(
    loader: &L,
    path: impl AsRef<Path>,
    options: &Options,
) -> Result<Vec<ArtworkRecord>> {
    let html = loader.load(path.as_ref())?;
    extract_with_options(&html, options)
}
