//! Per-anchor record extraction.
//!
//! - `strict`: exact two-child card shape, validated `sca_esv` links
//! - `lenient`: broad candidate search for noisier pages
//! - `rules`: ordered rejection rules applied to lenient candidates
//! - `images`: inline base64 image lookup and backfill

pub mod images;
pub mod lenient;
pub mod rules;
pub mod strict;

/// Why an anchor produced no record.
///
/// Skips are a normal outcome: they are logged and absorbed, never returned
/// to the caller as errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// The anchor has no `href` attribute.
    #[error("anchor has no href")]
    MissingHref,

    /// The `href` failed link validation.
    #[error("link rejected: {0}")]
    InvalidLink(String),

    /// The anchor does not have exactly two element children.
    #[error("expected 2 element children, found {0}")]
    ChildCount(usize),

    /// The two children are not one image and one container.
    #[error("expected an image and a container, got {images} image(s), {containers} container(s)")]
    CardShape {
        /// Image-kind children found.
        images: usize,
        /// Container-kind children found.
        containers: usize,
    },

    /// The container has no sub-container, or its text is empty.
    #[error("card has no name")]
    MissingName,
}
