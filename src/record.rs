//! Artwork record output type.

use serde::{Deserialize, Serialize};

/// One artwork card extracted from a search-result page.
///
/// Records are plain values built fresh per anchor. The `extensions` field
/// encodes the difference between the two modes: strict extraction leaves
/// it `None` when there is nothing to report, so the serialized record has
/// no `extensions` key, while lenient extraction always sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    /// Display name, entity-decoded and trimmed.
    pub name: String,

    /// Absolute result link (`<origin>/search?...`).
    pub link: String,

    /// Image URL or inline `data:image/...;base64,` payload; empty when the
    /// card has no image.
    pub image: String,

    /// Free-text annotations such as years, in card order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

impl ArtworkRecord {
    /// Extensions as a slice, empty when absent.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        self.extensions.as_deref().unwrap_or_default()
    }

    /// Whether the record carries an image reference.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}
