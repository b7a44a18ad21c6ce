//! Document loading.
//!
//! The extractor only ever sees HTML text. Where that text comes from is up
//! to a [`DocumentLoader`]: the bundled [`SavedPageLoader`] reads a page a
//! browser has already rendered and saved to disk. Rendering live pages is
//! left to other implementations.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::encoding;
use crate::error::{Error, Result};

/// Source of fully-rendered page HTML.
pub trait DocumentLoader {
    /// Load the page at `path` as UTF-8 HTML.
    ///
    /// A failure here is fatal for the run; loaders do not retry.
    fn load(&self, path: &Path) -> Result<String>;
}

/// Reads saved HTML files, detecting their character encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavedPageLoader;

impl DocumentLoader for SavedPageLoader {
    fn load(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded saved page");

        let html = encoding::decode_html(&bytes);
        if html.trim().is_empty() {
            return Err(Error::EmptyDocument);
        }
        Ok(html)
    }
}
