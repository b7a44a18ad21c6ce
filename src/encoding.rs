//! Character encoding detection for saved pages.
//!
//! Browsers save pages in the charset they were served with, which is not
//! always UTF-8. The decoder honours a byte-order mark first, then a
//! `charset=` declaration near the top of the document.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Matches `charset=...` in both `<meta charset>` and `http-equiv` forms.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9._:\-]+)"#)
        .expect("META_CHARSET regex")
});

/// Pick the encoding of a saved page.
///
/// Order: byte-order mark, declared charset in the first kilobyte, UTF-8.
#[must_use]
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD instead of failing the load.
///
/// # Examples
///
/// ```
/// use rs_serp_artworks::encoding::decode_html;
///
/// let page = b"<meta charset=\"windows-1252\"><div>Caf\xE9</div>";
/// assert!(decode_html(page).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = sniff_encoding(bytes);
    // decode() strips a matching BOM itself
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}
