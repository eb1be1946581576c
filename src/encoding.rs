//! Character encoding detection for scraped byte payloads.
//!
//! Pages come off the wire in whatever charset the source site declares.
//! [`decode_to_utf8`] sniffs the declaration and converts before the
//! sanitizer ever sees the text.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How far into the payload to look for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Matches the `charset=` spelled by both declaration forms:
/// `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Pick the encoding declared in the first 1 KiB, defaulting to UTF-8.
#[must_use]
pub fn sniff_encoding(raw: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&raw[..raw.len().min(SNIFF_WINDOW)]);
    CHARSET_DECL_RE
        .captures(&head)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode `raw` to UTF-8 using the sniffed encoding.
///
/// Undecodable bytes become U+FFFD rather than errors, so this never fails.
#[must_use]
pub fn decode_to_utf8(raw: &[u8]) -> String {
    let encoding = sniff_encoding(raw);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(raw).into_owned();
    }
    let (decoded, _, _) = encoding.decode(raw);
    decoded.into_owned()
}
