//! Character encoding sniffing for byte input.
//!
//! `parse_bytes` has to turn raw bytes into UTF-8 before the parser sees
//! them. The encoding comes from, in order:
//!
//! 1. a byte order mark,
//! 2. `<meta charset="...">`,
//! 3. `<meta http-equiv="Content-Type" content="...; charset=...">`,
//! 4. UTF-8.
//!
//! Only the first 1024 bytes are examined for meta declarations.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

const SNIFF_LEN: usize = 1024;

#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("valid regex")
});

/// Pick the encoding of an HTML byte stream.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label declared by a meta tag, if any.
fn declared_charset(head: &str) -> Option<&str> {
    [&*META_CHARSET_RE, &*HTTP_EQUIV_CHARSET_RE]
        .into_iter()
        .find_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
}

/// Decode HTML bytes to UTF-8 with the sniffed encoding.
///
/// Malformed sequences become U+FFFD; decoding never fails. A BOM is
/// stripped. Returns the text and the encoding that was used.
#[must_use]
pub fn decode_html(html: &[u8]) -> (Cow<'_, str>, &'static Encoding) {
    let encoding = sniff_encoding(html);
    let (text, used, _had_errors) = encoding.decode(html);
    (text, used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(sniff_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(sniff_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn meta_charset_unquoted_and_uppercase() {
        assert_eq!(sniff_encoding(b"<META CHARSET=Shift_JIS>").name(), "Shift_JIS");
    }

    #[test]
    fn http_equiv_content_type() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // WHATWG maps latin1 labels to windows-1252
        assert_eq!(sniff_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn bom_wins_over_meta() {
        let html = b"\xEF\xBB\xBF<meta charset=\"windows-1252\">";
        assert_eq!(sniff_encoding(html), UTF_8);
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        assert_eq!(sniff_encoding(b"<meta charset=\"no-such-thing\">"), UTF_8);
    }

    #[test]
    fn declaration_past_sniff_window_is_ignored() {
        let mut html = vec![b' '; SNIFF_LEN];
        html.extend_from_slice(b"<meta charset=\"windows-1252\">");
        assert_eq!(sniff_encoding(&html), UTF_8);
    }

    #[test]
    fn decode_windows_1252() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Caf\xE9\x94</p>";
        let (text, used) = decode_html(html);
        assert_eq!(used.name(), "windows-1252");
        assert!(text.contains("\u{201C}Café\u{201D}"));
    }

    #[test]
    fn decode_invalid_utf8_is_lossy() {
        let (text, used) = decode_html(b"<p>Test \xFF\xFE ok</p>");
        assert_eq!(used, UTF_8);
        assert!(text.contains("Test"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn decode_strips_bom() {
        let (text, _) = decode_html(b"\xEF\xBB\xBF<p>x</p>");
        assert_eq!(text, "<p>x</p>");
    }
}
