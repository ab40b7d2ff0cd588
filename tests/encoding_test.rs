#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_htree::{find_element, indentln, parse_bytes, text, Tag};

fn text_of_tag(html: &[u8], tag: Tag) -> String {
    let tree = parse_bytes(html);
    let node = find_element(tree.root(), |n| n.has_tag(tag)).expect("element");
    text(node).expect("text")
}

/// UTF-8 input passes through untouched
#[test]
fn utf8_content_handled_correctly() {
    let html = "<html><head><meta charset=\"utf-8\"></head>\
        <body><p>é, ñ, ü, 中文</p></body></html>"
        .as_bytes();

    assert_eq!(text_of_tag(html, Tag::P), "é, ñ, ü, 中文");
}

/// ISO-8859-1 declared via meta charset is converted to UTF-8
#[test]
fn iso88591_converted_to_utf8() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
        <body><h1>Caf\xE9 espa\xF1ol</h1><p>M\xFCnchen</p></body></html>";

    assert_eq!(text_of_tag(html, Tag::H1), "Café español");
    assert_eq!(text_of_tag(html, Tag::P), "München");
}

/// Windows-1252 declared via http-equiv is converted to UTF-8
#[test]
fn windows1252_detected_and_converted() {
    let html = b"<html><head><meta http-equiv=\"Content-Type\" \
        content=\"text/html; charset=windows-1252\"></head>\
        <body><p>\x93Smart quotes\x94 and an en\x96dash.</p></body></html>";

    assert_eq!(
        text_of_tag(html, Tag::P),
        "\u{201C}Smart quotes\u{201D} and an en\u{2013}dash."
    );
}

/// Invalid UTF-8 without a declaration still parses
#[test]
fn invalid_bytes_are_replaced() {
    let content = text_of_tag(b"<p>ok \xFF\xFE ok</p>", Tag::P);
    assert!(content.starts_with("ok "));
    assert!(content.contains('\u{FFFD}'));
}

/// Decoded documents render back out as UTF-8
#[test]
fn transcoded_document_renders_as_utf8() {
    let tree = parse_bytes(b"<meta charset=\"windows-1252\"><p>caf\xE9</p>");
    let mut out = Vec::new();
    indentln(&mut out, tree.root(), 0).expect("indentln");

    let rendered = String::from_utf8(out).expect("utf-8 output");
    assert!(rendered.contains("caf\u{e9}"));
}
