//! Character reference escaping and decoding.

use std::borrow::Cow;

use markup5ever::data::{C1_REPLACEMENTS, NAMED_ENTITIES};

const ESCAPED_CHARS: [char; 6] = ['&', '\'', '<', '>', '"', '\r'];

/// Escape the characters that cannot appear literally in markup text or in
/// a double-quoted attribute value.
#[must_use]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPED_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Decode character references such as `&lt;`, `&eacute;`, `&#233;` and
/// `&#xE9;`.
///
/// Named references come from the full HTML5 table, including the ones that
/// expand to two code points. Numeric references may omit the trailing `;`,
/// and so may the legacy names that browsers accept without it (`&amp`,
/// `&eacute`, ...), which also match as a prefix of a longer run such as
/// `&ltx`. Anything that does not decode is kept as written.
#[must_use]
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match decode_reference(rest, &mut out) {
            Some(consumed) => rest = &rest[consumed..],
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Longest name in the table that is valid without a trailing `;`.
const LONGEST_LEGACY_NAME: usize = 6;

/// Decode the reference at the start of `s` (which begins with `&`) into
/// `out`. Returns the number of bytes consumed.
fn decode_reference(s: &str, out: &mut String) -> Option<usize> {
    let body = &s[1..];

    if let Some(num) = body.strip_prefix('#') {
        let (digits, radix, prefix_len) = match num.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16, "&#x".len()),
            None => (num, 10, "&#".len()),
        };
        let len = digits
            .chars()
            .take_while(|c| c.is_digit(radix))
            .count();
        if len == 0 {
            return None;
        }
        let value = u32::from_str_radix(&digits[..len], radix).unwrap_or(u32::MAX);
        let semicolon = usize::from(digits[len..].starts_with(';'));
        out.push(numeric_char(value));
        return Some(prefix_len + len + semicolon);
    }

    let len = body.bytes().take_while(u8::is_ascii_alphanumeric).count();
    if len == 0 {
        return None;
    }
    let semicolon = usize::from(body[len..].starts_with(';'));
    let name = &body[..len + semicolon];

    if let Some(chars) = named(name) {
        push_chars(out, chars);
        return Some(1 + name.len());
    }

    // Legacy names also match without `;`, as a prefix of a longer run.
    let max = (name.len() - 1).min(LONGEST_LEGACY_NAME);
    (2..=max).rev().find_map(|end| {
        named(&name[..end]).map(|chars| {
            push_chars(out, chars);
            1 + end
        })
    })
}

/// Look up a name (without `&`, with `;` if written) in the HTML5 table.
fn named(name: &str) -> Option<(char, Option<char>)> {
    // Keys that are only prefixes of real names map to (0, 0).
    let &(first, second) = NAMED_ENTITIES.get(name)?;
    let first = char::from_u32(first).filter(|&c| c != '\0')?;
    Some((first, char::from_u32(second).filter(|&c| c != '\0')))
}

fn push_chars(out: &mut String, (first, second): (char, Option<char>)) {
    out.push(first);
    out.extend(second);
}

fn numeric_char(value: u32) -> char {
    match value {
        // Read as Windows-1252, as browsers do.
        0x80..=0x9F => C1_REPLACEMENTS[(value - 0x80) as usize]
            .or_else(|| char::from_u32(value))
            .unwrap_or(char::REPLACEMENT_CHARACTER),
        0 | 0xD800..=0xDFFF => char::REPLACEMENT_CHARACTER,
        _ => char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}
