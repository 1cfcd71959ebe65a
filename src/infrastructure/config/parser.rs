//! Properties-format text parsing.
//!
//! Handles the line-oriented `key=value` syntax: `#`/`!` comments, `=`, `:`
//! or whitespace separators, backslash line continuations and `\uXXXX`
//! escapes. A backslash that does not start a recognized escape is kept as
//! is, so Windows paths survive whether or not their backslashes are
//! doubled.

use crate::domain::models::RawProperties;

/// Parse properties text into raw key/value pairs. Later duplicates win.
pub fn parse(text: &str) -> RawProperties {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut properties = RawProperties::new();
    let mut lines = physical_lines(text);

    while let Some(line) = lines.next() {
        let line = line.trim_start_matches(is_blank);
        if line.is_empty() || line.starts_with(&['#', '!'][..]) {
            continue;
        }

        let mut logical = line.to_owned();
        while continues(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        properties.insert(unescape(key), unescape(value));
    }

    properties
}

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Lines terminated by `\n`, `\r\n` or a lone `\r`.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}

/// A logical line continues when it ends in an odd number of backslashes.
fn continues(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let boundary = line.char_indices().find(|&(_, c)| {
        if escaped {
            escaped = false;
            return false;
        }
        if c == '\\' {
            escaped = true;
            return false;
        }
        c == '=' || c == ':' || is_blank(c)
    });

    let Some((key_end, separator)) = boundary else {
        return (line, "");
    };

    let key = &line[..key_end];
    let mut value = line[key_end + separator.len_utf8()..].trim_start_matches(is_blank);
    if is_blank(separator) {
        if let Some(rest) = value.strip_prefix(&['=', ':'][..]) {
            value = rest.trim_start_matches(is_blank);
        }
    }
    (key, value)
}

fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_owned();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match after.chars().next() {
            Some(c @ ('\\' | '=' | ':' | '#' | '!' | ' ')) => {
                out.push(c);
                rest = &after[1..];
            }
            Some('u') => {
                if let Some(c) = decode_unicode(&after[1..]) {
                    out.push(c);
                    rest = &after[5..];
                } else {
                    out.push('\\');
                    rest = after;
                }
            }
            _ => {
                out.push('\\');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_unicode(digits: &str) -> Option<char> {
    let hex = digits.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
