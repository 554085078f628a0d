//! Backslash escapes in string literals.

/// Decode every backslash escape in a raw string literal body.
///
/// - `\b \f \n \r \t` become the matching control characters.
/// - `\uXXXX` (exactly four hex digits) becomes that UTF-16 unit. A high/low
///   surrogate pair written as two escapes becomes one character; a lone
///   surrogate becomes U+FFFD.
/// - Any other `\c` becomes `c`, so `\"` is `"` and `\\` is `\`.
///
/// A `\u` without four hex digits and a trailing lone backslash are kept as
/// written. Decoding is a single left-to-right pass: `\\n` is `\` followed by `n`.
pub fn interpret_escapes(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(at) = rest.find('\\') {
        out.push_str(&rest[..at]);
        let tail = &rest[at + 1..];

        rest = match tail.chars().next() {
            None => {
                out.push('\\');
                tail
            }
            Some('u') => match unicode_escape(tail) {
                Some((ch, len)) => {
                    out.push(ch);
                    &tail[len..]
                }
                None => {
                    out.push('\\');
                    tail
                }
            },
            Some(c) => {
                out.push(simple_escape(c));
                &tail[c.len_utf8()..]
            }
        };
    }

    out.push_str(rest);
    out
}

fn simple_escape(c: char) -> char {
    match c {
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    }
}

/// Decode `uXXXX` at the start of `tail` (the backslash already consumed).
/// Returns the character and how many bytes of `tail` it used.
fn unicode_escape(tail: &str) -> Option<(char, usize)> {
    let unit = hex4(&tail[1..])?;

    if (0xD800..0xDC00).contains(&unit) {
        let low = tail[5..].strip_prefix("\\u").and_then(hex4);
        if let Some(low @ 0xDC00..=0xDFFF) = low {
            let code = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
            return Some((char::from_u32(code)?, 11));
        }
    }

    let ch = char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER);
    Some((ch, 5))
}

fn hex4(text: &str) -> Option<u16> {
    let digits = text.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}
