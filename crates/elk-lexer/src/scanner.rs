use crate::position::Position;

/// Elk source scanner.
///
/// A cursor over the source text with one recognizer per token kind. Each
/// recognizer skips leading whitespace, tries to match, and on success also skips
/// trailing whitespace. A recognizer that does not match leaves the cursor where it
/// was, so the parser can try the next alternative without rewinding by hand.
///
/// Token patterns:
/// - tag identifier: `[a-zA-Z0-9]+`
/// - identifier: `-?[_a-zA-Z][_a-zA-Z0-9-]*`
/// - string: `"` raw body `"`, single line
/// - punctuation: `. # : [ ] { } ,`
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Move the cursor back to an offset previously returned by [`Scanner::offset`].
    pub fn reset(&mut self, offset: usize) {
        self.pos = offset.min(self.source.len());
    }

    /// Resolve the current offset into a line and column.
    pub fn position(&self) -> Position {
        Position::locate(self.source, self.pos)
    }

    /// Byte offset where the next token would start, i.e. after any whitespace.
    /// Does not move the cursor.
    pub fn token_start(&self) -> usize {
        self.pos + whitespace_len(self.rest())
    }

    /// True when only whitespace remains. Consumes that whitespace.
    pub fn is_at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.source.len()
    }

    pub fn skip_whitespace(&mut self) {
        self.pos += whitespace_len(self.rest());
    }

    // --- Recognizers ---

    /// Match a single punctuation character.
    pub fn punct(&mut self, ch: char) -> bool {
        self.token(|rest| rest.starts_with(ch).then_some((ch.len_utf8(), ())))
            .is_some()
    }

    /// Match a tag name or attribute key: `[a-zA-Z0-9]+`.
    pub fn tag_identifier(&mut self) -> Option<&'a str> {
        self.token(|rest| {
            let len = rest.bytes().take_while(u8::is_ascii_alphanumeric).count();
            (len > 0).then(|| (len, &rest[..len]))
        })
    }

    /// Match a class or id name: `-?[_a-zA-Z][_a-zA-Z0-9-]*`.
    pub fn identifier(&mut self) -> Option<&'a str> {
        self.token(|rest| {
            let bytes = rest.as_bytes();
            let mut len = usize::from(bytes.first() == Some(&b'-'));

            match bytes.get(len) {
                Some(b) if b.is_ascii_alphabetic() || *b == b'_' => len += 1,
                _ => return None,
            }

            len += bytes[len..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_' || **b == b'-')
                .count();

            Some((len, &rest[..len]))
        })
    }

    /// Match a double-quoted string literal and return its raw body, escapes
    /// still encoded. See [`closing_quote`] for how the literal ends.
    pub fn string_literal(&mut self) -> Option<&'a str> {
        self.token(|rest| {
            let body = rest.strip_prefix('"')?;
            let end = closing_quote(body)?;
            Some((end + 2, &body[..end]))
        })
    }

    // --- Helpers ---

    fn rest(&self) -> &'a str {
        let source = self.source;
        &source[self.pos..]
    }

    /// Run `matcher` on the input after leading whitespace. `matcher` returns the
    /// matched length in bytes and the token value.
    fn token<T>(&mut self, matcher: impl FnOnce(&'a str) -> Option<(usize, T)>) -> Option<T> {
        let start = self.pos;
        self.skip_whitespace();

        match matcher(self.rest()) {
            Some((len, value)) => {
                self.pos += len;
                self.skip_whitespace();
                Some(value)
            }
            None => {
                self.pos = start;
                None
            }
        }
    }
}

fn whitespace_len(text: &str) -> usize {
    text.find(|c: char| !is_whitespace(c)).unwrap_or(text.len())
}

/// The ECMAScript `\s` set. Unlike [`char::is_whitespace`] it includes the byte
/// order mark U+FEFF and excludes NEL U+0085.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Find the byte offset of the quote that closes a string literal whose body
/// starts at `body`.
///
/// The body follows `(\\.|.)*?"` with `.` never matching a line terminator, so a
/// literal cannot span lines. At each backslash the escape reading (`\\.`) is
/// preferred; when that reading never reaches a closing quote on the line, the
/// backslash is read as a plain character instead. `"a\" b"` therefore closes at
/// the last quote, while `"a\"` closes at its only one.
///
/// Walking the line backwards, `next` holds the answer for the following
/// character and `after_next` for the one after that.
fn closing_quote(body: &str) -> Option<usize> {
    let line = body
        .find(is_line_terminator)
        .map_or(body, |end| &body[..end]);

    let (mut next, mut after_next) = (None, None);
    for (i, c) in line.char_indices().rev() {
        let here = match c {
            '"' => Some(i),
            '\\' => after_next.or(next),
            _ => next,
        };
        after_next = next;
        next = here;
    }
    next
}
