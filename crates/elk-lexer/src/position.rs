/// A resolved location in source text, used for error reporting.
///
/// `line` and `column` are 1-based. Columns count characters, not bytes, and only
/// `\n` starts a new line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Resolve a byte offset into `source`.
    ///
    /// Offsets past the end clamp to the end; offsets inside a multi-byte character
    /// resolve to the start of that character.
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &source[..offset];
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        let line = before.matches('\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;

        Self::new(offset, line, column)
    }
}
