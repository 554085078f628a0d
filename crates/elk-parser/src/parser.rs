//! Document parser for Elk.
//!
//! Recursive descent over [`Scanner`] with PEG semantics: alternatives are tried
//! in order, a failed alternative rewinds to where it started, and the first
//! success wins.
//!
//! Failures are not returned from each production. Instead the parser keeps the
//! furthest position where any recognizer failed and the expectations recorded
//! there. When the whole document cannot be parsed, that record becomes the
//! [`ParseError`]. Named productions replace the expectations of their own
//! failures with their name, so errors read `expected block` rather than
//! `expected ':', '{'`.
//!
//! Blocks nest at most [`MAX_NESTING`] levels deep. The `{` or `:` that would open
//! one more level fails the whole parse at its own position.

use crate::ast::{Attribute, Body, Document, Statement, Tag};
use crate::ParseError;
use elk_lexer::{interpret_escapes, Position, Scanner};

/// Deepest block nesting a document may use.
pub const MAX_NESTING: usize = 128;

const TOO_DEEP: &str = "at most 128 nested blocks";

/// Furthest failure seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Failure {
    offset: usize,
    expected: Vec<&'static str>,
}

/// Elk document parser.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    furthest: Option<Failure>,
    depth: usize,
    /// Offset of the first block opener past [`MAX_NESTING`].
    too_deep: Option<usize>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            furthest: None,
            depth: 0,
            too_deep: None,
        }
    }

    /// Parse source text into a document tree.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        Parser::new(source).parse_document()
    }

    /// Parse the whole input: `statement* EOF`.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let statements = self.statements();

        if let Some(offset) = self.too_deep {
            self.furthest = Some(Failure {
                offset,
                expected: vec![TOO_DEEP],
            });
            return Err(self.error());
        }

        let offset = self.scanner.token_start();
        if self.scanner.is_at_end() {
            return Ok(Document { statements });
        }

        self.expect(offset, "EOF");
        Err(self.error())
    }

    // =========================================================================
    // Productions
    // =========================================================================

    /// `statement*`. Stops at the first position where no statement starts.
    fn statements(&mut self) -> Vec<Statement> {
        let mut statements = Vec::new();
        while self.too_deep.is_none() {
            let Some(statement) = self.statement() else {
                break;
            };
            statements.push(statement);
        }
        statements
    }

    /// `tag | string`, tag first.
    fn statement(&mut self) -> Option<Statement> {
        self.described("statement", |p| {
            if let Some(tag) = p.tag() {
                return Some(Statement::Tag(tag));
            }
            p.string().map(Statement::Text)
        })
    }

    /// Parse a tag:
    /// ```text
    /// a.link#home [href: "/", title: "Home"]: "Home"
    /// ```
    /// Everything after the name is optional. Class and id may come in either
    /// order but each at most once.
    fn tag(&mut self) -> Option<Tag> {
        self.described("tag", |p| {
            let mut tag = Tag::new(p.tag_identifier()?);

            loop {
                if tag.class.is_none() {
                    if let Some(class) = p.class() {
                        tag.class = Some(class);
                        continue;
                    }
                }
                if tag.id.is_none() {
                    if let Some(id) = p.id() {
                        tag.id = Some(id);
                        continue;
                    }
                }
                break;
            }

            tag.attributes = p.attributes();
            tag.body = p.block();
            Some(tag)
        })
    }

    /// `'.' identifier`
    fn class(&mut self) -> Option<String> {
        self.described("class", |p| {
            p.punct('.')?;
            p.identifier()
        })
    }

    /// `'#' identifier`
    fn id(&mut self) -> Option<String> {
        self.described("id", |p| {
            p.punct('#')?;
            p.identifier()
        })
    }

    /// `'[' attribute (',' attribute)* ']'`
    fn attributes(&mut self) -> Option<Vec<Attribute>> {
        self.described("attributes", |p| {
            p.punct('[')?;

            let mut attributes = vec![p.attribute()?];
            while let Some(attribute) = p.attempt(|p| {
                p.punct(',')?;
                p.attribute()
            }) {
                attributes.push(attribute);
            }

            p.punct(']')?;
            Some(attributes)
        })
    }

    /// `tag_identifier ':' string`
    fn attribute(&mut self) -> Option<Attribute> {
        self.described("attribute", |p| {
            let name = p.tag_identifier()?;
            p.punct(':')?;
            let value = p.string()?;
            Some(Attribute { name, value })
        })
    }

    /// `':' statement | '{' statement* '}'`, colon form first.
    fn block(&mut self) -> Option<Body> {
        self.described("block", |p| {
            let single = p.attempt(|p| {
                let opener = p.scanner.token_start();
                p.punct(':')?;
                p.nested(opener, Self::statement)
            });
            if let Some(statement) = single {
                return Some(Body::Statement(Box::new(statement)));
            }
            p.braced_block().map(Body::Block)
        })
    }

    fn braced_block(&mut self) -> Option<Vec<Statement>> {
        self.described("braced block", |p| {
            let opener = p.scanner.token_start();
            p.punct('{')?;
            let statements = p.nested(opener, |p| Some(p.statements()))?;
            p.punct('}')?;
            Some(statements)
        })
    }

    // =========================================================================
    // Terminals
    // =========================================================================

    fn tag_identifier(&mut self) -> Option<String> {
        let offset = self.scanner.token_start();
        let found = self.scanner.tag_identifier();
        self.record(offset, "tag identifier", found).map(str::to_string)
    }

    fn identifier(&mut self) -> Option<String> {
        let offset = self.scanner.token_start();
        let found = self.scanner.identifier();
        self.record(offset, "identifier", found).map(str::to_string)
    }

    /// A string literal, escapes decoded.
    fn string(&mut self) -> Option<String> {
        let offset = self.scanner.token_start();
        let found = self.scanner.string_literal();
        self.record(offset, "string", found).map(interpret_escapes)
    }

    fn punct(&mut self, ch: char) -> Option<()> {
        let offset = self.scanner.token_start();
        let found = self.scanner.punct(ch).then_some(());
        self.record(offset, quoted(ch), found)
    }

    // =========================================================================
    // Failure bookkeeping
    // =========================================================================

    /// Pass `found` through, noting `what` as expected at `offset` if it is `None`.
    fn record<T>(&mut self, offset: usize, what: &'static str, found: Option<T>) -> Option<T> {
        if found.is_none() {
            self.expect(offset, what);
        }
        found
    }

    /// Note that `what` was expected at `offset`. Only the furthest offset is kept;
    /// expectations at the same offset accumulate in the order they are noted.
    fn expect(&mut self, offset: usize, what: &'static str) {
        if let Some(failure) = &mut self.furthest {
            if failure.offset > offset {
                return;
            }
            if failure.offset == offset {
                if !failure.expected.contains(&what) {
                    failure.expected.push(what);
                }
                return;
            }
        }

        self.furthest = Some(Failure {
            offset,
            expected: vec![what],
        });
    }

    /// Run `production` one block level deeper. `opener` is where the `{` or `:`
    /// opening the level starts; past [`MAX_NESTING`] it is kept and nothing runs.
    fn nested<T>(
        &mut self,
        opener: usize,
        production: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        if self.too_deep.is_some() {
            return None;
        }
        if self.depth == MAX_NESTING {
            self.too_deep = Some(opener);
            return None;
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Run a production, rewinding the scanner if it fails.
    fn attempt<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.scanner.offset();
        let result = production(self);
        if result.is_none() {
            self.scanner.reset(start);
        }
        result
    }

    /// Run a named production. If it fails, whatever it recorded at its furthest
    /// offset is replaced by its `name`; if it succeeds, its record is kept.
    fn described<T>(
        &mut self,
        name: &'static str,
        production: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let outer = self.furthest.take();
        let result = self.attempt(production);
        let inner = std::mem::replace(&mut self.furthest, outer);

        if let Some(inner) = inner {
            if result.is_some() {
                for what in inner.expected {
                    self.expect(inner.offset, what);
                }
            } else {
                self.expect(inner.offset, name);
            }
        }
        result
    }

    fn error(&mut self) -> ParseError {
        let failure = self.furthest.take().unwrap_or_else(|| Failure {
            offset: self.scanner.offset(),
            expected: vec!["EOF"],
        });
        let position = Position::locate(self.scanner.source(), failure.offset);

        ParseError {
            offset: position.offset,
            line: position.line,
            column: position.column,
            expected: failure.expected.into_iter().map(String::from).collect(),
        }
    }
}

fn quoted(ch: char) -> &'static str {
    match ch {
        '.' => "'.'",
        '#' => "'#'",
        ':' => "':'",
        '[' => "'['",
        ']' => "']'",
        '{' => "'{'",
        '}' => "'}'",
        ',' => "','",
        _ => "punctuation",
    }
}
