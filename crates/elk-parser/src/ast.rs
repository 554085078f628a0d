//! Document tree for Elk.
//!
//! Built once per parse and handed to the generator. Every type serializes with
//! serde so drivers can expose the tree as JSON or as a JS value.

use serde::Serialize;

/// A complete Elk document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub statements: Vec<Statement>,
}

/// A statement: literal text or a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Statement {
    /// Decoded string literal, rendered as-is.
    Text(String),
    Tag(Tag),
}

/// An element: `name.class#id [key: "value"] body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub class: Option<String>,
    pub id: Option<String>,
    /// Present only when a bracketed list was written; never empty then.
    pub attributes: Option<Vec<Attribute>>,
    pub body: Option<Body>,
}

/// A `key: "value"` pair inside `[...]`. Names are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// The body of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Body {
    /// `tag: statement`
    Statement(Box<Statement>),
    /// `tag { statement* }`, possibly empty.
    Block(Vec<Statement>),
}

impl Tag {
    /// A bare tag with nothing but a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: None,
            id: None,
            attributes: None,
            body: None,
        }
    }
}
