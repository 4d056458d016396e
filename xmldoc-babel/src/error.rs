//! Error types for parsing and rendering operations

use std::fmt;
use thiserror::Error;

/// A 1-based line/column location in the XML source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl From<roxmltree::TextPos> for Position {
    fn from(pos: roxmltree::TextPos) -> Self {
        Position {
            row: pos.row,
            col: pos.col,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Errors raised while turning XML text into a documentation tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not well-formed XML
    #[error("XML syntax error: {0}")]
    Syntax(#[from] roxmltree::Error),
    /// Well-formed XML that does not follow the documentation-comment schema
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// A structural violation, located at the offending element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("<{element}> at {position}: {kind}")]
pub struct SchemaError {
    pub element: String,
    pub position: Position,
    pub kind: SchemaErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaErrorKind {
    #[error("unexpected element, expected <{expected}>")]
    UnexpectedElement { expected: String },
    #[error("missing required child element <{0}>")]
    MissingElement(String),
    #[error("element <{0}> must not be empty")]
    EmptyElement(String),
    #[error("missing required attribute '{0}'")]
    MissingAttribute(String),
    #[error("attribute '{0}' must not be blank")]
    BlankAttribute(String),
    #[error("invalid member name '{0}'")]
    InvalidMemberId(String),
    #[error("invalid code reference '{0}'")]
    InvalidCodeReference(String),
    #[error("unsupported list type '{0}'")]
    UnsupportedListType(String),
    #[error("expected a 'cref' or 'href' attribute")]
    MissingReference,
}

/// Errors raised while producing Markdown from a documentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Block-only content reached the inline (span) renderer
    #[error("{kind} cannot be converted to inline Markdown")]
    BlockInInlineContext { kind: &'static str },
    /// The Markdown backend failed to produce text
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Any failure of the one-shot XML → Markdown conversion.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
