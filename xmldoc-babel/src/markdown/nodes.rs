//! The Markdown block/span tree produced by the renderers.
//!
//! It is deliberately small: only what documentation output needs. Text is stored
//! unescaped; escaping, padding and list indentation happen when the tree is handed to
//! comrak (see [`super::serializer`]).

/// A block-level Markdown construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdBlock {
    /// A run of blocks with no markup of its own (document root, converted fragments).
    Container(Vec<MdBlock>),
    Heading { level: u8, content: Vec<MdSpan> },
    Paragraph(Vec<MdSpan>),
    CodeBlock {
        language: Option<String>,
        literal: String,
    },
    List { ordered: bool, items: Vec<MdListItem> },
    Table {
        header: Vec<Vec<MdSpan>>,
        rows: Vec<Vec<Vec<MdSpan>>>,
    },
}

/// A list item; holds blocks so that items can nest paragraphs and lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MdListItem {
    pub blocks: Vec<MdBlock>,
}

/// An inline Markdown construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdSpan {
    Text(String),
    Code(String),
    Strong(Vec<MdSpan>),
    Emphasis(Vec<MdSpan>),
    Link { url: String, content: Vec<MdSpan> },
    LineBreak,
    /// Several spans side by side, flattened on output.
    Group(Vec<MdSpan>),
}

impl MdSpan {
    pub fn text(text: impl Into<String>) -> Self {
        MdSpan::Text(text.into())
    }

    /// Wraps `spans` into a single span, unwrapping a lone element.
    pub fn from_spans(mut spans: Vec<MdSpan>) -> Self {
        if spans.len() == 1 {
            spans.remove(0)
        } else {
            MdSpan::Group(spans)
        }
    }
}
