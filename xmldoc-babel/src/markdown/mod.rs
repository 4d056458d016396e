//! Markdown output
//!
//! The renderers in [`crate::render`] produce an [`MdBlock`] / [`MdSpan`] tree. This module
//! turns that tree into text through comrak's CommonMark formatter.

pub mod nodes;
pub mod serializer;

pub use nodes::{MdBlock, MdListItem, MdSpan};
pub use serializer::{render_block, render_span};

/// Bullet character used for unordered lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStyle {
    #[default]
    Dash,
    Plus,
    Star,
}

/// Knobs passed through to the Markdown formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Wrap column for paragraphs; `0` disables wrapping.
    pub width: usize,
    pub list_style: ListStyle,
}
