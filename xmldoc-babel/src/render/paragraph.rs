//! The implicit paragraph of the block renderer.
//!
//! Inline content has to land in a paragraph, but the XML rarely says where one starts:
//! a summary is just text with some inline elements in it. The renderer therefore opens
//! a paragraph on the first span and closes it as soon as any block construct follows.

use crate::markdown::{MdBlock, MdSpan};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParagraphState {
    #[default]
    Idle,
    Accumulating(Vec<MdSpan>),
}

impl ParagraphState {
    /// Appends a span, opening the paragraph if needed.
    pub fn push(self, span: MdSpan) -> ParagraphState {
        match self {
            ParagraphState::Idle => ParagraphState::Accumulating(vec![span]),
            ParagraphState::Accumulating(mut spans) => {
                spans.push(span);
                ParagraphState::Accumulating(spans)
            }
        }
    }

    /// Closes the paragraph. Returns the finished block, or `None` if nothing
    /// but whitespace was accumulated.
    pub fn close(self) -> (ParagraphState, Option<MdBlock>) {
        let block = match self {
            ParagraphState::Idle => None,
            ParagraphState::Accumulating(spans) => finish(spans),
        };
        (ParagraphState::Idle, block)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ParagraphState::Idle)
    }
}

fn finish(mut spans: Vec<MdSpan>) -> Option<MdBlock> {
    // Whitespace and line breaks at the edges of a paragraph are artifacts of the XML layout
    let start = spans.iter().position(|span| !is_edge_noise(span))?;
    let end = spans.iter().rposition(|span| !is_edge_noise(span))?;
    spans.truncate(end + 1);
    spans.drain(..start);

    if let Some(MdSpan::Text(first)) = spans.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(MdSpan::Text(last)) = spans.last_mut() {
        *last = last.trim_end().to_string();
    }
    spans.retain(|span| !matches!(span, MdSpan::Text(text) if text.is_empty()));

    Some(MdBlock::Paragraph(spans))
}

fn is_edge_noise(span: &MdSpan) -> bool {
    match span {
        MdSpan::LineBreak => true,
        MdSpan::Text(text) => text.trim().is_empty(),
        _ => false,
    }
}
