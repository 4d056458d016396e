//! Inline (span) rendering.
//!
//! Flattens inline-safe content into a single [`MdSpan`], for use inside link text,
//! table cells or anywhere else a block cannot go. Block-only content is an error.

use super::visit::{walk_optional_text_block, VisitResult, Visitor};
use super::{code_reference_span, raw_node_spans, url_reference_span, CodeReferenceResolver};
use crate::error::RenderError;
use crate::markdown::MdSpan;
use crate::model::{
    CodeBlock, DocumentationFile, ItemList, ListItem, Member, RawNode, SeeReference, Table,
    TableRow, TextBlock, TextStyle,
};

pub struct SpanRenderer<'r> {
    resolver: &'r dyn CodeReferenceResolver,
    /// Open composite spans; the bottom entry is the result.
    stack: Vec<Vec<MdSpan>>,
}

impl<'r> SpanRenderer<'r> {
    pub fn new(resolver: &'r dyn CodeReferenceResolver) -> Self {
        SpanRenderer {
            resolver,
            stack: vec![Vec::new()],
        }
    }

    /// Renders a whole text block into a list of sibling spans.
    pub fn spans(mut self, block: &TextBlock) -> Result<Vec<MdSpan>, RenderError> {
        self.visit_text_block(block)?;
        Ok(self.finish_spans())
    }

    /// Collapses everything rendered so far into one span.
    pub fn finish(self) -> MdSpan {
        MdSpan::from_spans(self.finish_spans())
    }

    fn finish_spans(mut self) -> Vec<MdSpan> {
        let mut spans = Vec::new();
        while let Some(frame) = self.stack.pop() {
            spans = frame.into_iter().chain(spans).collect();
        }
        spans
    }

    fn push(&mut self, span: MdSpan) {
        match self.stack.last_mut() {
            Some(top) => top.push(span),
            None => self.stack.push(vec![span]),
        }
    }

    fn open(&mut self) {
        self.stack.push(Vec::new());
    }

    fn close(&mut self) -> Vec<MdSpan> {
        self.stack.pop().unwrap_or_default()
    }

    /// Renders optional link text in its own frame.
    fn nested(&mut self, text: Option<&TextBlock>) -> Result<Option<Vec<MdSpan>>, RenderError> {
        let Some(text) = text else {
            return Ok(None);
        };
        self.open();
        self.visit_text_block(text)?;
        Ok(Some(self.close()))
    }
}

fn reject(kind: &'static str) -> VisitResult {
    Err(RenderError::BlockInInlineContext { kind })
}

impl Visitor for SpanRenderer<'_> {
    fn visit_file(&mut self, _file: &DocumentationFile) -> VisitResult {
        reject("File")
    }

    fn visit_member(&mut self, _member: &Member) -> VisitResult {
        reject("Member")
    }

    fn visit_text(&mut self, text: &str) -> VisitResult {
        self.push(MdSpan::text(text));
        Ok(())
    }

    fn visit_paragraph(&mut self, content: Option<&TextBlock>) -> VisitResult {
        let preceded = self.stack.last().is_some_and(|top| !top.is_empty());
        if preceded {
            self.push(MdSpan::LineBreak);
        }
        walk_optional_text_block(self, content)
    }

    fn visit_inline_code(&mut self, code: &str) -> VisitResult {
        if !code.is_empty() {
            self.push(MdSpan::Code(code.to_string()));
        }
        Ok(())
    }

    fn visit_code_block(&mut self, _code: &CodeBlock) -> VisitResult {
        reject("CodeBlock")
    }

    fn visit_parameter_ref(&mut self, name: &str) -> VisitResult {
        self.push(MdSpan::Code(name.to_string()));
        Ok(())
    }

    fn visit_type_parameter_ref(&mut self, name: &str) -> VisitResult {
        self.push(MdSpan::Code(name.to_string()));
        Ok(())
    }

    fn visit_see(&mut self, reference: &SeeReference) -> VisitResult {
        let span = match reference {
            SeeReference::Code { reference, text } => {
                let text = self.nested(text.as_ref())?;
                code_reference_span(self.resolver, reference, text)
            }
            SeeReference::Url { link, text } => {
                let text = self.nested(text.as_ref())?;
                url_reference_span(link, text)
            }
        };
        self.push(span);
        Ok(())
    }

    fn visit_bullet_list(&mut self, _list: &ItemList) -> VisitResult {
        reject("BulletList")
    }

    fn visit_number_list(&mut self, _list: &ItemList) -> VisitResult {
        reject("NumberList")
    }

    fn visit_table(&mut self, _table: &Table) -> VisitResult {
        reject("Table")
    }

    fn visit_list_item(&mut self, _item: &ListItem) -> VisitResult {
        reject("ListItem")
    }

    fn visit_table_row(&mut self, _row: &TableRow) -> VisitResult {
        reject("TableRow")
    }

    fn visit_styled(&mut self, style: TextStyle, text: &str) -> VisitResult {
        if !text.is_empty() {
            self.push(styled_span(style, text));
        }
        Ok(())
    }

    fn visit_line_break(&mut self) -> VisitResult {
        Ok(())
    }

    fn visit_unrecognized(&mut self, node: &RawNode) -> VisitResult {
        for span in raw_node_spans(node) {
            self.push(span);
        }
        Ok(())
    }
}

pub(crate) fn styled_span(style: TextStyle, text: &str) -> MdSpan {
    let content = vec![MdSpan::text(text)];
    match style {
        TextStyle::Emphasis | TextStyle::Idiomatic => MdSpan::Emphasis(content),
        TextStyle::Bold | TextStyle::Strong => MdSpan::Strong(content),
    }
}
