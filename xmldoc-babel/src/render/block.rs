//! Structural (block) rendering.
//!
//! The renderer keeps a stack of open containers. The root container is pushed on
//! creation; lists push a list frame and every list item pushes its own frame, so
//! nested lists end up inside the item that contains them.
//!
//! Inline content goes into the implicit paragraph held in [`ParagraphState`]. Any
//! block construct closes that paragraph first, which keeps text that precedes a list
//! or code block from being merged with what follows it.

use super::paragraph::ParagraphState;
use super::span::{styled_span, SpanRenderer};
use super::visit::{
    walk_file, walk_item_list, walk_member, walk_optional_text_block, walk_section, VisitResult,
    Visitor,
};
use super::{code_reference_span, raw_node_spans, url_reference_span, CodeReferenceResolver};
use crate::error::RenderError;
use crate::markdown::{MdBlock, MdListItem, MdSpan};
use crate::model::{
    CodeBlock, DocumentationFile, ExceptionSection, ItemList, ListItem, Member, MemberKind,
    NamedSection, RawNode, Section, SectionKind, SeeAlso, SeeReference, Table, TableRow,
    TextBlock, TextStyle,
};
use std::mem;

/// An open container on the renderer stack.
#[derive(Debug)]
enum Frame {
    Blocks(Vec<MdBlock>),
    List {
        ordered: bool,
        items: Vec<MdListItem>,
    },
    Item(Vec<MdBlock>),
}

impl Frame {
    fn into_block(self) -> MdBlock {
        match self {
            Frame::Blocks(blocks) | Frame::Item(blocks) => MdBlock::Container(blocks),
            Frame::List { ordered, items } => MdBlock::List { ordered, items },
        }
    }
}

pub struct BlockRenderer<'r> {
    resolver: &'r dyn CodeReferenceResolver,
    stack: Vec<Frame>,
    paragraph: ParagraphState,
}

impl<'r> BlockRenderer<'r> {
    pub fn new(resolver: &'r dyn CodeReferenceResolver) -> Self {
        BlockRenderer {
            resolver,
            stack: vec![Frame::Blocks(Vec::new())],
            paragraph: ParagraphState::Idle,
        }
    }

    /// Closes everything still open and returns the root container.
    pub fn finish(mut self) -> MdBlock {
        self.close_paragraph();
        while self.stack.len() > 1 {
            self.pop_frame();
        }
        self.stack
            .pop()
            .map_or(MdBlock::Container(Vec::new()), Frame::into_block)
    }

    fn push_span(&mut self, span: MdSpan) {
        self.paragraph = mem::take(&mut self.paragraph).push(span);
    }

    fn close_paragraph(&mut self) {
        let (state, block) = mem::take(&mut self.paragraph).close();
        self.paragraph = state;
        if let Some(block) = block {
            self.attach(block);
        }
    }

    fn append_block(&mut self, block: MdBlock) {
        self.close_paragraph();
        self.attach(block);
    }

    fn attach(&mut self, block: MdBlock) {
        match self.stack.last_mut() {
            Some(Frame::Blocks(blocks) | Frame::Item(blocks)) => blocks.push(block),
            Some(Frame::List { items, .. }) => items.push(MdListItem {
                blocks: vec![block],
            }),
            None => self.stack.push(Frame::Blocks(vec![block])),
        }
    }

    fn pop_frame(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Item(blocks) => match self.stack.last_mut() {
                Some(Frame::List { items, .. }) => items.push(MdListItem { blocks }),
                // A bare item outside of any list contributes its content directly
                Some(Frame::Blocks(parent) | Frame::Item(parent)) => parent.extend(blocks),
                None => self.stack.push(Frame::Blocks(blocks)),
            },
            other => self.attach(other.into_block()),
        }
    }

    fn heading(&mut self, level: u8, text: impl Into<String>) {
        self.append_block(MdBlock::Heading {
            level,
            content: vec![MdSpan::text(text)],
        });
    }

    fn inline(&self, block: &TextBlock) -> Result<Vec<MdSpan>, RenderError> {
        SpanRenderer::new(self.resolver).spans(block)
    }

    fn inline_opt(&self, block: Option<&TextBlock>) -> Result<Option<Vec<MdSpan>>, RenderError> {
        block.map(|block| self.inline(block)).transpose()
    }

    fn cells(&self, row: &TableRow) -> Result<Vec<Vec<MdSpan>>, RenderError> {
        row.0.iter().map(|cell| self.inline(cell)).collect()
    }

    /// A single-valued section: heading plus body, or nothing when absent.
    ///
    /// A self-closing element such as `<summary/>` parses to a section without text
    /// and is treated as absent.
    fn section(&mut self, kind: SectionKind, section: Option<&Section>) -> VisitResult {
        let Some(section) = section.filter(|section| section.text.is_some()) else {
            return Ok(());
        };
        self.heading(3, kind.title());
        walk_section(self, Some(section))?;
        self.close_paragraph();
        Ok(())
    }

    /// A parameter-like entry: the label in its own paragraph, then the description.
    fn labelled_entry(&mut self, label: MdSpan, text: Option<&TextBlock>) -> VisitResult {
        self.append_block(MdBlock::Paragraph(vec![label]));
        walk_optional_text_block(self, text)?;
        self.close_paragraph();
        Ok(())
    }

    fn item_list(&mut self, ordered: bool, list: &ItemList) -> VisitResult {
        self.close_paragraph();
        self.stack.push(Frame::List {
            ordered,
            items: Vec::new(),
        });
        walk_item_list(self, list)?;
        self.pop_frame();
        Ok(())
    }
}

fn heading_suffix(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Namespace => " Namespace",
        MemberKind::Type => "",
        MemberKind::Field => " Field",
        MemberKind::Property => " Property",
        MemberKind::Method => " Method",
        MemberKind::Event => " Event",
    }
}

impl Visitor for BlockRenderer<'_> {
    fn visit_file(&mut self, file: &DocumentationFile) -> VisitResult {
        self.heading(1, file.assembly_name.as_str());
        walk_file(self, file)
    }

    fn visit_member(&mut self, member: &Member) -> VisitResult {
        log::trace!("rendering member {}", member.id);
        self.heading(
            2,
            format!("{}{}", member.id.name(), heading_suffix(member.kind())),
        );
        walk_member(self, member)?;
        self.close_paragraph();
        Ok(())
    }

    fn visit_summary(&mut self, section: Option<&Section>) -> VisitResult {
        self.section(SectionKind::Summary, section)
    }

    fn visit_type_parameters(&mut self, entries: &[NamedSection]) -> VisitResult {
        if entries.is_empty() {
            return Ok(());
        }
        self.heading(3, SectionKind::TypeParameters.title());
        for entry in entries {
            self.visit_type_parameter(entry)?;
        }
        Ok(())
    }

    fn visit_parameters(&mut self, entries: &[NamedSection]) -> VisitResult {
        if entries.is_empty() {
            return Ok(());
        }
        self.heading(3, SectionKind::Parameters.title());
        for entry in entries {
            self.visit_parameter(entry)?;
        }
        Ok(())
    }

    fn visit_returns(&mut self, section: Option<&Section>) -> VisitResult {
        self.section(SectionKind::Returns, section)
    }

    fn visit_value(&mut self, section: Option<&Section>) -> VisitResult {
        self.section(SectionKind::Value, section)
    }

    fn visit_exceptions(&mut self, entries: &[ExceptionSection]) -> VisitResult {
        if entries.is_empty() {
            return Ok(());
        }
        self.heading(3, SectionKind::Exceptions.title());
        for entry in entries {
            self.visit_exception(entry)?;
        }
        Ok(())
    }

    fn visit_remarks(&mut self, section: Option<&Section>) -> VisitResult {
        self.section(SectionKind::Remarks, section)
    }

    fn visit_example(&mut self, section: Option<&Section>) -> VisitResult {
        self.section(SectionKind::Example, section)
    }

    fn visit_see_also(&mut self, entries: &[SeeAlso]) -> VisitResult {
        if entries.is_empty() {
            return Ok(());
        }
        self.heading(3, SectionKind::SeeAlso.title());
        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                self.push_span(MdSpan::LineBreak);
            }
            self.visit_see_also_entry(entry)?;
        }
        self.close_paragraph();
        Ok(())
    }

    fn visit_unrecognized_children(&mut self, nodes: &[RawNode]) -> VisitResult {
        for node in nodes {
            self.close_paragraph();
            self.visit_unrecognized(node)?;
        }
        self.close_paragraph();
        Ok(())
    }

    fn visit_type_parameter(&mut self, entry: &NamedSection) -> VisitResult {
        self.labelled_entry(MdSpan::Code(entry.name.clone()), entry.text.as_ref())
    }

    fn visit_parameter(&mut self, entry: &NamedSection) -> VisitResult {
        self.labelled_entry(MdSpan::Code(entry.name.clone()), entry.text.as_ref())
    }

    fn visit_exception(&mut self, entry: &ExceptionSection) -> VisitResult {
        let label = code_reference_span(self.resolver, &entry.reference, None);
        self.labelled_entry(label, entry.text.as_ref())
    }

    fn visit_see_also_entry(&mut self, entry: &SeeAlso) -> VisitResult {
        let span = match entry {
            SeeAlso::Code { reference, text } => {
                code_reference_span(self.resolver, reference, self.inline_opt(text.as_ref())?)
            }
            SeeAlso::Url { link, text } => url_reference_span(link, self.inline_opt(text.as_ref())?),
        };
        self.push_span(span);
        Ok(())
    }

    fn visit_text(&mut self, text: &str) -> VisitResult {
        self.push_span(MdSpan::text(text));
        Ok(())
    }

    fn visit_paragraph(&mut self, content: Option<&TextBlock>) -> VisitResult {
        self.close_paragraph();
        walk_optional_text_block(self, content)?;
        self.close_paragraph();
        Ok(())
    }

    fn visit_inline_code(&mut self, code: &str) -> VisitResult {
        if !code.is_empty() {
            self.push_span(MdSpan::Code(code.to_string()));
        }
        Ok(())
    }

    fn visit_code_block(&mut self, code: &CodeBlock) -> VisitResult {
        self.append_block(MdBlock::CodeBlock {
            language: code.language.clone(),
            literal: code.content.clone(),
        });
        Ok(())
    }

    fn visit_parameter_ref(&mut self, name: &str) -> VisitResult {
        self.push_span(MdSpan::Code(name.to_string()));
        Ok(())
    }

    fn visit_type_parameter_ref(&mut self, name: &str) -> VisitResult {
        self.push_span(MdSpan::Code(name.to_string()));
        Ok(())
    }

    fn visit_see(&mut self, reference: &SeeReference) -> VisitResult {
        let span = match reference {
            SeeReference::Code { reference, text } => {
                code_reference_span(self.resolver, reference, self.inline_opt(text.as_ref())?)
            }
            SeeReference::Url { link, text } => {
                url_reference_span(link, self.inline_opt(text.as_ref())?)
            }
        };
        self.push_span(span);
        Ok(())
    }

    fn visit_bullet_list(&mut self, list: &ItemList) -> VisitResult {
        self.item_list(false, list)
    }

    fn visit_number_list(&mut self, list: &ItemList) -> VisitResult {
        self.item_list(true, list)
    }

    fn visit_table(&mut self, table: &Table) -> VisitResult {
        let header = match &table.header {
            Some(row) => self.cells(row)?,
            None => vec![Vec::new(); table.column_count()],
        };
        let rows = table
            .rows
            .iter()
            .map(|row| self.cells(row))
            .collect::<Result<Vec<_>, _>>()?;
        self.append_block(MdBlock::Table { header, rows });
        Ok(())
    }

    fn visit_list_item(&mut self, item: &ListItem) -> VisitResult {
        self.close_paragraph();
        self.stack.push(Frame::Item(Vec::new()));
        match item {
            ListItem::Simple(content) => self.visit_text_block(content)?,
            ListItem::Definition { term, description } => {
                let term = self.inline_opt(term.as_ref())?.unwrap_or_default();
                if !term.is_empty() {
                    self.push_span(MdSpan::Strong(term));
                    if description.is_some() {
                        self.push_span(MdSpan::text(": "));
                    }
                }
                walk_optional_text_block(self, description.as_ref())?;
            }
        }
        self.close_paragraph();
        self.pop_frame();
        Ok(())
    }

    /// Only reached for a row converted on its own; tables build their rows directly.
    fn visit_table_row(&mut self, row: &TableRow) -> VisitResult {
        let cells = self.cells(row)?;
        self.append_block(MdBlock::Table {
            header: vec![Vec::new(); cells.len()],
            rows: vec![cells],
        });
        Ok(())
    }

    fn visit_styled(&mut self, style: TextStyle, text: &str) -> VisitResult {
        if !text.is_empty() {
            self.push_span(styled_span(style, text));
        }
        Ok(())
    }

    fn visit_line_break(&mut self) -> VisitResult {
        self.push_span(MdSpan::LineBreak);
        Ok(())
    }

    fn visit_unrecognized(&mut self, node: &RawNode) -> VisitResult {
        for span in raw_node_spans(node) {
            self.push_span(span);
        }
        Ok(())
    }
}
