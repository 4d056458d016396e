//! Documentation tree → Markdown tree.
//!
//!     Two renderers share the [`visit::Visitor`] traversal:
//!
//!     - [`block::BlockRenderer`] produces structural Markdown: headings for the file,
//!       members and sections, paragraphs, lists, tables and code blocks.
//!     - [`span::SpanRenderer`] flattens inline content into one span and rejects
//!       anything that needs a block.
//!
//!     Code references (`cref`) render as code spans. A host that can resolve member ids
//!     into URLs plugs in a [`CodeReferenceResolver`] to turn them into links.

pub mod block;
pub mod paragraph;
pub mod span;
pub mod visit;

use crate::error::RenderError;
use crate::markdown::{MdBlock, MdSpan};
use crate::model::{
    DocumentationFile, ListItem, Member, MemberId, RawNode, TableRow, TextBlock, TextElement,
};
use crate::parser::indent::{get_indentation, trim_prose};
use block::BlockRenderer;
use span::SpanRenderer;
use visit::Visitor;

/// Turns code references into hyperlinks.
pub trait CodeReferenceResolver {
    /// Returns the URL documenting `id`, or `None` to render a plain code span.
    fn resolve_code_reference_link(&self, _id: &MemberId) -> Option<String> {
        None
    }
}

/// The resolver used by default: never produces a link.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCodeLinks;

impl CodeReferenceResolver for NoCodeLinks {}

/// Any node that can be handed to a converter.
#[derive(Debug, Clone, Copy)]
pub enum DocumentationElement<'a> {
    File(&'a DocumentationFile),
    Member(&'a Member),
    TextBlock(&'a TextBlock),
    Text(&'a TextElement),
    ListItem(&'a ListItem),
    TableRow(&'a TableRow),
}

impl<'a> From<&'a DocumentationFile> for DocumentationElement<'a> {
    fn from(file: &'a DocumentationFile) -> Self {
        DocumentationElement::File(file)
    }
}

impl<'a> From<&'a Member> for DocumentationElement<'a> {
    fn from(member: &'a Member) -> Self {
        DocumentationElement::Member(member)
    }
}

impl<'a> From<&'a TextBlock> for DocumentationElement<'a> {
    fn from(block: &'a TextBlock) -> Self {
        DocumentationElement::TextBlock(block)
    }
}

impl<'a> From<&'a TextElement> for DocumentationElement<'a> {
    fn from(element: &'a TextElement) -> Self {
        DocumentationElement::Text(element)
    }
}

impl<'a> From<&'a ListItem> for DocumentationElement<'a> {
    fn from(item: &'a ListItem) -> Self {
        DocumentationElement::ListItem(item)
    }
}

impl<'a> From<&'a TableRow> for DocumentationElement<'a> {
    fn from(row: &'a TableRow) -> Self {
        DocumentationElement::TableRow(row)
    }
}

fn visit_element<V: Visitor>(visitor: &mut V, element: DocumentationElement) -> visit::VisitResult {
    match element {
        DocumentationElement::File(file) => visitor.visit_file(file),
        DocumentationElement::Member(member) => visitor.visit_member(member),
        DocumentationElement::TextBlock(block) => visitor.visit_text_block(block),
        DocumentationElement::Text(text) => visitor.visit_text_element(text),
        DocumentationElement::ListItem(item) => visitor.visit_list_item(item),
        DocumentationElement::TableRow(row) => visitor.visit_table_row(row),
    }
}

/// Renders `element` as structural Markdown.
pub fn convert_to_block<'a>(
    element: impl Into<DocumentationElement<'a>>,
) -> Result<MdBlock, RenderError> {
    convert_to_block_with_resolver(element, &NoCodeLinks)
}

pub fn convert_to_block_with_resolver<'a>(
    element: impl Into<DocumentationElement<'a>>,
    resolver: &dyn CodeReferenceResolver,
) -> Result<MdBlock, RenderError> {
    let mut renderer = BlockRenderer::new(resolver);
    visit_element(&mut renderer, element.into())?;
    Ok(renderer.finish())
}

/// Renders `element` as a single inline span.
///
/// Fails with [`RenderError::BlockInInlineContext`] when the element holds block-only
/// content such as a code block, a list or a table.
pub fn convert_to_span<'a>(
    element: impl Into<DocumentationElement<'a>>,
) -> Result<MdSpan, RenderError> {
    convert_to_span_with_resolver(element, &NoCodeLinks)
}

pub fn convert_to_span_with_resolver<'a>(
    element: impl Into<DocumentationElement<'a>>,
    resolver: &dyn CodeReferenceResolver,
) -> Result<MdSpan, RenderError> {
    let mut renderer = SpanRenderer::new(resolver);
    visit_element(&mut renderer, element.into())?;
    Ok(renderer.finish())
}

/// A `cref` reference: the explicit text, or a code span of the member name, linked
/// when the resolver knows a URL.
pub(crate) fn code_reference_span(
    resolver: &dyn CodeReferenceResolver,
    reference: &MemberId,
    text: Option<Vec<MdSpan>>,
) -> MdSpan {
    let content = match text {
        Some(spans) if !spans.is_empty() => spans,
        _ => vec![MdSpan::Code(reference.name().to_string())],
    };
    match resolver.resolve_code_reference_link(reference) {
        Some(url) => MdSpan::Link { url, content },
        None => MdSpan::from_spans(content),
    }
}

/// An `href` reference: a link whose text defaults to the URL itself.
pub(crate) fn url_reference_span(link: &str, text: Option<Vec<MdSpan>>) -> MdSpan {
    let content = match text {
        Some(spans) if !spans.is_empty() => spans,
        _ => vec![MdSpan::text(link)],
    };
    MdSpan::Link {
        url: link.to_string(),
        content,
    }
}

/// Unrecognized XML as text: opening tag, content, closing tag.
pub(crate) fn raw_node_spans(node: &RawNode) -> Vec<MdSpan> {
    let mut spans = Vec::new();
    collect_raw(node, &mut spans);
    spans
}

fn collect_raw(node: &RawNode, spans: &mut Vec<MdSpan>) {
    match node {
        RawNode::Text(text) => {
            let text = trim_prose(text, get_indentation(text));
            if !text.is_empty() {
                spans.push(MdSpan::Text(text));
            }
        }
        RawNode::Element(element) => {
            spans.push(MdSpan::Text(element.opening_tag()));
            for child in &element.children {
                collect_raw(child, spans);
            }
            if let Some(closing) = element.closing_tag() {
                spans.push(MdSpan::Text(closing));
            }
        }
    }
}
