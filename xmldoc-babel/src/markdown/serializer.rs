//! Markdown serialization.
//!
//! Pipeline: Md tree → Comrak AST → Markdown string. We never print Markdown by hand;
//! comrak owns escaping, list markers, table padding and code fences.

use super::nodes::{MdBlock, MdListItem, MdSpan};
use super::{ListStyle, MarkdownOptions};
use crate::error::RenderError;
use comrak::nodes::{
    Ast, AstNode, ListDelimType, ListType, NodeCode, NodeCodeBlock, NodeHeading, NodeLink,
    NodeList, NodeTable, NodeValue, TableAlignment,
};
use comrak::{format_commonmark, Arena, ListStyleType, Options};
use std::cell::RefCell;

/// Serializes a block tree to Markdown text.
pub fn render_block(block: &MdBlock, options: &MarkdownOptions) -> Result<String, RenderError> {
    let arena = Arena::new();
    let root = new_node(&arena, NodeValue::Document);
    append_block(&arena, root, block);
    let markdown = format(root, options)?;
    Ok(tidy_lists(&markdown))
}

/// Serializes a span on its own, without the trailing newline of a paragraph.
pub fn render_span(span: &MdSpan, options: &MarkdownOptions) -> Result<String, RenderError> {
    let arena = Arena::new();
    let root = new_node(&arena, NodeValue::Document);
    let paragraph = new_node(&arena, NodeValue::Paragraph);
    root.append(paragraph);
    append_span(&arena, paragraph, span, Inline::Flow);
    let markdown = format(root, options)?;
    Ok(markdown.trim_end_matches('\n').to_string())
}

fn comrak_options(options: &MarkdownOptions) -> Options<'static> {
    let mut comrak = Options::default();
    comrak.extension.table = true;
    comrak.extension.strikethrough = true;
    comrak.render.width = options.width;
    comrak.render.prefer_fenced = true;
    comrak.render.list_style = match options.list_style {
        ListStyle::Dash => ListStyleType::Dash,
        ListStyle::Plus => ListStyleType::Plus,
        ListStyle::Star => ListStyleType::Star,
    };
    comrak
}

fn format<'a>(root: &'a AstNode<'a>, options: &MarkdownOptions) -> Result<String, RenderError> {
    let mut output = Vec::new();
    format_commonmark(root, &comrak_options(options), &mut output).map_err(|e| {
        RenderError::Serialization(format!("Comrak serialization failed: {e}"))
    })?;
    String::from_utf8(output)
        .map_err(|e| RenderError::Serialization(format!("UTF-8 conversion failed: {e}")))
}

fn new_node<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

/// Where spans are appended. Table cells cannot hold hard line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inline {
    Flow,
    Cell,
}

fn list_node(ordered: bool, tight: bool) -> NodeList {
    NodeList {
        list_type: if ordered {
            ListType::Ordered
        } else {
            ListType::Bullet
        },
        marker_offset: 0,
        padding: 0,
        start: 1,
        delimiter: ListDelimType::Period,
        bullet_char: b'-',
        tight,
    }
}

/// A tight list writes an item's blocks without blank lines, so a paragraph or
/// table after the first block would be read back as a continuation of it.
fn is_tight(items: &[MdListItem]) -> bool {
    items.iter().all(|item| {
        let mut blocks = Vec::new();
        flatten(&item.blocks, &mut blocks);
        blocks
            .iter()
            .skip(1)
            .all(|block| !matches!(block, MdBlock::Paragraph(_) | MdBlock::Table { .. }))
    })
}

fn flatten<'b>(blocks: &'b [MdBlock], out: &mut Vec<&'b MdBlock>) {
    for block in blocks {
        match block {
            MdBlock::Container(children) => flatten(children, out),
            other => out.push(other),
        }
    }
}

fn append_block<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, block: &MdBlock) {
    match block {
        MdBlock::Container(blocks) => {
            for child in blocks {
                append_block(arena, parent, child);
            }
        }
        MdBlock::Heading { level, content } => {
            let heading = new_node(
                arena,
                NodeValue::Heading(NodeHeading {
                    level: (*level).clamp(1, 6),
                    setext: false,
                }),
            );
            parent.append(heading);
            append_spans(arena, heading, content, Inline::Flow);
        }
        MdBlock::Paragraph(content) => {
            let paragraph = new_node(arena, NodeValue::Paragraph);
            parent.append(paragraph);
            append_spans(arena, paragraph, content, Inline::Flow);
        }
        MdBlock::CodeBlock { language, literal } => {
            let mut literal = literal.clone();
            if !literal.ends_with('\n') {
                literal.push('\n');
            }
            parent.append(new_node(
                arena,
                NodeValue::CodeBlock(NodeCodeBlock {
                    fenced: true,
                    fence_char: b'`',
                    fence_length: 3,
                    fence_offset: 0,
                    info: language.clone().unwrap_or_default(),
                    literal,
                }),
            ));
        }
        MdBlock::List { ordered, items } => {
            let node = list_node(*ordered, is_tight(items));
            let list = new_node(arena, NodeValue::List(node));
            parent.append(list);
            for item in items {
                append_item(arena, list, node, item);
            }
        }
        MdBlock::Table { header, rows } => append_table(arena, parent, header, rows),
    }
}

fn append_item<'a>(
    arena: &'a Arena<AstNode<'a>>,
    list: &'a AstNode<'a>,
    list_value: NodeList,
    item: &MdListItem,
) {
    let node = new_node(arena, NodeValue::Item(list_value));
    list.append(node);
    for block in &item.blocks {
        append_block(arena, node, block);
    }
}

fn append_table<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    header: &[Vec<MdSpan>],
    rows: &[Vec<Vec<MdSpan>>],
) {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
        .max(1);

    let num_nonempty_cells = header
        .iter()
        .chain(rows.iter().flatten())
        .filter(|cell| !cell.is_empty())
        .count();

    let table = new_node(
        arena,
        NodeValue::Table(NodeTable {
            alignments: vec![TableAlignment::None; columns],
            num_columns: columns,
            num_rows: rows.len() + 1,
            num_nonempty_cells,
        }),
    );
    parent.append(table);

    append_row(arena, table, true, header, columns);
    for row in rows {
        append_row(arena, table, false, row, columns);
    }
}

fn append_row<'a>(
    arena: &'a Arena<AstNode<'a>>,
    table: &'a AstNode<'a>,
    header: bool,
    cells: &[Vec<MdSpan>],
    columns: usize,
) {
    let row = new_node(arena, NodeValue::TableRow(header));
    table.append(row);
    for index in 0..columns {
        let cell = new_node(arena, NodeValue::TableCell);
        row.append(cell);
        if let Some(content) = cells.get(index) {
            append_spans(arena, cell, content, Inline::Cell);
        }
    }
}

fn append_spans<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    spans: &[MdSpan],
    inline: Inline,
) {
    for span in spans {
        append_span(arena, parent, span, inline);
    }
}

fn append_span<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    span: &MdSpan,
    inline: Inline,
) {
    match span {
        MdSpan::Text(text) => {
            parent.append(new_node(arena, NodeValue::Text(text.replace('\n', " "))));
        }
        MdSpan::Code(code) => {
            parent.append(new_node(
                arena,
                NodeValue::Code(NodeCode {
                    num_backticks: 1,
                    literal: code.clone(),
                }),
            ));
        }
        MdSpan::Strong(children) => {
            let strong = new_node(arena, NodeValue::Strong);
            parent.append(strong);
            append_spans(arena, strong, children, inline);
        }
        MdSpan::Emphasis(children) => {
            let emph = new_node(arena, NodeValue::Emph);
            parent.append(emph);
            append_spans(arena, emph, children, inline);
        }
        MdSpan::Link { url, content } => {
            let link = new_node(
                arena,
                NodeValue::Link(NodeLink {
                    url: url.clone(),
                    title: String::new(),
                }),
            );
            parent.append(link);
            append_spans(arena, link, content, inline);
        }
        MdSpan::LineBreak => match inline {
            Inline::Flow => parent.append(new_node(arena, NodeValue::LineBreak)),
            Inline::Cell => parent.append(new_node(arena, NodeValue::Text(" ".into()))),
        },
        MdSpan::Group(children) => append_spans(arena, parent, children, inline),
    }
}

const END_LIST: &str = "<!-- end list -->";

/// Cleans up comrak's list output.
///
/// Ordered markers are written as `1. ` instead of comrak's padded `1.  `. The
/// `<!-- end list -->` separator comrak puts after a list is dropped unless the
/// next block is a list of the same kind, which would otherwise merge into it.
/// Fenced code is copied untouched.
fn tidy_lists(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut out = Vec::with_capacity(lines.len());
    let mut fence: Option<(char, usize)> = None;
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        index += 1;

        if let Some(open) = fence {
            if closes_fence(line, open) {
                fence = None;
            }
            out.push(line.to_string());
            continue;
        }
        if let Some(open) = fence_run(line) {
            fence = Some(open);
            out.push(line.to_string());
            continue;
        }
        if line.trim() == END_LIST {
            if separates_same_kind(&lines, index - 1) {
                out.push(line.to_string());
            } else if lines.get(index).is_some_and(|next| next.trim().is_empty()) {
                index += 1;
            }
            continue;
        }
        out.push(narrow_ordered_marker(line));
    }

    out.join("\n")
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn fence_run(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start();
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    (len >= 3).then_some((ch, len))
}

fn closes_fence(line: &str, (ch, len): (char, usize)) -> bool {
    match fence_run(line) {
        Some((found, found_len)) => {
            found == ch && found_len >= len && line.trim().chars().all(|c| c == ch)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Bullet,
    Ordered,
}

/// The list marker at the start of `text` (already stripped of indentation) and its width.
fn list_marker(text: &str) -> Option<(MarkerKind, usize)> {
    let mut chars = text.chars();
    match chars.next()? {
        '-' | '+' | '*' => chars
            .next()
            .filter(|c| *c == ' ')
            .map(|_| (MarkerKind::Bullet, 1)),
        c if c.is_ascii_digit() => {
            let digits = text.chars().take_while(char::is_ascii_digit).count();
            let rest = &text[digits..];
            let delimited = rest.starts_with(". ") || rest.starts_with(") ");
            (digits <= 9 && delimited).then_some((MarkerKind::Ordered, digits + 1))
        }
        _ => None,
    }
}

fn marker_kind_at(line: &str, indent: usize) -> Option<MarkerKind> {
    if indent_of(line) != indent {
        return None;
    }
    list_marker(line.trim_start_matches(' ')).map(|(kind, _)| kind)
}

fn separates_same_kind(lines: &[&str], at: usize) -> bool {
    let indent = indent_of(lines[at]);
    let before = lines[..at]
        .iter()
        .rev()
        .find_map(|line| marker_kind_at(line, indent));
    let after = lines[at + 1..]
        .iter()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| marker_kind_at(line, indent));
    before.is_some() && before == after
}

fn narrow_ordered_marker(line: &str) -> String {
    let indent = indent_of(line);
    let text = &line[indent..];
    match list_marker(text) {
        Some((MarkerKind::Ordered, width)) if text[width..].starts_with("  ") => {
            let content = &text[width + 2..];
            if content.starts_with(' ') || content.is_empty() {
                return line.to_string();
            }
            format!("{}{} {}", &line[..indent], &text[..width], content)
        }
        _ => line.to_string(),
    }
}
