//! Classification of mixed text content into [`TextBlock`]s.

use super::indent::{get_indentation, trim_code, trim_prose};
use super::{child_element, descendant_text, raw_node, required_attribute, schema_error};
use crate::error::{Position, SchemaError, SchemaErrorKind};
use crate::model::{
    CodeBlock, ItemList, List, ListItem, MemberId, SeeReference, Table, TableRow, TextBlock,
    TextElement, TextStyle,
};
use roxmltree::{Node, NodeType};

/// Parses the content of a text-bearing element, or `None` when it has no child
/// nodes at all.
pub(crate) fn parse_optional_text_block(node: Node) -> Result<Option<TextBlock>, SchemaError> {
    if node.has_children() {
        parse_text_block(node).map(Some)
    } else {
        Ok(None)
    }
}

pub(crate) fn parse_text_block(node: Node) -> Result<TextBlock, SchemaError> {
    // Shared by every text child of `node`. Whitespace-only text between elements
    // carries no indentation, so the basis comes from the first text with content.
    let mut basis: Option<usize> = None;
    let mut elements = Vec::new();

    for child in node.children() {
        match child.node_type() {
            NodeType::Text => {
                let text = child.text().unwrap_or_default();
                if text.trim().is_empty() {
                    continue;
                }
                let indent = *basis.get_or_insert_with(|| get_indentation(text));
                let mut prose = trim_prose(text, indent);
                // A line break next to an element still separates words
                if child.prev_sibling().is_some()
                    && breaks_line(&text[..text.len() - text.trim_start().len()])
                    && !prose.starts_with(char::is_whitespace)
                {
                    prose.insert(0, ' ');
                }
                if child.next_sibling().is_some()
                    && breaks_line(&text[text.trim_end().len()..])
                    && !prose.ends_with(char::is_whitespace)
                {
                    prose.push(' ');
                }
                elements.push(TextElement::Text(prose));
            }
            NodeType::Element => elements.push(parse_text_element(child)?),
            _ => {}
        }
    }

    Ok(TextBlock::new(elements))
}

fn breaks_line(whitespace: &str) -> bool {
    whitespace.contains('\n')
}

fn parse_text_element(node: Node) -> Result<TextElement, SchemaError> {
    let element = match node.tag_name().name() {
        "para" => TextElement::Paragraph(parse_optional_text_block(node)?),
        "paramref" => TextElement::ParameterRef(required_attribute(node, "name")?.to_string()),
        "typeparamref" => {
            TextElement::TypeParameterRef(required_attribute(node, "name")?.to_string())
        }
        "code" => TextElement::CodeBlock(parse_code_block(node)),
        "c" => TextElement::InlineCode(inline_text(node)),
        "see" => TextElement::See(parse_see(node)?),
        "list" => TextElement::List(parse_list(node)?),
        "em" => styled(node, TextStyle::Emphasis),
        "i" => styled(node, TextStyle::Idiomatic),
        "b" => styled(node, TextStyle::Bold),
        "strong" => styled(node, TextStyle::Strong),
        "br" => TextElement::LineBreak,
        other => {
            log::debug!(
                "keeping unrecognized element <{other}> at {}",
                Position::from(node.document().text_pos_at(node.range().start))
            );
            TextElement::Unrecognized(raw_node(node))
        }
    };
    Ok(element)
}

/// The text below `node`, reflowed as prose against its own indentation.
fn inline_text(node: Node) -> String {
    let text = descendant_text(node);
    trim_prose(&text, get_indentation(&text))
}

fn styled(node: Node, style: TextStyle) -> TextElement {
    TextElement::Styled {
        style,
        text: inline_text(node),
    }
}

fn parse_code_block(node: Node) -> CodeBlock {
    let text = descendant_text(node);
    let language = node
        .attribute("language")
        .or_else(|| node.attribute("lang"))
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string);
    CodeBlock {
        content: trim_code(&text, get_indentation(&text)),
        language,
    }
}

/// Where a `see`/`seealso` element points. `cref` wins when both are present.
pub(crate) enum ReferenceTarget {
    Code(MemberId),
    Url(String),
}

pub(crate) fn reference_target(node: Node) -> Result<ReferenceTarget, SchemaError> {
    if node.attribute("cref").is_some() {
        return code_reference(node, "cref").map(ReferenceTarget::Code);
    }
    if node.attribute("href").is_some() {
        let href = required_attribute(node, "href")?;
        return Ok(ReferenceTarget::Url(href.trim().to_string()));
    }
    Err(schema_error(node, SchemaErrorKind::MissingReference))
}

/// Reads a required attribute holding a member id.
pub(crate) fn code_reference(node: Node, attribute: &str) -> Result<MemberId, SchemaError> {
    let value = required_attribute(node, attribute)?;
    value
        .parse()
        .map_err(|_| schema_error(node, SchemaErrorKind::InvalidCodeReference(value.to_string())))
}

fn parse_see(node: Node) -> Result<SeeReference, SchemaError> {
    let text = parse_optional_text_block(node)?;
    Ok(match reference_target(node)? {
        ReferenceTarget::Code(reference) => SeeReference::Code { reference, text },
        ReferenceTarget::Url(link) => SeeReference::Url { link, text },
    })
}

fn parse_list(node: Node) -> Result<List, SchemaError> {
    let list_type = required_attribute(node, "type")?;
    match list_type.trim().to_ascii_lowercase().as_str() {
        "bullet" => Ok(List::Bullet(parse_item_list(node)?)),
        "number" => Ok(List::Number(parse_item_list(node)?)),
        "table" => Ok(List::Table(parse_table(node)?)),
        _ => Err(schema_error(
            node,
            SchemaErrorKind::UnsupportedListType(list_type.to_string()),
        )),
    }
}

fn parse_item_list(node: Node) -> Result<ItemList, SchemaError> {
    let mut header = None;
    let mut items = Vec::new();
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "listheader" => header = Some(parse_list_item(child)?),
            "item" => items.push(parse_list_item(child)?),
            other => log::debug!("ignoring <{other}> inside <list>"),
        }
    }
    Ok(ItemList { header, items })
}

fn parse_list_item(node: Node) -> Result<ListItem, SchemaError> {
    let term = child_element(node, "term");
    let description = child_element(node, "description");
    if term.is_none() && description.is_none() {
        return Ok(ListItem::Simple(parse_text_block(node)?));
    }
    Ok(ListItem::Definition {
        term: term.map(parse_optional_text_block).transpose()?.flatten(),
        description: description
            .map(parse_optional_text_block)
            .transpose()?
            .flatten(),
    })
}

fn parse_table(node: Node) -> Result<Table, SchemaError> {
    let mut header = None;
    let mut rows = Vec::new();
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "listheader" => header = Some(parse_table_row(child)?),
            "item" => rows.push(parse_table_row(child)?),
            other => log::debug!("ignoring <{other}> inside <list type=\"table\">"),
        }
    }
    Ok(Table { header, rows })
}

fn parse_table_row(node: Node) -> Result<TableRow, SchemaError> {
    node.children()
        .filter(|cell| {
            cell.is_element() && matches!(cell.tag_name().name(), "term" | "description")
        })
        .map(parse_text_block)
        .collect::<Result<Vec<_>, _>>()
        .map(TableRow)
}
