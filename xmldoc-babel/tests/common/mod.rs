//! Shared helpers for the integration tests.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};
use xmldoc_babel::{xml_to_markdown, MarkdownOptions};

/// Wraps member elements into a complete documentation file for assembly `Asm`.
pub fn doc(members: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<doc>
    <assembly>
        <name>Asm</name>
    </assembly>
    <members>
{members}
    </members>
</doc>"#
    )
}

/// Converts member elements to Markdown with default options.
pub fn markdown(members: &str) -> String {
    xml_to_markdown(&doc(members), &MarkdownOptions::default()).unwrap()
}

/// Parses Markdown back into a comrak tree, tables enabled.
pub fn reparse<'a>(md: &str, arena: &'a Arena<AstNode<'a>>) -> &'a AstNode<'a> {
    let mut options = Options::default();
    options.extension.table = true;
    parse_document(arena, md, &options)
}

/// Names of every node below `root`, depth first.
pub fn node_names<'a>(root: &'a AstNode<'a>) -> Vec<&'static str> {
    root.descendants()
        .map(|node| match node.data.borrow().value {
            NodeValue::Document => "Document",
            NodeValue::Paragraph => "Paragraph",
            NodeValue::Heading(_) => "Heading",
            NodeValue::List(_) => "List",
            NodeValue::Item(_) => "Item",
            NodeValue::CodeBlock(_) => "CodeBlock",
            NodeValue::Table(_) => "Table",
            NodeValue::TableRow(_) => "TableRow",
            NodeValue::TableCell => "TableCell",
            NodeValue::Strong => "Strong",
            NodeValue::Emph => "Emph",
            NodeValue::Code(_) => "Code",
            NodeValue::Link(_) => "Link",
            NodeValue::LineBreak => "LineBreak",
            NodeValue::Text(_) => "Text",
            _ => "Other",
        })
        .collect()
}
