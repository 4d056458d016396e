//! Depth-first traversal of the documentation tree.
//!
//! Every `visit_*` method defaults to the matching `walk_*` function, which visits the
//! node's children in document order. A renderer overrides the hooks it cares about and
//! calls back into `walk_*` to keep descending.
//!
//! Member section hooks are always called, with `None` or an empty slice when the
//! member has no such section, so an override can decide whether to emit structure
//! (a heading, say) without re-implementing the member walk.

use crate::error::RenderError;
use crate::model::{
    CodeBlock, DocumentationFile, ExceptionSection, ItemList, List, ListItem, Member,
    MemberDetails, NamedSection, RawNode, Section, SeeAlso, SeeReference, Table, TableRow,
    TextBlock, TextElement, TextStyle,
};

pub type VisitResult = Result<(), RenderError>;

pub trait Visitor {
    fn visit_file(&mut self, file: &DocumentationFile) -> VisitResult {
        walk_file(self, file)
    }

    fn visit_member(&mut self, member: &Member) -> VisitResult {
        walk_member(self, member)
    }

    // Member sections

    fn visit_summary(&mut self, section: Option<&Section>) -> VisitResult {
        walk_section(self, section)
    }

    fn visit_type_parameters(&mut self, entries: &[NamedSection]) -> VisitResult {
        for entry in entries {
            self.visit_type_parameter(entry)?;
        }
        Ok(())
    }

    fn visit_parameters(&mut self, entries: &[NamedSection]) -> VisitResult {
        for entry in entries {
            self.visit_parameter(entry)?;
        }
        Ok(())
    }

    fn visit_returns(&mut self, section: Option<&Section>) -> VisitResult {
        walk_section(self, section)
    }

    fn visit_value(&mut self, section: Option<&Section>) -> VisitResult {
        walk_section(self, section)
    }

    fn visit_exceptions(&mut self, entries: &[ExceptionSection]) -> VisitResult {
        for entry in entries {
            self.visit_exception(entry)?;
        }
        Ok(())
    }

    fn visit_remarks(&mut self, section: Option<&Section>) -> VisitResult {
        walk_section(self, section)
    }

    fn visit_example(&mut self, section: Option<&Section>) -> VisitResult {
        walk_section(self, section)
    }

    fn visit_see_also(&mut self, entries: &[SeeAlso]) -> VisitResult {
        for entry in entries {
            self.visit_see_also_entry(entry)?;
        }
        Ok(())
    }

    fn visit_unrecognized_children(&mut self, nodes: &[RawNode]) -> VisitResult {
        for node in nodes {
            self.visit_unrecognized(node)?;
        }
        Ok(())
    }

    // Section entries

    fn visit_type_parameter(&mut self, entry: &NamedSection) -> VisitResult {
        walk_optional_text_block(self, entry.text.as_ref())
    }

    fn visit_parameter(&mut self, entry: &NamedSection) -> VisitResult {
        walk_optional_text_block(self, entry.text.as_ref())
    }

    fn visit_exception(&mut self, entry: &ExceptionSection) -> VisitResult {
        walk_optional_text_block(self, entry.text.as_ref())
    }

    fn visit_see_also_entry(&mut self, entry: &SeeAlso) -> VisitResult {
        match entry {
            SeeAlso::Code { text, .. } | SeeAlso::Url { text, .. } => {
                walk_optional_text_block(self, text.as_ref())
            }
        }
    }

    // Text content

    fn visit_text_block(&mut self, block: &TextBlock) -> VisitResult {
        walk_text_block(self, block)
    }

    fn visit_text_element(&mut self, element: &TextElement) -> VisitResult {
        walk_text_element(self, element)
    }

    fn visit_text(&mut self, _text: &str) -> VisitResult {
        Ok(())
    }

    fn visit_paragraph(&mut self, content: Option<&TextBlock>) -> VisitResult {
        walk_optional_text_block(self, content)
    }

    fn visit_inline_code(&mut self, _code: &str) -> VisitResult {
        Ok(())
    }

    fn visit_code_block(&mut self, _code: &CodeBlock) -> VisitResult {
        Ok(())
    }

    fn visit_parameter_ref(&mut self, _name: &str) -> VisitResult {
        Ok(())
    }

    fn visit_type_parameter_ref(&mut self, _name: &str) -> VisitResult {
        Ok(())
    }

    fn visit_see(&mut self, reference: &SeeReference) -> VisitResult {
        match reference {
            SeeReference::Code { text, .. } | SeeReference::Url { text, .. } => {
                walk_optional_text_block(self, text.as_ref())
            }
        }
    }

    fn visit_list(&mut self, list: &List) -> VisitResult {
        walk_list(self, list)
    }

    fn visit_bullet_list(&mut self, list: &ItemList) -> VisitResult {
        walk_item_list(self, list)
    }

    fn visit_number_list(&mut self, list: &ItemList) -> VisitResult {
        walk_item_list(self, list)
    }

    fn visit_table(&mut self, table: &Table) -> VisitResult {
        walk_table(self, table)
    }

    fn visit_list_item(&mut self, item: &ListItem) -> VisitResult {
        walk_list_item(self, item)
    }

    fn visit_table_row(&mut self, row: &TableRow) -> VisitResult {
        walk_table_row(self, row)
    }

    fn visit_styled(&mut self, _style: TextStyle, _text: &str) -> VisitResult {
        Ok(())
    }

    fn visit_line_break(&mut self) -> VisitResult {
        Ok(())
    }

    fn visit_unrecognized(&mut self, node: &RawNode) -> VisitResult {
        walk_raw_node(self, node)
    }
}

pub fn walk_file<V: Visitor + ?Sized>(visitor: &mut V, file: &DocumentationFile) -> VisitResult {
    for member in &file.members {
        visitor.visit_member(member)?;
    }
    Ok(())
}

pub fn walk_member<V: Visitor + ?Sized>(visitor: &mut V, member: &Member) -> VisitResult {
    let mut type_parameters: &[NamedSection] = &[];
    let mut parameters: &[NamedSection] = &[];
    let mut exceptions: &[ExceptionSection] = &[];
    let mut returns = None;
    let mut value = None;

    match &member.details {
        MemberDetails::Namespace => {}
        MemberDetails::Type {
            type_parameters: tp,
        } => type_parameters = tp,
        MemberDetails::Field { value: v } => value = v.as_ref(),
        MemberDetails::Property {
            value: v,
            parameters: p,
            exceptions: e,
        } => {
            value = v.as_ref();
            parameters = p;
            exceptions = e;
        }
        MemberDetails::Method {
            returns: r,
            parameters: p,
            type_parameters: tp,
            exceptions: e,
        } => {
            returns = r.as_ref();
            parameters = p;
            type_parameters = tp;
            exceptions = e;
        }
        MemberDetails::Event { exceptions: e } => exceptions = e,
    }

    visitor.visit_summary(member.summary.as_ref())?;
    visitor.visit_type_parameters(type_parameters)?;
    visitor.visit_parameters(parameters)?;
    visitor.visit_returns(returns)?;
    visitor.visit_value(value)?;
    visitor.visit_exceptions(exceptions)?;
    visitor.visit_remarks(member.remarks.as_ref())?;
    visitor.visit_example(member.example.as_ref())?;
    visitor.visit_see_also(&member.see_also)?;
    visitor.visit_unrecognized_children(&member.unrecognized)
}

pub fn walk_section<V: Visitor + ?Sized>(visitor: &mut V, section: Option<&Section>) -> VisitResult {
    walk_optional_text_block(visitor, section.and_then(|s| s.text.as_ref()))
}

pub fn walk_optional_text_block<V: Visitor + ?Sized>(
    visitor: &mut V,
    block: Option<&TextBlock>,
) -> VisitResult {
    match block {
        Some(block) => visitor.visit_text_block(block),
        None => Ok(()),
    }
}

pub fn walk_text_block<V: Visitor + ?Sized>(visitor: &mut V, block: &TextBlock) -> VisitResult {
    for element in block {
        visitor.visit_text_element(element)?;
    }
    Ok(())
}

pub fn walk_text_element<V: Visitor + ?Sized>(
    visitor: &mut V,
    element: &TextElement,
) -> VisitResult {
    match element {
        TextElement::Text(text) => visitor.visit_text(text),
        TextElement::Paragraph(content) => visitor.visit_paragraph(content.as_ref()),
        TextElement::InlineCode(code) => visitor.visit_inline_code(code),
        TextElement::CodeBlock(code) => visitor.visit_code_block(code),
        TextElement::ParameterRef(name) => visitor.visit_parameter_ref(name),
        TextElement::TypeParameterRef(name) => visitor.visit_type_parameter_ref(name),
        TextElement::See(reference) => visitor.visit_see(reference),
        TextElement::List(list) => visitor.visit_list(list),
        TextElement::Styled { style, text } => visitor.visit_styled(*style, text),
        TextElement::LineBreak => visitor.visit_line_break(),
        TextElement::Unrecognized(node) => visitor.visit_unrecognized(node),
    }
}

pub fn walk_list<V: Visitor + ?Sized>(visitor: &mut V, list: &List) -> VisitResult {
    match list {
        List::Bullet(items) => visitor.visit_bullet_list(items),
        List::Number(items) => visitor.visit_number_list(items),
        List::Table(table) => visitor.visit_table(table),
    }
}

/// Visits the header (if any) and then each item.
pub fn walk_item_list<V: Visitor + ?Sized>(visitor: &mut V, list: &ItemList) -> VisitResult {
    for item in list.header.iter().chain(&list.items) {
        visitor.visit_list_item(item)?;
    }
    Ok(())
}

pub fn walk_list_item<V: Visitor + ?Sized>(visitor: &mut V, item: &ListItem) -> VisitResult {
    match item {
        ListItem::Simple(content) => visitor.visit_text_block(content),
        ListItem::Definition { term, description } => {
            walk_optional_text_block(visitor, term.as_ref())?;
            walk_optional_text_block(visitor, description.as_ref())
        }
    }
}

pub fn walk_table<V: Visitor + ?Sized>(visitor: &mut V, table: &Table) -> VisitResult {
    for row in table.header.iter().chain(&table.rows) {
        visitor.visit_table_row(row)?;
    }
    Ok(())
}

pub fn walk_table_row<V: Visitor + ?Sized>(visitor: &mut V, row: &TableRow) -> VisitResult {
    for cell in &row.0 {
        visitor.visit_text_block(cell)?;
    }
    Ok(())
}

pub fn walk_raw_node<V: Visitor + ?Sized>(visitor: &mut V, node: &RawNode) -> VisitResult {
    if let RawNode::Element(element) = node {
        for child in &element.children {
            visitor.visit_unrecognized(child)?;
        }
    }
    Ok(())
}
