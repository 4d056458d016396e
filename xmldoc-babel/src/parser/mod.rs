//! Documentation XML → documentation tree.
//!
//!     The input is the file a compiler writes next to an assembly:
//!
//!         <doc>
//!           <assembly><name>MyAssembly</name></assembly>
//!           <members>
//!             <member name="T:MyNamespace.MyClass">
//!               <summary>...</summary>
//!             </member>
//!           </members>
//!         </doc>
//!
//!     Parsing is a recursive descent over the roxmltree document. Structural problems
//!     (wrong element names, missing or blank required attributes, unparsable ids) abort
//!     with a [`SchemaError`] pointing at the offending element. Elements the classifier
//!     does not know are never errors: they are kept as raw nodes so nothing authored is
//!     lost.

pub mod indent;
mod members;
mod text;

use crate::error::{ParseError, SchemaError, SchemaErrorKind};
use crate::model::{DocumentationFile, RawElement, RawNode};
use roxmltree::Node;

/// Parses documentation XML source text.
pub fn parse_documentation(source: &str) -> Result<DocumentationFile, ParseError> {
    let doc = roxmltree::Document::parse(source)?;
    Ok(parse_document(&doc)?)
}

/// Builds the documentation tree from an already parsed XML document.
pub fn parse_document(doc: &roxmltree::Document) -> Result<DocumentationFile, SchemaError> {
    let root = doc.root_element();
    expect_name(root, "doc")?;

    let assembly = child_element(root, "assembly")
        .ok_or_else(|| schema_error(root, SchemaErrorKind::MissingElement("assembly".into())))?;
    let name = child_element(assembly, "name")
        .ok_or_else(|| schema_error(assembly, SchemaErrorKind::MissingElement("name".into())))?;
    let assembly_name = descendant_text(name).trim().to_string();
    if assembly_name.is_empty() {
        return Err(schema_error(name, SchemaErrorKind::EmptyElement("name".into())));
    }

    let members = match child_element(root, "members") {
        Some(members) => members
            .children()
            .filter(Node::is_element)
            .map(|member| {
                expect_name(member, "member")?;
                members::parse_member(member)
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    log::debug!(
        "parsed {} members of assembly '{}'",
        members.len(),
        assembly_name
    );

    Ok(DocumentationFile {
        assembly_name,
        members,
    })
}

pub(crate) fn schema_error(node: Node, kind: SchemaErrorKind) -> SchemaError {
    SchemaError {
        element: node.tag_name().name().to_string(),
        position: node.document().text_pos_at(node.range().start).into(),
        kind,
    }
}

fn expect_name(node: Node, expected: &str) -> Result<(), SchemaError> {
    if node.tag_name().name() == expected {
        Ok(())
    } else {
        Err(schema_error(
            node,
            SchemaErrorKind::UnexpectedElement {
                expected: expected.to_string(),
            },
        ))
    }
}

pub(crate) fn child_element<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

/// Returns the value of a required, non-blank attribute.
pub(crate) fn required_attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str, SchemaError> {
    match node.attribute(name) {
        None => Err(schema_error(
            node,
            SchemaErrorKind::MissingAttribute(name.to_string()),
        )),
        Some(value) if value.trim().is_empty() => Err(schema_error(
            node,
            SchemaErrorKind::BlankAttribute(name.to_string()),
        )),
        Some(value) => Ok(value),
    }
}

/// Concatenates every text node below `node`, in document order.
pub(crate) fn descendant_text(node: Node) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

pub(crate) fn raw_node(node: Node) -> RawNode {
    if node.is_text() {
        return RawNode::Text(node.text().unwrap_or_default().to_string());
    }
    RawNode::Element(RawElement {
        name: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect(),
        children: node
            .children()
            .filter(|child| child.is_element() || child.is_text())
            .map(raw_node)
            .collect(),
    })
}
