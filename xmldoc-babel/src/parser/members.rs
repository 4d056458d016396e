//! Member factories.
//!
//! The id prefix decides which member variant is built. Each variant only reads the
//! child elements that are valid for it; everything else (including a second copy of
//! a single-valued section) is kept on the member as a raw node.

use super::text::{code_reference, parse_optional_text_block, reference_target, ReferenceTarget};
use super::{raw_node, required_attribute, schema_error};
use crate::error::{SchemaError, SchemaErrorKind};
use crate::model::{
    ExceptionSection, Member, MemberDetails, MemberId, MemberKind, NamedSection, RawNode, Section,
    SeeAlso,
};
use roxmltree::Node;

pub(crate) fn parse_member(node: Node) -> Result<Member, SchemaError> {
    let name = required_attribute(node, "name")?;
    let id: MemberId = name
        .parse()
        .map_err(|_| schema_error(node, SchemaErrorKind::InvalidMemberId(name.to_string())))?;
    log::trace!("parsing {:?} member {}", id.kind(), id);

    let sections = MemberSections::read(node, id.kind())?;
    Ok(sections.into_member(id))
}

/// Child element kinds each member variant accepts.
fn accepts(kind: MemberKind, tag: &str) -> bool {
    use MemberKind::*;
    match tag {
        "summary" | "remarks" | "example" | "seealso" => true,
        "typeparam" => matches!(kind, Type | Method),
        "value" => matches!(kind, Field | Property),
        "param" => matches!(kind, Property | Method),
        "returns" => kind == Method,
        "exception" => matches!(kind, Property | Method | Event),
        _ => false,
    }
}

#[derive(Default)]
struct MemberSections {
    summary: Option<Section>,
    remarks: Option<Section>,
    example: Option<Section>,
    value: Option<Section>,
    returns: Option<Section>,
    parameters: Vec<NamedSection>,
    type_parameters: Vec<NamedSection>,
    exceptions: Vec<ExceptionSection>,
    see_also: Vec<SeeAlso>,
    unrecognized: Vec<RawNode>,
}

impl MemberSections {
    fn read(node: Node, kind: MemberKind) -> Result<Self, SchemaError> {
        let mut sections = MemberSections::default();
        for child in node.children().filter(Node::is_element) {
            let tag = child.tag_name().name();
            if !accepts(kind, tag) {
                log::debug!("keeping <{tag}> on {kind:?} member as unrecognized");
                sections.unrecognized.push(raw_node(child));
                continue;
            }
            match tag {
                "summary" | "remarks" | "example" | "value" | "returns" => {
                    let section = Section {
                        text: parse_optional_text_block(child)?,
                    };
                    let slot = sections.single_slot(tag);
                    if slot.is_none() {
                        *slot = Some(section);
                    } else {
                        log::debug!("duplicate <{tag}> kept as unrecognized");
                        sections.unrecognized.push(raw_node(child));
                    }
                }
                "param" => sections.parameters.push(parse_named(child)?),
                "typeparam" => sections.type_parameters.push(parse_named(child)?),
                "exception" => sections.exceptions.push(parse_exception(child)?),
                "seealso" => sections.see_also.push(parse_see_also(child)?),
                _ => unreachable!("accepts() only admits known section tags"),
            }
        }
        Ok(sections)
    }

    fn single_slot(&mut self, tag: &str) -> &mut Option<Section> {
        match tag {
            "summary" => &mut self.summary,
            "remarks" => &mut self.remarks,
            "example" => &mut self.example,
            "value" => &mut self.value,
            _ => &mut self.returns,
        }
    }

    fn into_member(self, id: MemberId) -> Member {
        let details = match id.kind() {
            MemberKind::Namespace => MemberDetails::Namespace,
            MemberKind::Type => MemberDetails::Type {
                type_parameters: self.type_parameters,
            },
            MemberKind::Field => MemberDetails::Field { value: self.value },
            MemberKind::Property => MemberDetails::Property {
                value: self.value,
                parameters: self.parameters,
                exceptions: self.exceptions,
            },
            MemberKind::Method => MemberDetails::Method {
                returns: self.returns,
                parameters: self.parameters,
                type_parameters: self.type_parameters,
                exceptions: self.exceptions,
            },
            MemberKind::Event => MemberDetails::Event {
                exceptions: self.exceptions,
            },
        };
        Member {
            id,
            summary: self.summary,
            remarks: self.remarks,
            example: self.example,
            see_also: self.see_also,
            unrecognized: self.unrecognized,
            details,
        }
    }
}

fn parse_named(node: Node) -> Result<NamedSection, SchemaError> {
    Ok(NamedSection {
        name: required_attribute(node, "name")?.to_string(),
        text: parse_optional_text_block(node)?,
    })
}

fn parse_exception(node: Node) -> Result<ExceptionSection, SchemaError> {
    Ok(ExceptionSection {
        reference: code_reference(node, "cref")?,
        text: parse_optional_text_block(node)?,
    })
}

fn parse_see_also(node: Node) -> Result<SeeAlso, SchemaError> {
    let text = parse_optional_text_block(node)?;
    Ok(match reference_target(node)? {
        ReferenceTarget::Code(reference) => SeeAlso::Code { reference, text },
        ReferenceTarget::Url(link) => SeeAlso::Url { link, text },
    })
}
