//! Core data structures of the documentation tree.
//!
//! Every node is built fully populated by the parser and never mutated
//! afterwards. Equality and hashing are structural and derived for every
//! node so that new variants cannot drift out of sync.

use super::member_id::{MemberId, MemberKind};

/// The root of a parsed documentation file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentationFile {
    pub assembly_name: String,
    pub members: Vec<Member>,
}

impl DocumentationFile {
    /// Looks a member up by its raw id, e.g. `T:MyNamespace.MyClass`.
    pub fn member(&self, raw_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id.as_str() == raw_id)
    }
}

/// A documented program element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    pub id: MemberId,
    pub summary: Option<Section>,
    pub remarks: Option<Section>,
    pub example: Option<Section>,
    pub see_also: Vec<SeeAlso>,
    /// Children that are not valid for this kind of member, kept as-is.
    pub unrecognized: Vec<RawNode>,
    pub details: MemberDetails,
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        self.id.kind()
    }
}

/// Sections that only some kinds of members carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberDetails {
    Namespace,
    Type {
        type_parameters: Vec<NamedSection>,
    },
    Field {
        value: Option<Section>,
    },
    Property {
        value: Option<Section>,
        parameters: Vec<NamedSection>,
        exceptions: Vec<ExceptionSection>,
    },
    Method {
        returns: Option<Section>,
        parameters: Vec<NamedSection>,
        type_parameters: Vec<NamedSection>,
        exceptions: Vec<ExceptionSection>,
    },
    Event {
        exceptions: Vec<ExceptionSection>,
    },
}

/// Summary, remarks, value, returns and example sections.
///
/// `text` is `None` only when the source element had no child nodes at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Section {
    pub text: Option<TextBlock>,
}

/// A `param` or `typeparam` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedSection {
    pub name: String,
    pub text: Option<TextBlock>,
}

/// An `exception` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExceptionSection {
    pub reference: MemberId,
    pub text: Option<TextBlock>,
}

/// A `seealso` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeeAlso {
    Code {
        reference: MemberId,
        text: Option<TextBlock>,
    },
    Url {
        link: String,
        text: Option<TextBlock>,
    },
}

/// The section headings a member can carry, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    TypeParameters,
    Parameters,
    Returns,
    Value,
    Exceptions,
    Remarks,
    Example,
    SeeAlso,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::TypeParameters => "Type Parameters",
            SectionKind::Parameters => "Parameters",
            SectionKind::Returns => "Returns",
            SectionKind::Value => "Value",
            SectionKind::Exceptions => "Exceptions",
            SectionKind::Remarks => "Remarks",
            SectionKind::Example => "Example",
            SectionKind::SeeAlso => "See Also",
        }
    }
}

/// Formatted prose: an ordered run of text elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextBlock(pub Vec<TextElement>);

impl TextBlock {
    pub fn new(elements: Vec<TextElement>) -> Self {
        TextBlock(elements)
    }

    pub fn elements(&self) -> &[TextElement] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TextBlock {
    type Item = &'a TextElement;
    type IntoIter = std::slice::Iter<'a, TextElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextElement {
    Text(String),
    Paragraph(Option<TextBlock>),
    InlineCode(String),
    CodeBlock(CodeBlock),
    ParameterRef(String),
    TypeParameterRef(String),
    See(SeeReference),
    List(List),
    Styled { style: TextStyle, text: String },
    LineBreak,
    Unrecognized(RawNode),
}

impl TextElement {
    /// A short name for the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TextElement::Text(_) => "Text",
            TextElement::Paragraph(_) => "Paragraph",
            TextElement::InlineCode(_) => "InlineCode",
            TextElement::CodeBlock(_) => "CodeBlock",
            TextElement::ParameterRef(_) => "ParameterRef",
            TextElement::TypeParameterRef(_) => "TypeParameterRef",
            TextElement::See(_) => "See",
            TextElement::List(list) => list.kind_name(),
            TextElement::Styled { .. } => "Styled",
            TextElement::LineBreak => "LineBreak",
            TextElement::Unrecognized(_) => "Unrecognized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeBlock {
    pub content: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeeReference {
    Code {
        reference: MemberId,
        text: Option<TextBlock>,
    },
    Url {
        link: String,
        text: Option<TextBlock>,
    },
}

/// `em`, `i`, `b` and `strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Emphasis,
    Idiomatic,
    Bold,
    Strong,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum List {
    Bullet(ItemList),
    Number(ItemList),
    Table(Table),
}

impl List {
    pub fn kind_name(&self) -> &'static str {
        match self {
            List::Bullet(_) => "BulletList",
            List::Number(_) => "NumberList",
            List::Table(_) => "Table",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemList {
    pub header: Option<ListItem>,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListItem {
    Simple(TextBlock),
    Definition {
        term: Option<TextBlock>,
        description: Option<TextBlock>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Table {
    pub header: Option<TableRow>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// The number of columns of the widest row, header included.
    pub fn column_count(&self) -> usize {
        self.header
            .iter()
            .chain(self.rows.iter())
            .map(|row| row.0.len())
            .max()
            .unwrap_or(0)
    }
}

/// A table row; each entry is one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TableRow(pub Vec<TextBlock>);

/// An owned copy of XML content the classifier did not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawNode {
    Element(RawElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<RawNode>,
}

impl RawElement {
    /// The element's start tag as it would appear in source, self-closing
    /// when the element has no children.
    pub fn opening_tag(&self) -> String {
        let mut tag = format!("<{}", self.name);
        for (key, value) in &self.attributes {
            tag.push_str(&format!(" {key}=\"{}\"", value.replace('"', "&quot;")));
        }
        if self.children.is_empty() {
            tag.push_str(" />");
        } else {
            tag.push('>');
        }
        tag
    }

    /// The end tag, or `None` for a self-closing element.
    pub fn closing_tag(&self) -> Option<String> {
        if self.children.is_empty() {
            None
        } else {
            Some(format!("</{}>", self.name))
        }
    }
}
