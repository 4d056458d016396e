use crate::common::doc;
use xmldoc_babel::markdown::{render_span, MdSpan};
use xmldoc_babel::model::{
    ItemList, List, ListItem, SeeReference, Table, TableRow, TextBlock, TextElement, TextStyle,
};
use xmldoc_babel::{convert_to_span, parse_documentation, MarkdownOptions, RenderError};

fn text(s: &str) -> TextBlock {
    TextBlock::new(vec![TextElement::Text(s.into())])
}

fn rejected_kind(result: Result<MdSpan, RenderError>) -> &'static str {
    match result {
        Err(RenderError::BlockInInlineContext { kind }) => kind,
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[test]
fn summary_with_code_renders_as_a_code_span() {
    let file = parse_documentation(&doc(
        r#"<member name="T:N.C"><summary><c>Some code</c></summary></member>"#,
    ))
    .unwrap();
    let summary = file.members[0].summary.as_ref().and_then(|s| s.text.as_ref());
    let span = convert_to_span(summary.unwrap()).unwrap();
    assert_eq!(
        render_span(&span, &MarkdownOptions::default()).unwrap(),
        "`Some code`"
    );
}

#[test]
fn block_only_content_is_rejected() {
    let items = ItemList {
        header: None,
        items: vec![ListItem::Simple(text("x"))],
    };
    let bullet = TextElement::List(List::Bullet(items.clone()));
    let number = TextElement::List(List::Number(items));
    let table = TextElement::List(List::Table(Table {
        header: None,
        rows: vec![TableRow(vec![text("x")])],
    }));
    let item = ListItem::Simple(text("x"));
    let row = TableRow(vec![text("x")]);

    assert_eq!(rejected_kind(convert_to_span(&bullet)), "BulletList");
    assert_eq!(rejected_kind(convert_to_span(&number)), "NumberList");
    assert_eq!(rejected_kind(convert_to_span(&table)), "Table");
    assert_eq!(rejected_kind(convert_to_span(&item)), "ListItem");
    assert_eq!(rejected_kind(convert_to_span(&row)), "TableRow");

    let file = parse_documentation(&doc(r#"<member name="T:N.C"/>"#)).unwrap();
    assert_eq!(rejected_kind(convert_to_span(&file)), "File");
    assert_eq!(rejected_kind(convert_to_span(&file.members[0])), "Member");
}

#[test]
fn rejection_names_the_kind_in_its_message() {
    let block = TextBlock::new(vec![
        TextElement::Text("Intro".into()),
        TextElement::CodeBlock(xmldoc_babel::model::CodeBlock {
            content: "x".into(),
            language: None,
        }),
    ]);
    let err = convert_to_span(&block).unwrap_err();
    assert_eq!(
        err.to_string(),
        "CodeBlock cannot be converted to inline Markdown"
    );
}

#[test]
fn inline_kinds_are_accepted() {
    let accepted = [
        TextElement::Text("plain".into()),
        TextElement::InlineCode("code".into()),
        TextElement::ParameterRef("count".into()),
        TextElement::TypeParameterRef("T".into()),
        TextElement::See(SeeReference::Code {
            reference: "T:N.C".parse().unwrap(),
            text: None,
        }),
        TextElement::See(SeeReference::Url {
            link: "https://example.com".into(),
            text: Some(text("site")),
        }),
        TextElement::Styled {
            style: TextStyle::Strong,
            text: "loud".into(),
        },
    ];
    for element in &accepted {
        assert!(convert_to_span(element).is_ok(), "{element:?} was rejected");
    }
}

#[test]
fn paragraphs_inside_a_span_become_line_breaks() {
    let block = TextBlock::new(vec![
        TextElement::Paragraph(Some(text("one"))),
        TextElement::Paragraph(Some(text("two"))),
        TextElement::LineBreak,
    ]);
    assert_eq!(
        convert_to_span(&block).unwrap(),
        MdSpan::Group(vec![
            MdSpan::text("one"),
            MdSpan::LineBreak,
            MdSpan::text("two"),
        ])
    );
}
