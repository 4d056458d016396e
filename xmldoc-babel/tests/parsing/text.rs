use crate::common::doc;
use proptest::prelude::*;
use xmldoc_babel::model::{List, ListItem, SeeAlso, TextBlock, TextElement};
use xmldoc_babel::parse_documentation;

fn summary_of(members: &str) -> Option<TextBlock> {
    let file = parse_documentation(&doc(members)).unwrap();
    file.members[0].summary.as_ref().and_then(|s| s.text.clone())
}

#[test]
fn compiler_indentation_is_removed_from_prose() {
    let summary = summary_of(
        r#"
        <member name="T:N.C">
            <summary>
            Gets or sets the value
            of the thing.
            </summary>
        </member>"#,
    );
    assert_eq!(
        summary,
        Some(TextBlock::new(vec![TextElement::Text(
            "Gets or sets the value of the thing.".into()
        )]))
    );
}

#[test]
fn prose_around_inline_elements_keeps_its_spacing() {
    let summary = summary_of(
        r#"<member name="T:N.C"><summary>Use <c>Run</c> or <paramref name="x"/>.</summary></member>"#,
    )
    .unwrap();
    assert_eq!(
        summary.elements(),
        &[
            TextElement::Text("Use ".into()),
            TextElement::InlineCode("Run".into()),
            TextElement::Text(" or ".into()),
            TextElement::ParameterRef("x".into()),
            TextElement::Text(".".into()),
        ]
    );
}

#[test]
fn seealso_cref_wins_over_href() {
    let file = parse_documentation(&doc(
        r#"<member name="T:N.C"><seealso cref="T:N.Other" href="https://example.com"/></member>"#,
    ))
    .unwrap();
    assert_eq!(
        file.members[0].see_also,
        vec![SeeAlso::Code {
            reference: "T:N.Other".parse().unwrap(),
            text: None,
        }]
    );
}

#[test]
fn nested_lists_keep_their_shape() {
    let remarks = parse_documentation(&doc(
        r#"
        <member name="T:N.C">
            <remarks>
                <list type="number">
                    <item>One</item>
                    <item>Two
                        <list type="bullet">
                            <item>Two A</item>
                        </list>
                    </item>
                </list>
            </remarks>
        </member>"#,
    ))
    .unwrap()
    .members[0]
        .remarks
        .clone()
        .and_then(|s| s.text)
        .unwrap();

    let [TextElement::List(List::Number(outer))] = remarks.elements() else {
        panic!("expected one numbered list, got {remarks:?}");
    };
    assert_eq!(outer.items.len(), 2);
    let ListItem::Simple(second) = &outer.items[1] else {
        panic!("expected a simple item");
    };
    assert_eq!(second.elements()[0], TextElement::Text("Two ".into()));
    assert!(matches!(
        &second.elements()[1],
        TextElement::List(List::Bullet(inner)) if inner.items.len() == 1
    ));
}

proptest! {
    #[test]
    fn reflowed_summaries_have_no_line_breaks(
        words in prop::collection::vec("[a-zA-Z]{1,8}", 1..6),
        indent in 5usize..16,
    ) {
        let pad = " ".repeat(indent);
        let body: String = words.iter().map(|w| format!("\n{pad}{w}")).collect();
        let xml = format!(r#"<member name="T:N.C"><summary>{body}
{pad}</summary></member>"#);

        let summary = summary_of(&xml).unwrap();
        prop_assert_eq!(
            summary.elements(),
            &[TextElement::Text(words.join(" "))]
        );
    }
}
