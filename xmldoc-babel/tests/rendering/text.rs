use crate::common::{doc, markdown, node_names, reparse};
use comrak::nodes::NodeValue;
use comrak::Arena;
use insta::assert_snapshot;
use xmldoc_babel::{xml_to_markdown, MarkdownOptions};

fn summary(body: &str) -> String {
    markdown(&format!(
        r#"<member name="T:N.C"><summary>{body}</summary></member>"#
    ))
}

/// Concatenated text of every `Text` node in `md`.
fn plain_text(md: &str) -> String {
    let arena = Arena::new();
    let root = reparse(md, &arena);
    root.descendants()
        .filter_map(|node| match &node.data.borrow().value {
            NodeValue::Text(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn indented_summary_reflows_into_one_paragraph() {
    let md = summary(
        "
            Gets the value
            of the field.
        ",
    );
    assert_snapshot!(md, @r"
    # Asm

    ## N.C

    ### Summary

    Gets the value of the field.
    ");
}

#[test]
fn inline_elements_stay_in_the_paragraph() {
    let md = summary(
        r#"Call <c>Run</c> with <paramref name="count"/>, <em>carefully</em>."#,
    );
    assert!(md.ends_with("Call `Run` with `count`, *carefully*.\n"), "{md}");
}

#[test]
fn para_elements_split_paragraphs() {
    let md = summary("Intro<para>Second</para>Third");
    assert!(md.ends_with("### Summary\n\nIntro\n\nSecond\n\nThird\n"), "{md}");
}

#[test]
fn code_blocks_are_fenced_with_their_language() {
    let md = markdown(
        r#"
        <member name="M:N.C.Run">
            <example>
            Usage:
            <code language="csharp">
            var c = new C();
            c.Run();
            </code>
            </example>
        </member>"#,
    );
    assert!(
        md.contains("### Example\n\nUsage:\n\n```csharp\nvar c = new C();\nc.Run();\n```\n"),
        "{md}"
    );
}

#[test]
fn untagged_code_block_is_still_fenced() {
    let md = summary("<code>x</code>");
    assert!(md.contains("```\nx\n```"), "{md}");
}

#[test]
fn empty_inline_code_is_dropped() {
    let md = summary("Nothing<c></c>");
    assert!(md.ends_with("### Summary\n\nNothing\n"), "{md}");
}

#[test]
fn line_break_at_paragraph_start_is_dropped() {
    let md = summary("<br/>text<br/>");
    assert!(md.ends_with("### Summary\n\ntext\n"), "{md}");
}

#[test]
fn unrecognized_elements_survive_as_escaped_text() {
    let md = summary(r#"See <note>this</note> now"#);
    assert!(plain_text(&md).ends_with("See <note>this</note> now"), "{md}");

    let arena = Arena::new();
    let root = reparse(&md, &arena);
    assert!(!node_names(root).contains(&"Other"), "raw HTML leaked into {md}");
}

#[test]
fn see_references_render_inline() {
    let md = summary(
        r#"See <see cref="T:N.Other"/>, <see cref="M:N.Other.Run">the runner</see> and <see href="https://example.com"/>."#,
    );
    let arena = Arena::new();
    let root = reparse(&md, &arena);
    let names = node_names(root);
    assert_eq!(names.iter().filter(|name| **name == "Code").count(), 1);
    assert_eq!(names.iter().filter(|name| **name == "Link").count(), 1);
    assert!(plain_text(&md).contains("the runner"));
}

#[test]
fn see_also_entries_share_one_paragraph() {
    let md = markdown(
        r#"<member name="T:N.C">
            <seealso cref="T:N.Other"/>
            <seealso href="https://example.com">Docs</seealso>
        </member>"#,
    );

    let arena = Arena::new();
    let root = reparse(&md, &arena);
    let paragraphs: Vec<_> = root
        .children()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::Paragraph))
        .collect();
    assert_eq!(paragraphs.len(), 1, "{md}");
    let names = node_names(paragraphs[0]);
    assert!(names.contains(&"Code"));
    assert!(names.contains(&"LineBreak"));
    assert!(names.contains(&"Link"));
}

#[test]
fn width_option_wraps_long_paragraphs() {
    let words = "word ".repeat(30);
    let xml = doc(&format!(
        r#"<member name="T:N.C"><summary>{words}</summary></member>"#
    ));
    let options = MarkdownOptions {
        width: 40,
        ..MarkdownOptions::default()
    };
    let md = xml_to_markdown(&xml, &options).unwrap();
    let body: Vec<_> = md.lines().filter(|line| line.starts_with("word")).collect();
    assert!(body.len() > 1, "{md}");
    assert!(body.iter().all(|line| line.len() <= 40), "{md}");
}
