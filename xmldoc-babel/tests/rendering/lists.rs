use crate::common::{markdown, node_names, reparse};
use comrak::nodes::NodeValue;
use comrak::Arena;
use xmldoc_babel::{xml_to_markdown, ListStyle, MarkdownOptions};

fn remarks(body: &str) -> String {
    markdown(&format!(
        r#"<member name="T:N.C"><remarks>{body}</remarks></member>"#
    ))
}

#[test]
fn bullet_items_render_as_a_tight_list() {
    let md = remarks(r#"<list type="bullet"><item>Item 1</item><item>Item 2</item></list>"#);
    assert!(md.ends_with("### Remarks\n\n- Item 1\n- Item 2\n"), "{md}");
}

#[test]
fn list_style_is_configurable() {
    let xml = crate::common::doc(
        r#"<member name="T:N.C"><remarks><list type="bullet"><item>Item 1</item></list></remarks></member>"#,
    );
    let options = MarkdownOptions {
        list_style: ListStyle::Star,
        ..MarkdownOptions::default()
    };
    let md = xml_to_markdown(&xml, &options).unwrap();
    assert!(md.contains("\n* Item 1\n"), "{md}");
}

#[test]
fn numbered_items_are_ordered() {
    let md = remarks(r#"<list type="number"><item>First</item><item>Second</item></list>"#);
    assert!(md.ends_with("### Remarks\n\n1. First\n2. Second\n"), "{md}");
}

#[test]
fn item_paragraphs_stay_separate() {
    let md = remarks(r#"<list type="bullet"><item><para>p1</para><para>p2</para></item></list>"#);

    let arena = Arena::new();
    let root = reparse(&md, &arena);
    let list = root
        .children()
        .find(|node| matches!(node.data.borrow().value, NodeValue::List(_)))
        .unwrap_or_else(|| panic!("no list in {md}"));
    let item = list.first_child().expect("item");
    let paragraphs: Vec<_> = item
        .children()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::Paragraph))
        .collect();
    assert_eq!(paragraphs.len(), 2, "{md}");
}

#[test]
fn consecutive_lists_are_not_merged() {
    let md = remarks(
        r#"<list type="bullet"><item>a</item></list><list type="bullet"><item>b</item></list>"#,
    );

    let arena = Arena::new();
    let root = reparse(&md, &arena);
    let lists = root
        .children()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::List(_)))
        .count();
    assert_eq!(lists, 2, "{md}");
}

#[test]
fn nested_lists_nest_under_their_item() {
    let md = remarks(
        r#"<list type="bullet">
            <item>Outer
                <list type="number"><item>Inner</item></list>
            </item>
            <item>Last</item>
        </list>"#,
    );

    let arena = Arena::new();
    let root = reparse(&md, &arena);
    let outer = root
        .children()
        .find(|node| matches!(node.data.borrow().value, NodeValue::List(_)))
        .expect("outer list");
    assert_eq!(outer.children().count(), 2);

    let first_item = outer.first_child().expect("first item");
    let nested = first_item
        .children()
        .find(|node| matches!(node.data.borrow().value, NodeValue::List(_)))
        .expect("nested list");
    let NodeValue::List(nested_list) = nested.data.borrow().value.clone() else {
        unreachable!()
    };
    assert_eq!(nested_list.list_type, comrak::nodes::ListType::Ordered);
}

#[test]
fn definition_items_bold_the_term() {
    let md = remarks(
        r#"<list type="bullet"><item><term>Term</term><description>Meaning</description></item></list>"#,
    );
    assert!(md.contains("- **Term**: Meaning\n"), "{md}");
}

#[test]
fn list_header_becomes_the_first_item() {
    let md = remarks(
        r#"<list type="bullet"><listheader><term>Name</term></listheader><item><term>a</term></item></list>"#,
    );
    assert!(md.contains("- **Name**\n- **a**\n"), "{md}");
}

#[test]
fn tables_keep_header_and_rows() {
    let md = remarks(
        r#"<list type="table">
            <listheader><term>Key</term><term>Value</term></listheader>
            <item><term>a</term><term><c>1</c></term></item>
            <item><term>b</term></item>
        </list>"#,
    );

    let arena = Arena::new();
    let root = reparse(&md, &arena);
    let table = root
        .children()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Table(_)))
        .unwrap_or_else(|| panic!("no table in {md}"));
    assert_eq!(table.children().count(), 3);
    for row in table.children() {
        assert_eq!(row.children().count(), 2);
    }
    assert!(node_names(table).contains(&"Code"));
}

#[test]
fn table_without_header_gets_a_blank_header_row() {
    let md = remarks(
        r#"<list type="table"><item><term>a</term><term>b</term><term>c</term></item></list>"#,
    );

    let arena = Arena::new();
    let root = reparse(&md, &arena);
    let table = root
        .children()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Table(_)))
        .unwrap_or_else(|| panic!("no table in {md}"));
    let header = table.first_child().expect("header row");
    assert_eq!(header.children().count(), 3);
    assert!(header.children().all(|cell| cell.first_child().is_none()));
}

#[test]
fn paragraphs_in_a_table_cell_are_joined_with_a_space() {
    let md = remarks(
        r#"<list type="table"><item><term><para>a</para><para>b</para></term><term>c</term></item></list>"#,
    );

    let arena = Arena::new();
    let root = reparse(&md, &arena);
    let table = root
        .children()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Table(_)))
        .unwrap_or_else(|| panic!("no table in {md}"));
    assert!(md.contains("| a b | c |"), "{md}");
    assert!(!node_names(table).contains(&"LineBreak"));
}
