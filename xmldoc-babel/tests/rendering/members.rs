use crate::common::{doc, markdown};
use insta::assert_snapshot;
use xmldoc_babel::markdown::{MdBlock, MdSpan};
use xmldoc_babel::{convert_to_block, parse_documentation};

#[test]
fn field_without_content_renders_its_heading() {
    let md = markdown(r#"        <member name="F:MyNamespace.MyClass.Field"/>"#);
    assert_snapshot!(md, @r"
    # Asm

    ## MyNamespace.MyClass.Field Field
    ");
}

#[test]
fn self_closing_sections_are_left_out() {
    let md = markdown(
        r#"<member name="M:N.C.Run"><summary/><returns/><remarks>   </remarks></member>"#,
    );
    assert_snapshot!(md, @r"
    # Asm

    ## N.C.Run Method

    ### Remarks
    ");
}

#[test]
fn empty_member_produces_a_single_heading() {
    for (id, title) in [
        ("N:MyNamespace", "MyNamespace Namespace"),
        ("T:MyNamespace.MyClass", "MyNamespace.MyClass"),
        ("P:MyNamespace.MyClass.Name", "MyNamespace.MyClass.Name Property"),
        ("M:MyNamespace.MyClass.Run", "MyNamespace.MyClass.Run Method"),
        ("E:MyNamespace.MyClass.Changed", "MyNamespace.MyClass.Changed Event"),
    ] {
        let file = parse_documentation(&doc(&format!(r#"<member name="{id}"/>"#))).unwrap();
        let block = convert_to_block(&file.members[0]).unwrap();
        assert_eq!(
            block,
            MdBlock::Container(vec![MdBlock::Heading {
                level: 2,
                content: vec![MdSpan::text(title)],
            }])
        );
    }
}

#[test]
fn exceptions_render_as_separate_paragraphs() {
    let md = markdown(
        r#"<member name="M:N.C.M"><exception cref="T:E1"/><exception cref="T:E2">Thrown sometimes</exception></member>"#,
    );
    assert_snapshot!(md, @r"
    # Asm

    ## N.C.M Method

    ### Exceptions

    `E1`

    `E2`

    Thrown sometimes
    ");
}

#[test]
fn sections_follow_a_fixed_order() {
    let md = markdown(
        r#"
        <member name="M:N.C.Run">
            <seealso href="https://example.com"/>
            <example>Call it.</example>
            <remarks>Rarely needed.</remarks>
            <exception cref="T:N.Oops"/>
            <returns>A value.</returns>
            <param name="count">How many.</param>
            <typeparam name="T">The type.</typeparam>
            <summary>Runs.</summary>
        </member>"#,
    );
    let headings: Vec<_> = md.lines().filter(|line| line.starts_with("### ")).collect();
    assert_eq!(
        headings,
        [
            "### Summary",
            "### Type Parameters",
            "### Parameters",
            "### Returns",
            "### Exceptions",
            "### Remarks",
            "### Example",
            "### See Also",
        ]
    );
}

#[test]
fn parameters_show_name_then_description() {
    let md = markdown(
        r#"<member name="M:N.C.Run"><param name="count">How many times.</param><param name="flag"/></member>"#,
    );
    assert!(md.contains("### Parameters\n\n`count`\n\nHow many times.\n\n`flag`\n"));
}

#[test]
fn field_value_and_property_sections() {
    let md = markdown(
        r#"
        <member name="F:N.C.Zero">
            <summary>The zero.</summary>
            <value>Always zero.</value>
        </member>
        <member name="P:N.C.Name">
            <value>The name.</value>
        </member>"#,
    );
    assert!(md.contains("## N.C.Zero Field\n\n### Summary\n\nThe zero.\n\n### Value\n\nAlways zero.\n"));
    assert!(md.contains("## N.C.Name Property\n\n### Value\n\nThe name.\n"));
}

#[test]
fn unrecognized_member_children_are_kept_as_text() {
    let md = markdown(r#"<member name="T:N.C"><inheritdoc/></member>"#);
    assert!(md.contains("inheritdoc"), "{md}");
    assert!(!md.contains("###"));
}
