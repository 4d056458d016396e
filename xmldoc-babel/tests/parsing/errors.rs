use crate::common::doc;
use xmldoc_babel::{parse_documentation, ParseError, Position, SchemaErrorKind};

fn schema_error(members: &str) -> xmldoc_babel::SchemaError {
    match parse_documentation(&doc(members)) {
        Err(ParseError::Schema(err)) => err,
        other => panic!("expected a schema error, got {other:?}"),
    }
}

#[test]
fn invalid_member_name_points_at_the_member() {
    let err = schema_error(r#"        <member name="not-a-member-id"/>"#);
    assert_eq!(err.element, "member");
    assert_eq!(err.kind, SchemaErrorKind::InvalidMemberId("not-a-member-id".into()));
    // Line 7 of the wrapped document, indented by eight spaces
    assert_eq!(err.position, Position { row: 7, col: 9 });
}

#[test]
fn first_structural_problem_aborts_the_whole_file() {
    let err = schema_error(
        r#"
        <member name="T:N.Good"/>
        <member name="M:N.Bad"><exception/></member>
        <member name="Q:N.Worse"/>"#,
    );
    assert_eq!(err.element, "exception");
    assert_eq!(err.kind, SchemaErrorKind::MissingAttribute("cref".into()));
}

#[test]
fn unsupported_list_type_inside_a_section() {
    let err = schema_error(
        r#"<member name="T:N.C"><remarks><list type="grid"><item>x</item></list></remarks></member>"#,
    );
    assert_eq!(err.kind, SchemaErrorKind::UnsupportedListType("grid".into()));
    assert!(err.to_string().starts_with("<list> at "));
}

#[test]
fn malformed_xml_is_reported_as_syntax_error() {
    let result = parse_documentation("<doc><assembly><name>A</name></doc>");
    let err = result.unwrap_err();
    assert!(matches!(err, ParseError::Syntax(_)));
    assert!(err.to_string().starts_with("XML syntax error"));
}
