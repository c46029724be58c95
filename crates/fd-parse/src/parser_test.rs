use super::*;
use fd_core::{attrs, CoreError};

#[test]
fn test_parse_relation() {
    let parser = RelationParser::default();
    let rel = parser
        .parse("R(A,B,C)\n\nA,B --> C\nC --> A\n")
        .unwrap();
    assert_eq!(rel.name(), "R");
    assert_eq!(rel.attrs(), &attrs(["A", "B", "C"]));
    assert_eq!(rel.func_deps().len(), 2);
    assert_eq!(rel.func_deps()[0].left, attrs(["A", "B"]));
    assert_eq!(rel.func_deps()[1].right, attrs(["A"]));
}

#[test]
fn test_parse_header_only() {
    let rel = RelationParser::default().parse("Lonely(X, Y)").unwrap();
    assert_eq!(rel.attrs(), &attrs(["X", "Y"]));
    assert!(rel.func_deps().is_empty());
}

#[test]
fn test_parse_trims_names_and_blank_lines() {
    let text = "\n  Emp ( id , dept_id , salary )  \n\n   id -->  dept_id ,salary \n\n";
    let rel = RelationParser::default().parse(text).unwrap();
    assert_eq!(rel.name(), "Emp");
    assert_eq!(rel.attrs(), &attrs(["dept_id", "id", "salary"]));
    assert_eq!(rel.func_deps()[0].right, attrs(["dept_id", "salary"]));
}

#[test]
fn test_parse_empty() {
    let result = RelationParser::default().parse("  \n\n ");
    assert!(matches!(result, Err(ParseError::EmptyInput)));
}

#[test]
fn test_header_without_paren() {
    let result = RelationParser::default().parse("R A,B,C");
    assert!(matches!(
        result,
        Err(ParseError::MalformedRelationHeader { .. })
    ));
}

#[test]
fn test_header_without_closing_paren() {
    let result = RelationParser::default().parse("R(A,B,C");
    assert!(matches!(
        result,
        Err(ParseError::MalformedRelationHeader { .. })
    ));
}

#[test]
fn test_header_unbalanced_parens() {
    let result = RelationParser::default().parse("R(A,(B),C)");
    assert!(matches!(
        result,
        Err(ParseError::MalformedRelationHeader { .. })
    ));
}

#[test]
fn test_all_arrow_forms() {
    let parser = RelationParser::default();
    for arrow in [
        "-->", "--->", ">>", "-->>", "~~>", "~>", "==>", "===>>", "→", "⇒", "⇾", ">",
    ] {
        let fd = parser
            .parse_func_dep(&format!("A,B {arrow} C"))
            .unwrap_or_else(|e| panic!("arrow {arrow} rejected: {e}"));
        assert_eq!(fd.left, attrs(["A", "B"]));
        assert_eq!(fd.right, attrs(["C"]));
    }
}

#[test]
fn test_missing_arrow_is_error() {
    let result = RelationParser::default().parse("R(A,B)\nA,B\n");
    match result {
        Err(ParseError::ArrowCount { line, found, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(found, 0);
        }
        other => panic!("expected ArrowCount, got {other:?}"),
    }
}

#[test]
fn test_too_many_arrows_is_error() {
    let result = RelationParser::default().parse_func_dep("A --> B --> C");
    assert!(matches!(
        result,
        Err(ParseError::ArrowCount { found: 2, .. })
    ));
}

#[test]
fn test_hyphenated_attribute_is_not_an_arrow() {
    let fd = RelationParser::default()
        .parse_func_dep("first-name --> last-name")
        .unwrap();
    assert_eq!(fd.left, attrs(["first-name"]));
    assert_eq!(fd.right, attrs(["last-name"]));
}

#[test]
fn test_unknown_attributes_reported() {
    let result = RelationParser::default().parse("R(A,B)\nA --> Z\nQ --> B\n");
    match result {
        Err(ParseError::Core(CoreError::UnknownAttributes { unknown, count, .. })) => {
            assert_eq!(unknown, "Q,Z");
            assert_eq!(count, 2);
        }
        other => panic!("expected UnknownAttributes, got {other:?}"),
    }
}

#[test]
fn test_empty_separator_single_char_attrs() {
    let parser = RelationParser::new("");
    let rel = parser.parse("R(ABCD)\nAB -> C\nC ⇒ D\n").unwrap();
    assert_eq!(rel.attrs(), &attrs(["A", "B", "C", "D"]));
    assert_eq!(rel.func_deps()[0].left, attrs(["A", "B"]));
    assert_eq!(parser.render(&rel), "R(ABCD)\n\nAB --> C\nC --> D");
}

#[test]
fn test_custom_separator() {
    let parser = RelationParser::new(";");
    let rel = parser.parse("R(a;b;c)\na;b --> c").unwrap();
    assert_eq!(rel.func_deps()[0].left, attrs(["a", "b"]));
    assert_eq!(parser.render(&rel), "R(a;b;c)\n\na;b --> c");
}

#[test]
fn test_from_config_uses_separator() {
    let config = Config {
        separator: "|".to_string(),
        ..Config::default()
    };
    assert_eq!(RelationParser::from_config(&config).separator(), "|");
}

#[test]
fn test_render_is_canonical() {
    let parser = RelationParser::default();
    let rel = parser.parse("R(C,A,B)\nC,B ~~> A").unwrap();
    let text = parser.render(&rel);
    assert_eq!(text, "R(A,B,C)\n\nB,C --> A");
    assert_eq!(parser.render(&parser.parse(&text).unwrap()), text);
}

#[test]
fn test_empty_left_side_is_a_constant_dependency() {
    let parser = RelationParser::default();
    let rel = parser.parse("R(A,B)\n--> A\nA --> B").unwrap();
    assert!(rel.func_deps()[0].left.is_empty());
    assert_eq!(rel.candidate_keys_bf(), vec![fd_core::AttrSet::new()]);
    assert_eq!(parser.render(&rel), "R(A,B)\n\n --> A\nA --> B");
}
