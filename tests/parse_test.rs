//! Tests for the compact tree-expression parser

use rstest::rstest;

use treeviz::util::testing;
use treeviz::{parse_tree, ParseError};

#[rstest]
#[case("A", 1, 1)]
#[case("A(B,C)", 3, 2)]
#[case("A(B(D,E),C)", 5, 3)]
#[case("A(B(D(H,I),E),C(F(L,.),G))", 10, 4)]
#[case("A(.,C)", 2, 2)]
#[case("  A ( B , . )  ", 2, 2)]
fn given_valid_expression_when_parsing_then_node_count_and_depth_match(
    #[case] expr: &str,
    #[case] expected_len: usize,
    #[case] expected_depth: usize,
) {
    testing::init_test_setup();
    let tree = parse_tree(expr).unwrap();
    assert_eq!(tree.len(), expected_len, "node count for {:?}", expr);
    assert_eq!(tree.depth(), expected_depth, "depth for {:?}", expr);
}

#[test]
fn given_sample_expression_when_parsing_then_structure_matches() {
    let tree = parse_tree("A(B(D(H,I),E),C(F(L,.),G))").unwrap();

    let root = tree.node(tree.root().unwrap()).unwrap();
    assert_eq!(root.value, "A");

    let b = tree.node(root.left.unwrap()).unwrap();
    let c = tree.node(root.right.unwrap()).unwrap();
    assert_eq!(b.value, "B");
    assert_eq!(c.value, "C");

    let f = tree.node(c.left.unwrap()).unwrap();
    assert_eq!(f.value, "F");
    assert_eq!(
        tree.node(f.left.unwrap()).unwrap().value,
        "L",
        "F keeps its left child"
    );
    assert!(f.right.is_none(), "F has no right child");

    let e = tree.node(b.right.unwrap()).unwrap();
    assert!(e.is_leaf());
}

#[test]
fn given_multi_character_labels_when_parsing_then_values_are_kept() {
    let tree = parse_tree("root(left,right)").unwrap();
    let root = tree.node(tree.root().unwrap()).unwrap();
    assert_eq!(root.value, "root");
    assert_eq!(tree.node(root.left.unwrap()).unwrap().value, "left");
}

#[rstest]
#[case("", ParseError::UnexpectedEnd)]
#[case("   ", ParseError::UnexpectedEnd)]
#[case("A(B,C", ParseError::UnexpectedEnd)]
#[case("A)", ParseError::TrailingInput(1))]
#[case("A B", ParseError::TrailingInput(2))]
#[case("(A,B)", ParseError::UnexpectedChar { found: '(', pos: 0 })]
#[case("A(,B)", ParseError::UnexpectedChar { found: ',', pos: 2 })]
#[case("A(B)", ParseError::Expected { expected: ',', found: ')', pos: 3 })]
fn given_invalid_expression_when_parsing_then_error_carries_position(
    #[case] expr: &str,
    #[case] expected: ParseError,
) {
    assert_eq!(parse_tree(expr).unwrap_err(), expected, "for {:?}", expr);
}
