//! Parser for compact tree expressions.
//!
//! Grammar: `node := label [ '(' child ',' child ')' ]` where a child is
//! either a node or `.` for an absent slot. Whitespace between tokens is
//! ignored. Example: `A(B(D(H,I),E),C(F(L,.),G))`.

use std::iter::Peekable;
use std::str::CharIndices;

use generational_arena::Index;
use tracing::instrument;

use crate::errors::{ParseError, ParseResult};
use crate::tree::BinaryTree;

const DELIMITERS: [char; 4] = ['(', ')', ',', '.'];

#[derive(Debug, Clone, Copy)]
enum Slot {
    Left,
    Right,
}

/// Parses a compact tree expression into a `BinaryTree`.
#[instrument(level = "debug")]
pub fn parse_tree(input: &str) -> ParseResult<BinaryTree<String>> {
    let mut parser = Parser::new(input);
    let mut tree = BinaryTree::new();

    parser.skip_whitespace();
    let label = parser.label()?;
    let root = tree.insert_root(label);
    parser.children(&mut tree, root)?;

    parser.skip_whitespace();
    if let Some(&(pos, _)) = parser.chars.peek() {
        return Err(ParseError::TrailingInput(pos));
    }
    Ok(tree)
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    /// Consumes a node label: one or more characters up to a delimiter or
    /// whitespace.
    fn label(&mut self) -> ParseResult<String> {
        let mut label = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if DELIMITERS.contains(&c) || c.is_whitespace() {
                break;
            }
            label.push(c);
            self.chars.next();
        }

        if label.is_empty() {
            return match self.chars.peek() {
                Some(&(pos, found)) => Err(ParseError::UnexpectedChar { found, pos }),
                None => Err(ParseError::UnexpectedEnd),
            };
        }
        Ok(label)
    }

    /// Consumes an optional `(left,right)` child list for `parent`.
    fn children(&mut self, tree: &mut BinaryTree<String>, parent: Index) -> ParseResult<()> {
        self.skip_whitespace();
        if !matches!(self.chars.peek(), Some(&(_, '('))) {
            return Ok(());
        }
        self.chars.next();

        self.child(tree, parent, Slot::Left)?;
        self.expect(',')?;
        self.child(tree, parent, Slot::Right)?;
        self.expect(')')
    }

    /// Consumes one child position: `.` for absent, otherwise a full node.
    fn child(&mut self, tree: &mut BinaryTree<String>, parent: Index, slot: Slot) -> ParseResult<()> {
        self.skip_whitespace();
        if matches!(self.chars.peek(), Some(&(_, '.'))) {
            self.chars.next();
            return Ok(());
        }

        let label = self.label()?;
        let idx = match slot {
            Slot::Left => tree.insert_left(parent, label),
            Slot::Right => tree.insert_right(parent, label),
        };
        self.children(tree, idx)
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        self.skip_whitespace();
        match self.chars.next() {
            Some((_, c)) if c == expected => Ok(()),
            Some((pos, found)) => Err(ParseError::Expected {
                expected,
                found,
                pos,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_label() {
        let tree = parse_tree("A").unwrap();
        assert_eq!(tree.len(), 1);
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!(root.value, "A");
        assert!(root.is_leaf());
    }

    #[test]
    fn test_absent_children_via_dot() {
        let tree = parse_tree("A(.,C)").unwrap();
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert!(root.left.is_none());
        assert!(root.right.is_some());
    }

    #[test]
    fn test_whitespace_between_tokens() {
        let tree = parse_tree("A ( B , C )").unwrap();
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_empty_input_is_unexpected_end() {
        assert_eq!(parse_tree("").unwrap_err(), ParseError::UnexpectedEnd);
        assert_eq!(parse_tree("   ").unwrap_err(), ParseError::UnexpectedEnd);
    }

    #[test]
    fn test_missing_comma_reports_position() {
        let err = parse_tree("A(B)").unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: ',',
                found: ')',
                pos: 3
            }
        );
    }
}
