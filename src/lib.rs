//! treeviz: render binary trees as proportioned ASCII art diagrams.
//!
//! All spacing is computed from tree depth alone, so sparse trees keep their
//! sibling alignment:
//!
//! ```text
//!       (A)
//!       / \
//!      /   \
//!     /     \
//!   (B)     (C)
//!   / \     / \
//! (D) (E) (F) (G)
//! ```
//!
//! ```
//! use treeviz::{render_to_string, BinaryTree};
//!
//! let mut tree = BinaryTree::new();
//! let root = tree.insert_root('A');
//! tree.insert_left(root, 'B');
//! tree.insert_right(root, 'C');
//!
//! let diagram = render_to_string(&tree).unwrap();
//! assert_eq!(diagram, "  (A)\n  / \\\n(B) (C)\n");
//! ```

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod parse;
pub mod render;
pub mod tree;
pub mod util;

pub use errors::{ParseError, ParseResult, RenderError, RenderResult};
pub use parse::parse_tree;
pub use render::{print_tree, render_to_string, write_tree};
pub use tree::{BinaryTree, BtNode};
