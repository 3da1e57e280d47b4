//! Layout and row emission for the ASCII diagram.
//!
//! All horizontal spacing is derived from tree depth alone; label width is
//! never measured. Three spacing quantities drive the layout:
//!
//! ```text
//! <--indent-->(A)
//!             / \
//!            /   \
//!           /<-+->\           + intra: gap between one node's branches
//!          /       \
//!        (B)<--*-->(C)        * inter: gap between sibling subtrees
//! ```
//!
//! Inter-spacing is threaded from level to level: each branch block consumes
//! the value left over from the previous level and returns the value used for
//! its own label row and the next block.

use std::fmt::Display;
use std::io::{self, Write};

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::errors::RenderResult;
use crate::tree::BinaryTree;

/// Width of a rendered node box `(X)`.
const LABEL_WIDTH: usize = 3;

/// Writes the tree diagram to `out`.
///
/// An empty tree produces no output. Labels are assumed to print as a single
/// character; wider labels skew the alignment but do not fail.
#[instrument(level = "debug", skip_all)]
pub fn write_tree<T: Display, W: Write>(tree: &BinaryTree<T>, out: &mut W) -> RenderResult<()> {
    let levels = materialize_levels(tree);
    if levels.is_empty() {
        return Ok(());
    }
    let max_depth = levels.len();
    debug!("rendering tree of depth {}", max_depth);

    write_root_row(tree, &levels[0], branch_len(max_depth, 1) * 2, out)?;

    let mut inter_spacing = 0;
    for current_depth in 1..max_depth {
        let buffer = &levels[current_depth - 1];

        // Branches connecting this level to its children.
        let len = branch_len(max_depth, current_depth);
        inter_spacing = write_branch_rows(tree, buffer, len, len * 2, inter_spacing, out)?;

        // Labels of the children, indented to the child level's branch block.
        let child_indent = branch_len(max_depth, current_depth + 1) * 2;
        write_label_row(tree, buffer, child_indent, inter_spacing, out)?;
    }

    Ok(())
}

/// Writes the tree diagram to stdout.
pub fn print_tree<T: Display>(tree: &BinaryTree<T>) -> RenderResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_tree(tree, &mut handle)
}

/// Renders the tree diagram into a `String`.
pub fn render_to_string<T: Display>(tree: &BinaryTree<T>) -> RenderResult<String> {
    let mut buf = Vec::new();
    write_tree(tree, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Number of branch rows between level `current_depth` and its children.
fn branch_len(max_depth: usize, current_depth: usize) -> usize {
    (1 << (max_depth - current_depth)) - 1
}

/// Materializes the complete level-order representation of the tree.
///
/// Level k (0-based) holds exactly 2^k slots, absent children padded with
/// `None` so sibling alignment survives sparse trees. Expansion stops once a
/// full frontier contains no present node with at least one child; that last
/// all-leaf round is discarded, so `levels.len()` is the maximum depth.
#[instrument(level = "trace", skip_all)]
fn materialize_levels<T>(tree: &BinaryTree<T>) -> Vec<Vec<Option<Index>>> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };

    let mut levels = vec![vec![Some(root)]];
    loop {
        let current = &levels[levels.len() - 1];
        let mut next = Vec::with_capacity(current.len() * 2);
        let mut frontier_has_children = false;

        for slot in current {
            match slot.and_then(|idx| tree.node(idx)) {
                Some(node) => {
                    if !node.is_leaf() {
                        frontier_has_children = true;
                    }
                    next.push(node.left);
                    next.push(node.right);
                }
                None => {
                    next.push(None);
                    next.push(None);
                }
            }
        }

        if !frontier_has_children {
            break;
        }
        levels.push(next);
    }

    levels
}

fn write_root_row<T: Display, W: Write>(
    tree: &BinaryTree<T>,
    buffer: &[Option<Index>],
    indent: usize,
    out: &mut W,
) -> RenderResult<()> {
    if let Some(node) = buffer.first().copied().flatten().and_then(|idx| tree.node(idx)) {
        writeln!(out, "{}({})", " ".repeat(indent), node.value)?;
    }
    Ok(())
}

/// Emits one branch block and returns the inter-spacing for the label row
/// below it and for the next level's block.
///
/// Within the block the intra-spacing grows by 2 per row while indent shrinks
/// by 1 and inter-spacing shrinks by 2 (floored at 0). The closing recurrence
/// (derive from intra when inter bottomed out) reproduces the visual contract
/// exactly; do not simplify it.
fn write_branch_rows<T, W: Write>(
    tree: &BinaryTree<T>,
    buffer: &[Option<Index>],
    mut branch_len: usize,
    mut indent: usize,
    mut inter_spacing: usize,
    out: &mut W,
) -> RenderResult<usize> {
    let mut intra_spacing = 1;

    while branch_len > 0 {
        write!(out, "{}", " ".repeat(indent))?;
        for slot in buffer {
            match slot.and_then(|idx| tree.node(idx)) {
                Some(node) => {
                    let left = if node.left.is_some() { '/' } else { ' ' };
                    let right = if node.right.is_some() { '\\' } else { ' ' };
                    write!(
                        out,
                        "{}{}{}{}",
                        left,
                        " ".repeat(intra_spacing),
                        right,
                        " ".repeat(inter_spacing)
                    )?;
                }
                None => {
                    write!(out, "{}", " ".repeat(1 + intra_spacing + 1 + inter_spacing))?;
                }
            }
        }
        writeln!(out)?;

        indent -= 1;
        branch_len -= 1;
        intra_spacing += 2;
        inter_spacing = inter_spacing.saturating_sub(2);
    }

    Ok(if inter_spacing == 0 {
        intra_spacing - 2
    } else {
        inter_spacing - 2
    })
}

/// Emits the label row for the children of the nodes in `buffer`.
///
/// Groups are separated by the current inter-spacing; the last group carries
/// no trailing gap.
fn write_label_row<T: Display, W: Write>(
    tree: &BinaryTree<T>,
    buffer: &[Option<Index>],
    indent: usize,
    mut inter_spacing: usize,
    out: &mut W,
) -> RenderResult<()> {
    let blank_label = " ".repeat(LABEL_WIDTH);

    write!(out, "{}", " ".repeat(indent))?;
    for (pos, slot) in buffer.iter().enumerate() {
        match slot.and_then(|idx| tree.node(idx)) {
            Some(node) => {
                write_child_label(tree, node.left, &blank_label, out)?;
                write!(out, "{}", " ".repeat(inter_spacing))?;
                write_child_label(tree, node.right, &blank_label, out)?;
            }
            None => {
                write!(
                    out,
                    "{}",
                    " ".repeat(LABEL_WIDTH + inter_spacing + LABEL_WIDTH)
                )?;
            }
        }
        if pos + 1 == buffer.len() {
            inter_spacing = 0;
        }
        write!(out, "{}", " ".repeat(inter_spacing))?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_child_label<T: Display, W: Write>(
    tree: &BinaryTree<T>,
    child: Option<Index>,
    blank_label: &str,
    out: &mut W,
) -> RenderResult<()> {
    match child.and_then(|idx| tree.node(idx)) {
        Some(node) => write!(out, "({})", node.value)?,
        None => write!(out, "{}", blank_label)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_tree() -> BinaryTree<char> {
        let mut tree = BinaryTree::new();
        let a = tree.insert_root('A');
        let b = tree.insert_left(a, 'B');
        tree.insert_right(a, 'C');
        tree.insert_left(b, 'D');
        tree
    }

    #[test]
    fn test_materialize_levels_pads_to_power_of_two() {
        let tree = sparse_tree();
        let levels = materialize_levels(&tree);

        assert_eq!(levels.len(), 3);
        for (k, level) in levels.iter().enumerate() {
            assert_eq!(level.len(), 1 << k);
        }
        // D is the only node at depth 3; its three siblings are padding.
        assert_eq!(levels[2].iter().filter(|slot| slot.is_some()).count(), 1);
    }

    #[test]
    fn test_materialize_levels_empty_tree() {
        let tree: BinaryTree<char> = BinaryTree::new();
        assert!(materialize_levels(&tree).is_empty());
    }

    #[test]
    fn test_materialize_levels_stops_at_all_leaf_frontier() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root('A');
        tree.insert_left(root, 'B');
        tree.insert_right(root, 'C');

        let levels = materialize_levels(&tree);
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_branch_len_shrinks_geometrically() {
        assert_eq!(branch_len(4, 1), 7);
        assert_eq!(branch_len(4, 2), 3);
        assert_eq!(branch_len(4, 3), 1);
        assert_eq!(branch_len(4, 4), 0);
    }
}
