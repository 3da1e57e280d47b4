use std::fmt::Display;
use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::parse::parse_tree;
use crate::render::print_tree;
use crate::tree::BinaryTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Render { expr } => _render(expr),
        Commands::Outline { expr } => _outline(expr),
        Commands::Demo => _demo(),
        Commands::Completion { shell } => _completion(*shell),
    }
}

#[instrument]
fn _render(expr: &str) -> CliResult<()> {
    debug!("expr: {:?}", expr);
    let tree = parse_tree(expr)?;
    warn_on_wide_labels(&tree);
    print_tree(&tree)?;
    Ok(())
}

#[instrument]
fn _outline(expr: &str) -> CliResult<()> {
    debug!("expr: {:?}", expr);
    let tree = parse_tree(expr)?;
    if let Some(outline) = tree.to_outline() {
        output::info(&outline);
    }
    Ok(())
}

#[instrument]
fn _demo() -> CliResult<()> {
    let tree = sample_tree();
    print_tree(&tree)?;
    Ok(())
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// The diagram assumes one printed character per label; wider labels skew
/// column alignment. Surface that as a warning, not an error.
fn warn_on_wide_labels<T: Display>(tree: &BinaryTree<T>) {
    if tree
        .iter()
        .any(|(_, node)| node.value.to_string().chars().count() != 1)
    {
        output::warning("labels wider than one character will skew the diagram; try 'outline'");
    }
}

/// Sample tree covering sparse levels: E and G are leaves, F has only a
/// left child.
pub fn sample_tree() -> BinaryTree<char> {
    let mut tree = BinaryTree::new();
    let a = tree.insert_root('A');
    let b = tree.insert_left(a, 'B');
    let c = tree.insert_right(a, 'C');
    let d = tree.insert_left(b, 'D');
    tree.insert_right(b, 'E');
    let f = tree.insert_left(c, 'F');
    tree.insert_right(c, 'G');
    tree.insert_left(d, 'H');
    tree.insert_right(d, 'I');
    tree.insert_left(f, 'L');
    tree
}
