//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Render binary trees as proportioned ASCII art diagrams
#[derive(Parser, Debug)]
#[command(name = "treeviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -d -d, -d -d -d)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a tree expression as an ASCII diagram
    ///
    /// Expression syntax: LABEL or LABEL(LEFT,RIGHT), with '.' marking an
    /// absent child, e.g. 'A(B(D(H,I),E),C(F(L,.),G))'.
    Render {
        /// Tree expression
        expr: String,
    },

    /// Show a tree expression as an indented outline
    Outline {
        /// Tree expression
        expr: String,
    },

    /// Render the built-in sample tree
    Demo,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
