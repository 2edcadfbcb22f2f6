//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Synthesize a decision tree from text fragments and draw it as a diagram
#[derive(Parser, Debug)]
#[command(name = "maptree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Additional config file, applied on top of the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree diagram as SVG
    Render {
        #[command(flatten)]
        tree: TreeArgs,

        /// Output file (default: stdout)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Surface width in CSS pixels
        #[arg(long)]
        width: Option<f64>,

        /// Surface height in CSS pixels
        #[arg(long)]
        height: Option<f64>,

        /// Device pixels per CSS pixel
        #[arg(long)]
        dpr: Option<f64>,

        /// Extra viewport-settled repaints after the initial one
        #[arg(long, default_value_t = 0)]
        redraws: usize,
    },

    /// Print the synthesized tree with its layout
    Tree {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by commands that synthesize a tree.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Text file with one fragment per line (default: stdin)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Number of leaves
    #[arg(short, long)]
    pub nodes: Option<usize>,

    /// Seed for a reproducible tree
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show global config file location
    Path,
    /// Print a commented config template
    Template,
}
