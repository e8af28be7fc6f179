//! CLI argument definitions for checkblock.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checkblock")]
#[command(version)]
#[command(about = "Validate and persist data-quality check documents", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    checkblock init\n    checkblock save orders --path checks.yml --file orders-checks.yml\n    checkblock persist orders"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a block's inline check document comes from
#[derive(Args, Debug, Clone, Default)]
pub struct DocumentArgs {
    /// Inline check document text
    #[arg(long)]
    pub text: Option<String>,
    /// Read the check document from a local file
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the .checkblock directory and a default config
    Init {
        /// Overwrite an existing config.yml
        #[arg(long)]
        force: bool,
    },
    /// Check that a document is well-formed YAML without storing it
    Validate {
        /// Path the document would be persisted to
        #[arg(long)]
        path: PathBuf,
        #[command(flatten)]
        document: DocumentArgs,
        /// Also write the document to --path once it validates
        #[arg(long)]
        persist: bool,
    },
    /// Validate a block and store it under a name
    Save {
        /// Block name (letters, digits, '-' or '_')
        name: String,
        /// Path the document is persisted to
        #[arg(long)]
        path: PathBuf,
        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Show a stored block
    Show {
        /// Block name
        name: String,
    },
    /// List stored blocks
    List,
    /// Write a stored block's document to its path
    Persist {
        /// Block name
        name: String,
    },
    /// Delete a stored block
    Delete {
        /// Block name
        name: String,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
