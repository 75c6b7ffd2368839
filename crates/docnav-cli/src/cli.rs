//! # CLI Structure and Argument Parsing
//!
//! `docnav` reads a directory of `<id>.md` documents and exposes what the viewer
//! would show: raw documents, assembled pages, tables of contents and search
//! digests.
//!
//! ## Usage Patterns
//!
//! ```bash
//! docnav get hosting
//! docnav view hosting/key-rotation --html
//! docnav toc hosting --format json
//! docnav search key rotation --limit 20
//! docnav --docs-dir ./site/docs search widget
//! ```
//!
//! ## Global Options
//!
//! - `--verbose` / `--quiet`: log level (logs go to stderr)
//! - `--config`: explicit config file
//! - `--docs-dir`: documents directory, overriding config and `DOCNAV_DOCS_DIR`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `docnav` command
#[derive(Parser, Clone, Debug)]
#[command(name = "docnav")]
#[command(version)]
#[command(about = "docnav - browse and search a directory of markdown documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to configuration file (overrides autodiscovery). Also via `DOCNAV_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "DOCNAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the markdown documents
    #[arg(long = "docs-dir", global = true, value_name = "DIR")]
    pub docs_dir: Option<PathBuf>,
}

/// Available subcommands for the `docnav` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Print a document's raw markdown
    Get {
        /// Document id (file name without `.md`)
        doc: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Assemble a document the way the viewer shows it
    ///
    /// The target is a route such as `hosting`, `hosting/key-rotation` or
    /// `search/<query>`.
    View {
        /// Route below `#Docs/`
        #[arg(value_name = "DOC[/ANCHOR]", default_value = "")]
        target: String,

        /// Print the rendered HTML instead of the markdown
        #[arg(long)]
        html: bool,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Show a document's table of contents
    Toc {
        /// Document id (file name without `.md`)
        doc: String,

        /// Minimum number of headings before a TOC is produced (defaults to config)
        #[arg(long, value_name = "N")]
        min_headings: Option<usize>,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Search every document for a substring
    Search {
        /// Query text; several words are joined with spaces
        #[arg(required = true, num_args = 1.., value_name = "QUERY")]
        query: Vec<String>,

        /// Maximum number of matches (defaults to config)
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,

        #[command(flatten)]
        format: FormatArg,
    },
}
