//! Output formats for command results.
//!
//! - **Text**: markdown as the viewer would receive it, with a colored header
//!   where one makes sense
//! - **JSON**: the structured value behind the text, for scripts
//!
//! ```bash
//! docnav search "key rotation" --format text
//! docnav toc hosting --format json | jq '.[].anchor'
//! ```

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for CLI results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default for terminals).
    #[default]
    Text,
    /// Pretty-printed JSON (default for pipes).
    Json,
}

impl OutputFormat {
    /// Check if this format is machine-readable.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
