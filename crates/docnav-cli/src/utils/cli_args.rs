use clap::Args;
use is_terminal::IsTerminal;

use crate::output::OutputFormat;

/// Shared clap argument for commands that accept an output format.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format (`--format` / `-f`). Defaults to text for terminals, json for pipes.
    #[arg(short = 'f', long = "format", value_enum, env = "DOCNAV_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Output as JSON (shorthand for --format json).
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl FormatArg {
    /// Returns the effective output format. An explicit flag wins; otherwise text on a
    /// terminal and JSON when stdout is piped.
    #[must_use]
    pub fn resolve(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        if let Some(format) = self.format {
            return format;
        }
        if std::io::stdout().is_terminal() {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    }
}
