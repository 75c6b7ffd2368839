//! CLI error handling with semantic exit codes.
//!
//! Errors are categorized so shell scripts can tell a missing document from a bad
//! query without parsing messages.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments or configuration |
//! | 3 | `NotFound` | Requested document not found |
//! | 4 | `InvalidQuery` | Empty query or malformed document id |
//! | 7 | `Integrity` | Document collection unreadable |
//!
//! # Usage
//!
//! ```bash
//! docnav get hosting
//! case $? in
//!     0) echo "Success" ;;
//!     3) echo "No such document" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

use tracing::debug;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    ///
    /// Use for CLI argument validation failures or configuration file errors.
    Usage = 2,

    /// Requested document not found (exit code 3).
    NotFound = 3,

    /// Query or parameter rejected by validation (exit code 4).
    ///
    /// Covers search queries that are empty after decoding and tag stripping,
    /// and document ids that are not plain word characters.
    InvalidQuery = 4,

    /// Document collection unreadable (exit code 7).
    ///
    /// Use when the docs directory cannot be listed or a document cannot be read.
    Integrity = 7,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::InvalidQuery => "invalid query",
            Self::Integrity => "integrity error",
        }
    }

    /// Category for an error raised by the core library.
    #[must_use]
    pub const fn from_core(err: &docnav_core::Error) -> Self {
        use docnav_core::Error;

        match err {
            Error::Validation(_) => Self::InvalidQuery,
            Error::NotFound(_) => Self::NotFound,
            Error::Storage(_) | Error::Io(_) => Self::Integrity,
            Error::Config(_) => Self::Usage,
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Fallback for errors that were never categorized explicitly.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("not found") || msg_lower.contains("no such") {
            return Self::NotFound;
        }

        if msg_lower.contains("query") || msg_lower.contains("validation") {
            return Self::InvalidQuery;
        }

        if msg_lower.contains("storage") || msg_lower.contains("failed to list") {
            return Self::Integrity;
        }

        if msg_lower.contains("config") || msg_lower.contains("invalid argument") {
            return Self::Usage;
        }

        Self::Internal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` with an [`ErrorCategory`] while preserving the full
/// error chain.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl From<docnav_core::Error> for CliError {
    fn from(err: docnav_core::Error) -> Self {
        debug!(category = err.category(), "core error: {err}");
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A `CliError` anywhere in the chain wins, then a core error, then the message
/// heuristics.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<docnav_core::Error>() {
        return ErrorCategory::from_core(core_err).exit_code();
    }
    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}
