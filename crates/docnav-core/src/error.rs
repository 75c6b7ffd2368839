//! Error types and handling for docnav-core operations.
//!
//! Every fallible operation in the crate returns [`Result<T, Error>`]. Errors are
//! grouped into a few categories so callers (the CLI, an HTTP layer) can map them
//! onto their own status codes without string matching.
//!
//! ## Error Categories
//!
//! - **Validation**: a required parameter is missing or malformed. Raised before
//!   any storage access.
//! - **Not found**: the requested document does not exist.
//! - **Storage / I/O**: reading the document collection failed.
//! - **Configuration**: the config file cannot be read or parsed.
//!
//! ```rust
//! use docnav_core::Error;
//!
//! let err = Error::Validation("Invalid search query.".into());
//! assert_eq!(err.category(), "validation");
//! ```

use thiserror::Error;

/// The main error type for docnav-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required parameter is missing or malformed.
    ///
    /// Raised for bad document ids and for search queries that are empty once
    /// decoded and stripped of tags. Always returned before any document is read.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested document does not exist in the collection.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reading or enumerating the document collection failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in the config file
    /// - Config directory cannot be determined on this platform
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Short category name for logging and exit-code mapping.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Storage(_) => "storage",
            Self::Io(_) => "io",
            Self::Config(_) => "config",
        }
    }

    /// Convert an I/O failure on a specific document into the right variant.
    ///
    /// A missing file becomes [`Error::NotFound`]; anything else stays an I/O error
    /// with the document id attached.
    pub(crate) fn from_read(id: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(format!("document '{id}'"))
        } else {
            Self::Io(std::io::Error::new(
                err.kind(),
                format!("failed to read document '{id}': {err}"),
            ))
        }
    }
}

/// Result alias used throughout docnav-core.
pub type Result<T> = std::result::Result<T, Error>;
