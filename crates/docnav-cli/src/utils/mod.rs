//! Shared helpers for the docnav CLI.
//!
//! - [`cli_args`]: reusable clap argument groups
//! - [`logging`]: tracing subscriber and color setup

pub mod cli_args;
pub mod logging;

pub use logging::initialize_logging;
