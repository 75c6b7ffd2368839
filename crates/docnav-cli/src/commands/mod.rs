//! Command implementations for the docnav CLI
//!
//! Each command lives in its own submodule and works against a
//! [`DocsService`](docnav_core::DocsService).

mod get;
mod search;
mod toc;
mod view;

pub use get::execute as get_document;
pub use search::execute as search;
pub use toc::execute as show_toc;
pub use view::execute as view_page;
