//! User-facing command implementations
//!
//! Commands take a writer and render their output into it, leaving process
//! concerns (argument parsing, exit codes) to the binary:
//!
//! - `scan`: Stream dirty repositories to the writer as they are found
//! - `open`: Pass-through launch of the configured editor on a repository

pub mod open;
pub mod scan;
