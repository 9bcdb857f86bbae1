//! Porcelain-v2 status collection and parsing
//!
//! ## Components
//!
//! - `collector`: Runs the external status query for one repository
//! - `facts`: The line-oriented parser and the fact record it accumulates

pub mod collector;
pub mod facts;

/// The external program answering status queries.
pub const GIT_PROGRAM: &str = "git";

/// Arguments requesting a machine-readable status report including the
/// stash count and the branch tracking header.
pub const STATUS_QUERY_ARGS: [&str; 4] = ["status", "--porcelain=v2", "--branch", "--show-stash"];
