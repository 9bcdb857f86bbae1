//! Find Git repositories with unsaved work beneath a root directory.
//!
//! The crate walks a directory tree, queries `git status` for every
//! repository root it finds, and streams the dirty ones to a consumer as
//! they are classified, without waiting for the whole tree to be scanned.

pub mod artifacts;
pub mod commands;

pub use artifacts::discovery::pipeline::{DiscoveryError, DiscoveryEvent, DiscoveryRun, Scanner};
pub use artifacts::discovery::record::{ListEntry, RepositoryRecord};
pub use artifacts::status::collector::{StatusError, collect_status};
pub use artifacts::status::facts::StatusFacts;
pub use artifacts::walk::walker::RepoWalker;
