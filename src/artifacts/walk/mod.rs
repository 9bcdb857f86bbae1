//! Directory traversal and exclusion policy
//!
//! ## Components
//!
//! - `walker`: Lazy iterator over repository-root candidates

pub mod walker;

/// The directory name that marks its parent as a repository root.
pub const GIT_DIR_NAME: &str = ".git";

/// Dependency-cache directory names that are pruned without emission.
pub const EXCLUDED_DIR_NAMES: [&str; 1] = ["node_modules"];
