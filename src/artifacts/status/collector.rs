use crate::artifacts::status::facts::StatusFacts;
use crate::artifacts::status::{GIT_PROGRAM, STATUS_QUERY_ARGS};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Failure of the external status query for one candidate.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("failed to run git in {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("status query failed in {} (exit code {code}): {stderr}", .path.display())]
    Query {
        path: PathBuf,
        code: i32,
        stderr: String,
    },
}

/// Queries `git status --porcelain=v2` for the repository at `repo_path`
/// and parses the report into a fact record.
///
/// Blocking; the pipeline confines this call to its producer task.
pub fn collect_status(repo_path: &Path) -> Result<StatusFacts, StatusError> {
    let output = Command::new(GIT_PROGRAM)
        .args(STATUS_QUERY_ARGS)
        .current_dir(repo_path)
        .output()
        .map_err(|source| StatusError::Spawn {
            path: repo_path.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(StatusError::Query {
            path: repo_path.to_path_buf(),
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    // Paths in the report may not be valid UTF-8; only the counting tokens
    // matter here, so a lossy view is enough.
    let report = String::from_utf8_lossy(&output.stdout);
    let facts = StatusFacts::parse(&report);

    debug!(path = %repo_path.display(), clean = facts.is_clean(), "status collected");

    Ok(facts)
}
