use crate::artifacts::walk::{EXCLUDED_DIR_NAMES, GIT_DIR_NAME};
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Lazily yields repository-root candidates beneath a root directory.
///
/// A directory named `.git` marks its *parent* as a candidate: the parent
/// is emitted first and the marker subtree is pruned, so repository
/// internals are never descended into. Any other directory whose name
/// starts with a dot, or is a known dependency cache, is pruned without
/// emission. The root itself is exempt from exclusion so a hidden root can
/// still be scanned when asked for explicitly.
///
/// Traversal errors are yielded as `Err` items; severity is the caller's
/// call.
pub struct RepoWalker {
    entries: walkdir::IntoIter,
}

impl RepoWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            entries: WalkDir::new(root).into_iter(),
        }
    }
}

impl Iterator for RepoWalker {
    type Item = walkdir::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => return Some(Err(error)),
            };

            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();

            if name == GIT_DIR_NAME {
                // Detect, then prune: the marker's parent is the candidate.
                let candidate = entry.path().parent().map(Path::to_path_buf);
                self.entries.skip_current_dir();
                if let Some(candidate) = candidate {
                    return Some(Ok(candidate));
                }
            } else if is_excluded(&name) {
                trace!(path = %entry.path().display(), "pruning excluded directory");
                self.entries.skip_current_dir();
            }
        }

        None
    }
}

fn is_excluded(name: &str) -> bool {
    name.starts_with('.') || EXCLUDED_DIR_NAMES.contains(&name)
}
