use derive_new::new;
use std::path::{Path, PathBuf};

/// What a list renderer needs from an entry: a display title, a display
/// subtitle and a key to match user filters against.
pub trait ListEntry {
    fn title(&self) -> String;
    fn subtitle(&self) -> String;
    fn search_key(&self) -> String;
}

/// A repository classified as dirty, ready for display.
///
/// `path` is absolute; `status` is the formatted summary produced by the
/// parser. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RepositoryRecord {
    path: PathBuf,
    status: String,
}

impl RepositoryRecord {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl ListEntry for RepositoryRecord {
    fn title(&self) -> String {
        self.path.display().to_string()
    }

    fn subtitle(&self) -> String {
        self.status.clone()
    }

    fn search_key(&self) -> String {
        self.title()
    }
}
