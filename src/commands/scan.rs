use crate::artifacts::discovery::pipeline::{DiscoveryEvent, Scanner};
use crate::artifacts::discovery::record::ListEntry;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

/// Scans the tree rooted at `path` (the current directory when absent) and
/// writes each dirty repository as soon as it is classified, followed by a
/// closing count line. Returns the number of dirty repositories found.
pub async fn scan(path: Option<&str>, writer: &mut dyn Write) -> anyhow::Result<usize> {
    let root = match path {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?,
    };

    let mut scanner = Scanner::new(root);
    let mut run = scanner.scan();
    let mut found = 0usize;

    while let Some(event) = run.next_event().await {
        match event {
            DiscoveryEvent::Repository(record) => {
                found += 1;
                writeln!(writer, "{}", record.title().bold())?;
                writeln!(writer, "    {}", record.subtitle())?;
            }
            DiscoveryEvent::Completed => break,
            DiscoveryEvent::Failed(error) => return Err(error.into()),
        }
    }

    let noun = if found == 1 {
        "repository"
    } else {
        "repositories"
    };
    writeln!(writer, "Found {found} dirty {noun}")?;

    Ok(found)
}
