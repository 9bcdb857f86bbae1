use anyhow::Context;
use tracing::debug;

/// Used when neither `$VISUAL` nor `$EDITOR` is set.
pub const FALLBACK_EDITOR: &str = "code";

/// Launches the configured editor on a repository path and waits for it to
/// exit. The core only passes the command through; which editor runs is
/// entirely the user's environment's business.
pub fn open_repository(path: &str) -> anyhow::Result<()> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| FALLBACK_EDITOR.to_string());

    debug!(%editor, path, "opening repository");

    let status = std::process::Command::new(&editor)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor {editor}"))?;

    if !status.success() {
        anyhow::bail!("editor {editor} exited with {status}");
    }

    Ok(())
}
