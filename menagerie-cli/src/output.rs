//! Writing the generated page.
//!
//! Content goes to `<path>.menagerie.tmp` first and is renamed over the
//! target, so a failed run never leaves a half-written page behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = PathBuf::from(format!("{}.menagerie.tmp", path.display()));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&tmp, content).with_context(|| format!("failed to write {}", tmp.display()))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to write {}", path.display()));
    }

    tracing::info!(bytes = content.len(), "wrote: {}", path.display());
    Ok(())
}
