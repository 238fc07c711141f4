use anyhow::{Context, Result};
use std::{fs, io::ErrorKind, path::Path};

/// Leaves an empty directory at `target`, removing whatever was there first
/// (a previous fixture, a stray file, a symlink).
pub fn reset_dir(target: &Path) -> Result<()> {
    // symlink_metadata so a link is removed rather than followed
    match fs::symlink_metadata(target) {
        Ok(meta) => {
            tracing::info!("Removing existing {}", target.display());
            if meta.is_dir() {
                fs::remove_dir_all(target)
                    .with_context(|| format!("removing {}", target.display()))?;
            } else {
                fs::remove_file(target)
                    .with_context(|| format!("removing {}", target.display()))?;
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("inspecting {}", target.display()));
        }
    }
    fs::create_dir(target).with_context(|| format!("creating {}", target.display()))?;
    Ok(())
}
