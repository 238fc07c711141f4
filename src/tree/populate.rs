use crate::config::Config;
use crate::entropy::Entropy;
use crate::tree::filler::fill_file;
use crate::tree::names::{dir_name, file_name};
use crate::tree::types::Tally;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::debug;

/// Fills an existing directory sitting at `depth` with filler files and,
/// while `depth < config.max_depth`, with subdirectories populated the same
/// way one level deeper.
///
/// Draw order: file count, then (token, block count) per file, then
/// subdirectory count, then (token, whole subtree) per subdirectory.
pub fn populate(
    entropy: &mut dyn Entropy,
    config: &Config,
    dir: &Path,
    depth: u32,
) -> Result<Tally> {
    let mut tally = Tally::default();

    let num_files = entropy.draw(config.files_per_dir.clone());
    for n in 0..num_files {
        let path = dir.join(file_name(entropy, n));
        let bytes = fill_file(entropy, &path, config.blocks_per_file.clone())?;
        debug!(path = %path.display(), bytes, "wrote filler file");
        tally.files += 1;
        tally.bytes += bytes;
    }

    if depth < config.max_depth {
        let num_dirs = entropy.draw(config.subdirs_per_dir.clone());
        for n in 0..num_dirs {
            let subdir = dir.join(dir_name(entropy, n));
            fs::create_dir(&subdir)
                .with_context(|| format!("creating directory {}", subdir.display()))?;
            debug!(path = %subdir.display(), depth = depth + 1, "created subdirectory");
            tally.dirs += 1;
            tally.add(populate(entropy, config, &subdir, depth + 1)?);
        }
    }

    Ok(tally)
}
