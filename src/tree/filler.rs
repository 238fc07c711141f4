use crate::constants::{BLOCK_SIZE, FILLER_BYTE};
use crate::entropy::Entropy;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::Write,
    ops::Range,
    path::Path,
};

/// Creates (or truncates) `path` and fills it with a random number of
/// 1 KiB blocks of `*`. Returns the number of bytes written.
///
/// The file is synced before returning.
pub fn fill_file(
    entropy: &mut dyn Entropy,
    path: &Path,
    blocks: Range<u32>,
) -> Result<u64> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let count = entropy.draw(blocks);
    let block = [FILLER_BYTE; BLOCK_SIZE];
    for _ in 0..count {
        file.write_all(&block)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    file.sync_all()
        .with_context(|| format!("syncing {}", path.display()))?;
    Ok(count as u64 * BLOCK_SIZE as u64)
}
