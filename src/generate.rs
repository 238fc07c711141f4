use crate::config::Config;
use crate::entropy::Entropy;
use crate::human_size::human_size;
use crate::io::reset::reset_dir;
use crate::timestamp;
use crate::tree::{Tally, populate};
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};

/// Rebuilds the fixture at `config.target`: wipe it, then create
/// `config.top_level_dirs` timestamp-named directories and populate each one
/// starting at depth 1.
///
/// Stops at the first filesystem error, leaving whatever was created so far.
/// Two draws of the same timestamp make the second `create_dir` fail.
pub fn generate(
    config: &Config,
    entropy: &mut dyn Entropy,
) -> Result<Tally> {
    reset_dir(&config.target)?;

    let mut tally = Tally::default();
    for _ in 0..config.top_level_dirs {
        let ts = timestamp::random_timestamp(entropy)?;
        let dir = config.target.join(timestamp::dir_name(&ts));
        fs::create_dir(&dir).with_context(|| format!("creating {}", dir.display()))?;
        debug!(path = %dir.display(), "created backup directory");
        tally.dirs += 1;
        tally.add(populate(entropy, config, &dir, 1)?);
    }

    info!(
        "Generated {} backups ({} directories, {} files, {}) under {}",
        config.top_level_dirs,
        tally.dirs,
        tally.files,
        human_size(tally.bytes),
        config.target.display()
    );
    Ok(tally)
}
