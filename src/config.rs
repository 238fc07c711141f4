use crate::cli::Cli;
use crate::constants::{
    BLOCKS_PER_FILE, FILES_PER_DIR, MAX_DEPTH, SUBDIRS_PER_DIR, TARGET_DIR, TOP_LEVEL_DIRS,
};
use anyhow::Result;
use clap::Parser;
use std::ops::Range;
use std::path::PathBuf;

/// Generation parameters. The binary always runs with `Config::default()`;
/// the fields exist so the library can build smaller trees.
#[derive(Debug, Clone)]
pub struct Config {
    pub target: PathBuf,
    pub top_level_dirs: usize,
    pub max_depth: u32,
    pub files_per_dir: Range<u32>,
    pub subdirs_per_dir: Range<u32>,
    pub blocks_per_file: Range<u32>,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target: PathBuf::from(TARGET_DIR),
            top_level_dirs: TOP_LEVEL_DIRS,
            max_depth: MAX_DEPTH,
            files_per_dir: FILES_PER_DIR,
            subdirs_per_dir: SUBDIRS_PER_DIR,
            blocks_per_file: BLOCKS_PER_FILE,
            verbose: false,
        }
    }
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        let cli = Cli::parse();
        Ok(Config {
            verbose: cli.verbose,
            ..Config::default()
        })
    }

    /// Same parameters, rooted somewhere other than `./fixture`.
    pub fn with_target(
        mut self,
        target: impl Into<PathBuf>,
    ) -> Self {
        self.target = target.into();
        self
    }
}
