// Centralized magic numbers & default values
use std::ops::Range;

pub const TARGET_DIR: &str = "fixture";
pub const DATE_FORMAT: &str = "%F_%H%M_%S";
pub const TOP_LEVEL_DIRS: usize = 30;
pub const MAX_DEPTH: u32 = 3;

pub const YEARS: Range<u32> = 2012..2022;
pub const MONTHS: Range<u32> = 1..12;
pub const DAYS: Range<u32> = 1..28;
pub const HOURS: Range<u32> = 0..23;
pub const MINUTES: Range<u32> = 0..59;
pub const SECONDS: Range<u32> = 0..59;

pub const FILES_PER_DIR: Range<u32> = 1..10;
pub const SUBDIRS_PER_DIR: Range<u32> = 1..3;
pub const BLOCKS_PER_FILE: Range<u32> = 1..64;

pub const BLOCK_SIZE: usize = 1024;
pub const FILLER_BYTE: u8 = b'*';
pub const NAME_TOKENS: [&str; 3] = ["foo", "bar", "baz"];
pub const DIR_PREFIX: &str = "d";

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "info";
