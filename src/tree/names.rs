use crate::constants::{DIR_PREFIX, NAME_TOKENS};
use crate::entropy::Entropy;

/// `foo3`, `bar3` or `baz3` for index 3.
pub fn file_name(
    entropy: &mut dyn Entropy,
    index: u32,
) -> String {
    format!("{}{index}", entropy.pick(&NAME_TOKENS))
}

/// Same scheme as [`file_name`] behind a `d` prefix: `dfoo0`, `dbaz1`, ...
pub fn dir_name(
    entropy: &mut dyn Entropy,
    index: u32,
) -> String {
    format!("{DIR_PREFIX}{}{index}", entropy.pick(&NAME_TOKENS))
}
