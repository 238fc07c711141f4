#![allow(dead_code)]
use rebuild_fixture::config::Config;
use rebuild_fixture::survey::{EntryKind, Survey};
use std::fs;
use std::path::Path;

/// Default parameters, rooted at `<dir>/fixture`.
pub fn config_in(dir: &Path) -> Config {
    Config::default().with_target(dir.join("fixture"))
}

/// Checks every structural property of a generated fixture:
/// - each directory holds 1..=9 files
/// - directories above `max_depth` hold 1..=2 subdirectories, leaves none
/// - each file is 1..=63 KiB of `*`
pub fn assert_fixture_shape(
    survey: &Survey,
    max_depth: usize,
) {
    for dir in survey.dirs() {
        let files = survey
            .children(&dir.path)
            .filter(|e| e.kind == EntryKind::File)
            .count();
        let subdirs = survey
            .children(&dir.path)
            .filter(|e| e.kind == EntryKind::Dir)
            .count();
        assert!((1..=9).contains(&files), "{}: {files} files", dir.path);
        if dir.depth < max_depth {
            assert!((1..=2).contains(&subdirs), "{}: {subdirs} subdirs", dir.path);
        } else {
            assert_eq!(subdirs, 0, "{} is at depth {}", dir.path, dir.depth);
        }
        assert!(dir.depth <= max_depth, "{} too deep", dir.path);
    }

    for file in survey.files() {
        assert_eq!(file.len % 1024, 0, "{}", file.path);
        assert!((1024..=64512).contains(&file.len), "{}: {}", file.path, file.len);
        let bytes = fs::read(survey.root.join(&file.path)).unwrap();
        assert!(bytes.iter().all(|b| *b == b'*'), "{} has non-filler bytes", file.path);
    }
}
