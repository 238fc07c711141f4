//! Reads a generated fixture back from disk.
//!
//! The listing is what the backup cleanup tool would see: one timestamped
//! directory per backup, each with a nested tree of files.

use crate::timestamp::parse_dir_name;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use ignore::WalkBuilder;
use path_slash::PathExt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyEntry {
    /// Relative to the survey root, `/`-separated.
    pub path: String,
    pub kind: EntryKind,
    /// Byte length; 0 for directories.
    pub len: u64,
    /// Tree depth of the directory itself, or of the directory holding the
    /// file. Timestamped directories are depth 1.
    pub depth: usize,
}

impl SurveyEntry {
    /// Path of the containing directory, `""` for entries directly under the root.
    pub fn parent(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(parent, _)| parent)
    }
}

/// One top-level directory and what it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    pub name: String,
    /// `None` when the directory name is not a `%F_%H%M_%S` timestamp.
    pub timestamp: Option<NaiveDateTime>,
    pub files: usize,
    pub bytes: u64,
}

#[derive(Debug, Clone)]
pub struct Survey {
    pub root: PathBuf,
    /// Sorted by path.
    pub entries: Vec<SurveyEntry>,
}

/// Walks everything below `root` (hidden files and ignore rules included).
pub fn survey(root: &Path) -> Result<Survey> {
    let walker = WalkBuilder::new(root)
        .follow_links(false)
        .standard_filters(false)
        .build();

    let mut entries = Vec::new();
    for entry_result in walker {
        let entry = entry_result.with_context(|| format!("walking {}", root.display()))?;
        if entry.depth() == 0 {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", entry.path().display(), root.display()))?;
        let meta = entry.metadata()?;
        let (kind, len, depth) = if meta.is_dir() {
            (EntryKind::Dir, 0, entry.depth())
        } else {
            (EntryKind::File, meta.len(), entry.depth() - 1)
        };
        entries.push(SurveyEntry {
            path: rel.to_slash_lossy().into_owned(),
            kind,
            len,
            depth,
        });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(Survey {
        root: root.to_path_buf(),
        entries,
    })
}

impl Survey {
    pub fn files(&self) -> impl Iterator<Item = &SurveyEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }

    pub fn dirs(&self) -> impl Iterator<Item = &SurveyEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Dir)
    }

    /// Immediate children of `dir` (`""` for the root).
    pub fn children<'a>(
        &'a self,
        dir: &'a str,
    ) -> impl Iterator<Item = &'a SurveyEntry> + 'a {
        self.entries.iter().filter(move |e| e.parent() == dir)
    }

    pub fn total_bytes(&self) -> u64 {
        self.files().map(|e| e.len).sum()
    }

    /// Per top-level directory rollup, in name order.
    pub fn backups(&self) -> Vec<Backup> {
        self.children("")
            .filter(|e| e.kind == EntryKind::Dir)
            .map(|top| {
                let prefix = format!("{}/", top.path);
                let (files, bytes) = self
                    .files()
                    .filter(|f| f.path.starts_with(&prefix))
                    .fold((0, 0), |(n, total), f| (n + 1, total + f.len));
                Backup {
                    name: top.path.clone(),
                    timestamp: parse_dir_name(&top.path),
                    files,
                    bytes,
                }
            })
            .collect()
    }

    /// One line per entry: `dir/` or `path size`.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| match e.kind {
                EntryKind::Dir => format!("{}/", e.path),
                EntryKind::File => format!("{} {}", e.path, e.len),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_nested_entries_with_depths() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let root = dir.path();
        fs::create_dir_all(root.join("2015-03-07_0405_06/dfoo0"))?;
        fs::write(root.join("2015-03-07_0405_06/bar0"), [b'*'; 1024])?;
        fs::write(root.join("2015-03-07_0405_06/dfoo0/foo0"), [b'*'; 2048])?;
        fs::create_dir(root.join("not-a-date"))?;

        let s = survey(root)?;
        assert_eq!(
            s.render(),
            "2015-03-07_0405_06/\n\
             2015-03-07_0405_06/bar0 1024\n\
             2015-03-07_0405_06/dfoo0/\n\
             2015-03-07_0405_06/dfoo0/foo0 2048\n\
             not-a-date/"
        );
        let depths: Vec<usize> = s.entries.iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![1, 1, 2, 2, 1]);
        assert_eq!(s.children("2015-03-07_0405_06").count(), 2);

        let backups = s.backups();
        assert_eq!(backups.len(), 2);
        assert_eq!(backups[0].files, 2);
        assert_eq!(backups[0].bytes, 3072);
        assert!(backups[0].timestamp.is_some());
        assert_eq!(backups[1].timestamp, None);
        Ok(())
    }
}
