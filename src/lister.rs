/*!
 * One-level directory listing, split and sorted for the traversal
 */

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::natural::{Comparator, SortKey};
use crate::types::{EntryKind, PathEntry};

/// Sorted children of one directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirContents {
    /// Every subdirectory, sorted on the full path
    pub dirs: Vec<PathBuf>,
    /// Qualifying files, sorted on the file name
    pub files: Vec<PathBuf>,
}

/// Result of reading a single directory level
#[derive(Debug)]
pub enum Listing {
    /// The directory was read; it may still be empty
    Read(Vec<PathEntry>),
    /// The directory itself could not be read
    Unreadable {
        path: PathBuf,
        error: walkdir::Error,
    },
}

/// Lists directory levels with a file predicate and a comparator
pub struct TreeLister<F> {
    comparator: Comparator,
    qualifies: F,
}

impl<F> TreeLister<F>
where
    F: Fn(&Path) -> bool,
{
    /// Create a lister; `qualifies` decides which files are kept
    pub fn new(comparator: Comparator, qualifies: F) -> Self {
        Self {
            comparator,
            qualifies,
        }
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Read the immediate children of `dir` and classify them, unsorted
    pub fn read_level(&self, dir: &Path) -> Listing {
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            match entry {
                Ok(entry) => {
                    let kind = if entry.file_type().is_dir() {
                        EntryKind::Directory
                    } else {
                        EntryKind::File {
                            audio: (self.qualifies)(entry.path()),
                        }
                    };
                    entries.push(PathEntry {
                        path: entry.into_path(),
                        kind,
                    });
                }
                Err(error) if error.depth() == 0 => {
                    return Listing::Unreadable {
                        path: dir.to_path_buf(),
                        error,
                    };
                }
                Err(error) => log::warn!("Skipping entry in {}: {}", dir.display(), error),
            }
        }

        Listing::Read(entries)
    }

    /// List subdirectories and qualifying files of `dir`, both sorted.
    ///
    /// An unreadable directory is logged and listed as empty.
    pub fn list(&self, dir: &Path) -> DirContents {
        let entries = match self.read_level(dir) {
            Listing::Read(entries) => entries,
            Listing::Unreadable { path, error } => {
                log::warn!("Cannot read directory {}: {}", path.display(), error);
                return DirContents::default();
            }
        };

        let mut contents = DirContents::default();
        for entry in entries {
            if entry.is_dir() {
                contents.dirs.push(entry.path);
            } else if entry.qualifies() {
                contents.files.push(entry.path);
            }
        }

        self.comparator.sort(&mut contents.dirs, SortKey::FullPath);
        self.comparator.sort(&mut contents.files, SortKey::FileName);
        contents
    }

    /// Count qualifying files under `dir`, recursively
    pub fn count_qualifying_files(&self, dir: &Path) -> usize {
        match self.read_level(dir) {
            Listing::Read(entries) => entries
                .iter()
                .map(|entry| {
                    if entry.is_dir() {
                        self.count_qualifying_files(&entry.path)
                    } else {
                        usize::from(entry.qualifies())
                    }
                })
                .sum(),
            Listing::Unreadable { path, error } => {
                log::warn!("Cannot read directory {}: {}", path.display(), error);
                0
            }
        }
    }
}
