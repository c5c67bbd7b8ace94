/*!
 * Core types and data structures for pcg
 */

use std::path::PathBuf;

use strum::Display;

/// How names are collated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Collation {
    /// Embedded digit runs compare as numbers
    #[default]
    Natural,
    /// Plain byte-wise string comparison
    Lexical,
}

/// Direction of the final ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Ordering mode shared by directory and file ordering within one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderingMode {
    pub collation: Collation,
    pub direction: Direction,
}

impl OrderingMode {
    pub fn new(collation: Collation, direction: Direction) -> Self {
        Self {
            collation,
            direction,
        }
    }

    /// Build the mode from the `lexical` and `reverse` switches
    pub fn from_flags(lexical: bool, reverse: bool) -> Self {
        Self {
            collation: if lexical {
                Collation::Lexical
            } else {
                Collation::Natural
            },
            direction: if reverse {
                Direction::Reverse
            } else {
                Direction::Forward
            },
        }
    }
}

/// Traversal policy of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TraversalMode {
    /// All files into one directory, numbered upwards from 1
    FlatForward,
    /// All files into one directory, numbered downwards from the total
    FlatReverse,
    /// Source structure mirrored at the destination
    TreeForward,
}

/// Kind of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory containing other entries
    Directory,
    /// Any other entry; `audio` tells whether it qualifies for the album
    File { audio: bool },
}

/// A child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Full path of the entry
    pub path: PathBuf,
    /// Directory or file classification
    pub kind: EntryKind,
}

impl PathEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// True for files accepted by the audio predicate
    pub fn qualifies(&self) -> bool {
        matches!(self.kind, EntryKind::File { audio: true })
    }
}

/// One copy operation emitted by the traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// 1-based position in the album
    pub position: usize,
    /// Total number of tracks in the album
    pub total: usize,
    /// Source audio file
    pub source: PathBuf,
    /// Decorated destination path
    pub destination: PathBuf,
}
