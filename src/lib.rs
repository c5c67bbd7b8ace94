/*!
 * pcg - Copy a tree of audio files into a numbered, tagged album
 *
 * This library walks a source directory in natural order, copies every
 * qualifying audio file under a sequence-prefixed name and asks an external
 * tag service to write track number, title, artist and album tags.
 */

pub mod album;
pub mod config;
pub mod copy;
pub mod error;
pub mod initials;
pub mod lister;
pub mod naming;
pub mod natural;
pub mod report;
pub mod tags;
pub mod traversal;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use album::Album;
pub use config::{Args, Config};
pub use error::{PcgError, Result};
pub use initials::make_initials;
pub use lister::TreeLister;
pub use natural::{compare_naturally, Comparator, SortKey};
pub use report::{AlbumReport, ReportFormat, Reporter, TrackReport};
pub use tags::{TagService, ZmqTagClient};
pub use traversal::Traversal;
pub use types::{Collation, Direction, OrderingMode, Track, TraversalMode};
pub use utils::{format_file_size, is_audio_file};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
