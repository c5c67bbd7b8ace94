/*!
 * Configuration handling for pcg
 */

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{PcgError, Result};
use crate::tags::{TagOptions, DEFAULT_ENDPOINT};
use crate::types::{OrderingMode, TraversalMode};
use crate::utils::{is_audio_extension, AudioFilter};
use crate::{bail, ensure};

/// Command-line arguments for pcg
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "pcg",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy a tree of audio files into a numbered, tagged album",
    long_about = "Walks the source directory in natural (or lexicographic) order, copies every audio file to the destination with a zero-padded sequence prefix, and asks the tag service to write track number, title, artist and album tags."
)]
pub struct Args {
    /// Source directory
    #[clap(required_unless_present = "generate")]
    pub src: Option<String>,

    /// Destination directory
    #[clap(required_unless_present = "generate")]
    pub dst: Option<String>,

    /// Verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Use file name for title tag
    #[clap(short = 'f', long)]
    pub file_title: bool,

    /// Sort files lexicographically
    #[clap(short = 'x', long)]
    pub sort_lex: bool,

    /// Retain the tree structure of the source album at destination
    #[clap(short = 't', long)]
    pub tree_dst: bool,

    /// Do not create destination directory
    #[clap(short = 'p', long)]
    pub drop_dst: bool,

    /// Copy files in reverse order (last file first)
    #[clap(short = 'r', long)]
    pub reverse: bool,

    /// Accept only audio files of the specified type
    #[clap(short = 'e', long)]
    pub file_type: Option<String>,

    /// Base name for everything but the "Artist" tag
    #[clap(short = 'u', long)]
    pub unified_name: Option<String>,

    /// Album number
    #[clap(short = 'b', long)]
    pub album_num: Option<u32>,

    /// "Artist" tag
    #[clap(short = 'a', long)]
    pub artist_tag: Option<String>,

    /// "Album" tag
    #[clap(short = 'g', long)]
    pub album_tag: Option<String>,

    /// Tag service address
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Seconds to wait for each tag service reply (waits forever if not given)
    #[clap(long, value_name = "SECONDS")]
    pub reply_timeout: Option<u64>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Source directory
    pub source_dir: PathBuf,

    /// Destination directory (the album directory is created inside it)
    pub destination_dir: PathBuf,

    /// Print every copied file
    pub verbose: bool,

    /// Use the decorated file name as title tag
    pub file_name_as_title: bool,

    /// Byte-wise instead of natural ordering
    pub lexical_sort: bool,

    /// Mirror the source tree at the destination
    pub tree_destination: bool,

    /// Copy straight into the destination directory
    pub drop_destination: bool,

    /// Copy in reverse order
    pub reverse_order: bool,

    /// Only accept this audio extension
    pub file_type: Option<String>,

    /// Base name replacing every file name and the album directory name
    pub unified_name: Option<String>,

    /// Album number, prefixed to the unified album directory name
    pub album_number: Option<u32>,

    /// "Artist" tag value
    pub artist_tag: Option<String>,

    /// "Album" tag value
    pub album_tag: Option<String>,

    /// Tag service address
    pub endpoint: String,

    /// Time to wait for each tag service reply
    pub reply_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::new(),
            destination_dir: PathBuf::new(),
            verbose: false,
            file_name_as_title: false,
            lexical_sort: false,
            tree_destination: false,
            drop_destination: false,
            reverse_order: false,
            file_type: None,
            unified_name: None,
            album_number: None,
            artist_tag: None,
            album_tag: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            reply_timeout: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            source_dir: PathBuf::from(args.src.unwrap_or_default()),
            destination_dir: PathBuf::from(args.dst.unwrap_or_default()),
            verbose: args.verbose,
            file_name_as_title: args.file_title,
            lexical_sort: args.sort_lex,
            tree_destination: args.tree_dst,
            drop_destination: args.drop_dst,
            reverse_order: args.reverse,
            file_type: non_empty(args.file_type),
            unified_name: non_empty(args.unified_name),
            album_number: args.album_num,
            artist_tag: non_empty(args.artist_tag),
            album_tag: non_empty(args.album_tag),
            endpoint: args.endpoint,
            reply_timeout: args.reply_timeout.map(Duration::from_secs),
        }
    }

    /// Validate the configuration; nothing is written before this passes
    pub fn validate(&self) -> Result<()> {
        self.traversal_mode()?;

        if let Some(ext) = &self.file_type {
            ensure!(
                is_audio_extension(ext),
                Config,
                "\"{}\" is not a supported audio file type",
                ext
            );
        }

        if self.endpoint.trim().is_empty() {
            bail!(Config, "tag service endpoint is empty");
        }

        if !self.source_dir.is_dir() {
            return Err(PcgError::SourceNotFound(self.source_dir.clone()));
        }

        if !self.destination_dir.is_dir() {
            return Err(PcgError::DestinationNotFound(self.destination_dir.clone()));
        }

        Ok(())
    }

    /// Traversal policy selected by the tree and reverse switches
    pub fn traversal_mode(&self) -> Result<TraversalMode> {
        TraversalMode::from_flags(self.tree_destination, self.reverse_order)
    }

    /// Ordering applied to directories and files alike
    pub fn ordering(&self) -> OrderingMode {
        OrderingMode::from_flags(self.lexical_sort, self.reverse_order)
    }

    /// Predicate for files that take part in the album
    pub fn audio_filter(&self) -> AudioFilter {
        match &self.file_type {
            Some(ext) => AudioFilter::only(ext.clone()),
            None => AudioFilter::any(),
        }
    }

    /// Tag values for the tag service
    pub fn tag_options(&self) -> TagOptions {
        TagOptions {
            artist: self.artist_tag.clone(),
            album: self.album_tag.clone(),
            file_name_as_title: self.file_name_as_title,
        }
    }
}
