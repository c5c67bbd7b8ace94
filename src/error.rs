//! Global error handling for pcg
//!
//! Every fatal condition of a run ends up as a [`PcgError`]. Configuration and
//! not-found errors are raised before anything is written; copy and tag-service
//! errors abort a run that is already underway and leave the destination as is.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::copy::CopyError;
use crate::tags::TagError;

/// Exit status used for every fatal condition
pub const FAILURE_EXIT_CODE: u8 = 2;

/// Global error type for pcg operations
#[derive(Error, Debug)]
pub enum PcgError {
    /// Incompatible or invalid options
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source directory is missing or not a directory
    #[error("Source directory \"{}\" is not there", .0.display())]
    SourceNotFound(PathBuf),

    /// Destination directory is missing or not a directory
    #[error("Destination path \"{}\" is not there", .0.display())]
    DestinationNotFound(PathBuf),

    /// Album directory already exists at the destination
    #[error("Destination directory \"{}\" already exists", .0.display())]
    DestinationExists(PathBuf),

    /// No qualifying audio files under the source directory
    #[error("There are no supported audio files in the source directory \"{}\"", .0.display())]
    EmptySource(PathBuf),

    /// Copying a single file failed
    #[error("Failed to copy \"{}\" to \"{}\": {source}", .src.display(), .dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: CopyError,
    },

    /// Creating a destination directory failed
    #[error("Failed to create directory \"{}\": {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Tag service errors
    #[error("Tag service error: {0}")]
    Tags(#[from] TagError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl PcgError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// True for errors raised before the destination is touched
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::SourceNotFound(_)
                | Self::DestinationNotFound(_)
                | Self::DestinationExists(_)
                | Self::EmptySource(_)
        )
    }
}

/// Specialized Result type for pcg operations
pub type Result<T> = std::result::Result<T, PcgError>;

/// Creates a PcgError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::PcgError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
