/*!
 * Whole-file copy of a single audio file
 */

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for copy operations
#[derive(Error, Debug)]
pub enum CopyError {
    /// The source exists but is not a regular file
    #[error("{} is not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for copy operations
pub type Result<T> = std::result::Result<T, CopyError>;

/// Copy `src` to `dst`, creating or truncating `dst`.
///
/// Returns the number of bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let mut source = File::open(src)?;

    if !source.metadata()?.is_file() {
        return Err(CopyError::NotRegularFile(src.to_path_buf()));
    }

    let mut destination = File::create(dst)?;
    let copied = io::copy(&mut source, &mut destination)?;
    Ok(copied)
}
