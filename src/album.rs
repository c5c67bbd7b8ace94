/*!
 * Album building: destination setup, traversal, copy and tagging
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::copy::copy_file;
use crate::error::{PcgError, Result};
use crate::lister::TreeLister;
use crate::naming::zero_pad;
use crate::natural::Comparator;
use crate::report::{AlbumReport, TrackReport};
use crate::tags::{TagOptions, TagRequest, TagService};
use crate::traversal::Traversal;
use crate::types::Track;
use crate::utils::base_name;

/// Width of the album number prefix
const ALBUM_NUMBER_WIDTH: usize = 2;

/// Name of the album directory created inside the destination.
///
/// With a unified name this is `[NN-]<unified name>`, otherwise the source
/// directory's own name.
pub fn album_dir_name(config: &Config, source_name: &str) -> String {
    match &config.unified_name {
        Some(unified) => {
            let prefix = config
                .album_number
                .map(|n| format!("{}-", zero_pad(ALBUM_NUMBER_WIDTH, n as usize)))
                .unwrap_or_default();
            format!("{}{}", prefix, unified)
        }
        None => source_name.to_string(),
    }
}

/// Builds one album from a validated configuration
pub struct Album<T> {
    config: Config,
    tags: T,
    progress: ProgressBar,
}

impl<T: TagService> Album<T> {
    /// Create an album builder around a connected tag service
    pub fn new(config: Config, tags: T, progress: ProgressBar) -> Self {
        Self {
            config,
            tags,
            progress,
        }
    }

    /// Consume the builder and hand back the tag service
    pub fn into_tag_service(self) -> T {
        self.tags
    }

    /// Copy and tag every qualifying file; stops at the first failure
    pub fn build(&mut self) -> Result<AlbumReport> {
        let Self {
            config,
            tags,
            progress,
        } = self;

        config.validate()?;
        let mode = config.traversal_mode()?;
        let source = fs::canonicalize(&config.source_dir)?;

        let filter = config.audio_filter();
        let lister = TreeLister::new(Comparator::new(config.ordering()), |path: &Path| {
            filter.matches(path)
        });

        let total = lister.count_qualifying_files(&source);
        if total == 0 {
            return Err(PcgError::EmptySource(source));
        }

        let album_dir = prepare_destination(config, &source_name(&config.source_dir, &source))?;
        log::info!(
            "Copying {} files from {} to {} ({})",
            total,
            source.display(),
            album_dir.display(),
            mode
        );

        progress.set_length(total as u64);
        let tag_options = config.tag_options();
        let verbose = config.verbose;
        let start = Instant::now();
        let mut tracks = Vec::with_capacity(total);

        Traversal::new(&lister, mode, total)
            .with_unified_name(config.unified_name.clone())
            .run(&source, &album_dir, &mut |track: Track| {
                let bytes = copy_and_tag(&track, &mut *tags, &tag_options)?;
                if verbose {
                    progress.suspend(|| {
                        println!("{:>5}/{} {}", track.position, track.total, track.destination.display())
                    });
                }
                progress.inc(1);
                tracks.push(TrackReport::new(&track, &source, &album_dir, bytes));
                Ok(())
            })?;

        Ok(AlbumReport {
            destination: album_dir,
            mode,
            duration: start.elapsed(),
            tracks,
        })
    }
}

/// Name of the source directory as given on the command line.
///
/// Symlinks are not followed; `.` and `..` fall back to the resolved name.
fn source_name(given: &Path, canonical: &Path) -> String {
    match given.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => base_name(canonical),
    }
}

/// Work out the album directory and create it unless files go straight to the destination
fn prepare_destination(config: &Config, source_name: &str) -> Result<PathBuf> {
    if config.drop_destination {
        return Ok(config.destination_dir.clone());
    }

    let album_dir = config
        .destination_dir
        .join(album_dir_name(config, source_name));
    if album_dir.exists() {
        return Err(PcgError::DestinationExists(album_dir));
    }
    fs::create_dir(&album_dir).map_err(|source| PcgError::CreateDir {
        path: album_dir.clone(),
        source,
    })?;
    Ok(album_dir)
}

/// Copy one file and wait for the tag service to acknowledge its tags
fn copy_and_tag<T: TagService>(track: &Track, tags: &mut T, options: &TagOptions) -> Result<u64> {
    let bytes = copy_file(&track.source, &track.destination).map_err(|source| PcgError::Copy {
        src: track.source.clone(),
        dst: track.destination.clone(),
        source,
    })?;
    log::debug!(
        "Copied {} -> {} ({} bytes)",
        track.source.display(),
        track.destination.display(),
        bytes
    );

    let request = TagRequest::build(track.position, track.total, &track.destination, options);
    let reply = tags.set_tags(&request)?;
    log::trace!("Tag service replied: {}", reply);

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_dir_name() {
        let mut config = Config::default();
        assert_eq!(album_dir_name(&config, "Source Album"), "Source Album");

        config.unified_name = Some("Tolkien".to_string());
        assert_eq!(album_dir_name(&config, "Source Album"), "Tolkien");

        config.album_number = Some(3);
        assert_eq!(album_dir_name(&config, "Source Album"), "03-Tolkien");
    }

    #[test]
    fn test_source_name_keeps_given_path() {
        let canonical = Path::new("/library/Real Album");
        assert_eq!(source_name(Path::new("/links/Album/"), canonical), "Album");
        assert_eq!(source_name(Path::new("Album//"), canonical), "Album");
        assert_eq!(source_name(Path::new("."), canonical), "Real Album");
        assert_eq!(source_name(Path::new("../.."), canonical), "Real Album");
    }

    #[test]
    fn test_album_number_needs_unified_name() {
        let config = Config {
            album_number: Some(7),
            ..Config::default()
        };
        assert_eq!(album_dir_name(&config, "Src"), "Src");
    }
}
