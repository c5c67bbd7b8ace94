/*!
 * Reporting functionality for pcg
 *
 * Prints the end-of-run summary of an album build using the tabled library.
 */

use std::path::{Path, PathBuf};
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{Track, TraversalMode};
use crate::utils::format_file_size;

/// Information about one copied track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackReport {
    /// Position in the album
    pub position: usize,
    /// Source path relative to the source directory
    pub source: String,
    /// Destination path relative to the album directory
    pub destination: String,
    /// Bytes copied
    pub bytes: u64,
}

impl TrackReport {
    pub fn new(track: &Track, source_root: &Path, album_dir: &Path, bytes: u64) -> Self {
        Self {
            position: track.position,
            source: relative(&track.source, source_root),
            destination: relative(&track.destination, album_dir),
            bytes,
        }
    }
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

/// Statistics for an album build
#[derive(Debug, Clone)]
pub struct AlbumReport {
    /// Album directory the files were copied to
    pub destination: PathBuf,
    /// Traversal policy used
    pub mode: TraversalMode,
    /// Time taken to copy and tag
    pub duration: Duration,
    /// Copied tracks, in copy order
    pub tracks: Vec<TrackReport>,
}

impl AlbumReport {
    pub fn files_copied(&self) -> usize {
        self.tracks.len()
    }

    pub fn bytes_copied(&self) -> u64 {
        self.tracks.iter().map(|t| t.bytes).sum()
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    /// One line, like `Done (12)`
    Brief,
}

/// Report generator for album builds
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &AlbumReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            ReportFormat::Brief => format!("Done ({})", report.files_copied()),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &AlbumReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &AlbumReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Album".to_string(),
                value: report.destination.display().to_string(),
            },
            SummaryRow {
                key: "🔀 Order".to_string(),
                value: report.mode.to_string(),
            },
            SummaryRow {
                key: "🎵 Files Copied".to_string(),
                value: report.files_copied().to_string(),
            },
            SummaryRow {
                key: "💾 Bytes Copied".to_string(),
                value: format_file_size(report.bytes_copied()),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_tracks_table(&self, report: &AlbumReport) -> String {
        #[derive(Tabled)]
        struct TrackRow {
            #[tabled(rename = "#")]
            position: usize,

            #[tabled(rename = "Source")]
            source: String,

            #[tabled(rename = "Destination")]
            destination: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        // Long albums only show their first tracks
        let shown = if report.tracks.len() > 15 {
            &report.tracks[..10]
        } else {
            &report.tracks[..]
        };

        let rows: Vec<TrackRow> = shown
            .iter()
            .map(|track| TrackRow {
                position: track.position,
                source: track.source.clone(),
                destination: track.destination.clone(),
                size: format_file_size(track.bytes),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &AlbumReport) -> String {
        let tracks_title = if report.tracks.len() > 15 {
            "📋  FIRST 10 TRACKS IN COPY ORDER"
        } else {
            "📋  COPIED TRACKS"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            tracks_title,
            self.create_tracks_table(report),
            "✅  ALBUM COMPLETE",
            self.create_summary_table(report)
        )
    }
}
