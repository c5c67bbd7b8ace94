/*!
 * Utility functions for pcg
 */

use std::path::{is_separator, Path};

use once_cell::sync::Lazy;

/// Recognized audio file extensions, upper case, without the dot
pub static AUDIO_EXTENSIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["MP3", "M4A", "M4B", "OGG", "WMA", "FLAC"]);

/// Normalize an extension for comparison: no surrounding dots or spaces, upper case
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_matches(|c| c == '.' || c == ' ').to_uppercase()
}

/// Split a path string into (stem, extension); the extension keeps its dot.
///
/// Only the last path component is searched, so dots in parent directories
/// are never taken for an extension.
pub fn split_extension(path: &str) -> (&str, &str) {
    let name_start = path.rfind(is_separator).map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) => path.split_at(name_start + dot),
        None => (path, ""),
    }
}

/// Extension of a path string, dot included, or an empty string
pub fn extension(path: &str) -> &str {
    split_extension(path).1
}

/// Path string with the extension of its last component discarded
pub fn sans_ext(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    let trimmed = if trimmed.is_empty() { path } else { trimmed };
    split_extension(trimmed).0
}

/// Last component of a path (file name complete with extension)
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// True if `path` has extension `ext`, case and leading dot insensitive
pub fn has_ext_of(path: &Path, ext: &str) -> bool {
    let name = base_name(path);
    normalize_extension(extension(&name)) == normalize_extension(ext)
}

/// True if `ext` names one of the recognized audio formats
pub fn is_audio_extension(ext: &str) -> bool {
    let ext = normalize_extension(ext);
    AUDIO_EXTENSIONS.iter().any(|&known| known == ext)
}

/// True if `path` is a recognized audio file
pub fn is_audio_file(path: &Path) -> bool {
    AUDIO_EXTENSIONS.iter().any(|ext| has_ext_of(path, ext))
}

/// Predicate deciding which files take part in an album
#[derive(Debug, Clone, Default)]
pub struct AudioFilter {
    /// Accept only this extension instead of the whole allow-list
    only: Option<String>,
}

impl AudioFilter {
    /// Accept every recognized audio format
    pub fn any() -> Self {
        Self::default()
    }

    /// Accept a single audio format
    pub fn only(ext: impl Into<String>) -> Self {
        Self {
            only: Some(ext.into()),
        }
    }

    /// Check a file name or path against the filter
    pub fn matches(&self, path: &Path) -> bool {
        match &self.only {
            Some(ext) => is_audio_file(path) && has_ext_of(path, ext),
            None => is_audio_file(path),
        }
    }
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
