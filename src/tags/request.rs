//! The `settags` request document

use std::path::Path;

use serde::Serialize;

use crate::initials::make_initials;
use crate::utils::{base_name, sans_ext};

/// Request name understood by the tag service
pub const SET_TAGS: &str = "settags";

/// Caller-supplied tag values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// Value of the "Artist" tag
    pub artist: Option<String>,
    /// Value of the "Album" tag
    pub album: Option<String>,
    /// Take the title from the decorated file name
    pub file_name_as_title: bool,
}

/// Tags written to one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tags {
    pub tracknumber: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

/// A single `settags` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRequest {
    pub request: &'static str,
    pub file: String,
    pub tags: Tags,
}

impl TagRequest {
    /// Compose the request for the file copied to `destination` at `position`
    pub fn build(position: usize, total: usize, destination: &Path, options: &TagOptions) -> Self {
        let title = |s: &str| {
            if options.file_name_as_title {
                sans_ext(&base_name(destination)).to_string()
            } else {
                format!("{} {}", position, s)
            }
        };

        let artist = options.artist.as_deref().filter(|a| !a.is_empty());
        let album = options.album.as_deref().filter(|a| !a.is_empty());

        let mut tags = Tags {
            tracknumber: format!("{}/{}", position, total),
            title: None,
            artist: None,
            album: None,
        };

        match (artist, album) {
            (Some(artist), Some(album)) => {
                tags.title = Some(format!("{} - {}", title(make_initials(artist).as_str()), album));
                tags.artist = Some(artist.to_string());
                tags.album = Some(album.to_string());
            }
            (Some(artist), None) => {
                tags.title = Some(title(artist));
                tags.artist = Some(artist.to_string());
            }
            (None, Some(album)) => {
                tags.title = Some(title(album));
                tags.album = Some(album.to_string());
            }
            (None, None) => {}
        }

        Self {
            request: SET_TAGS,
            file: destination.to_string_lossy().to_string(),
            tags,
        }
    }

    /// Encode as the JSON text sent on the wire
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(artist: Option<&str>, album: Option<&str>, file_title: bool) -> TagOptions {
        TagOptions {
            artist: artist.map(String::from),
            album: album.map(String::from),
            file_name_as_title: file_title,
        }
    }

    #[test]
    fn test_tracknumber_only() {
        let request = TagRequest::build(3, 12, Path::new("/a/03-x.mp3"), &TagOptions::default());
        assert_eq!(
            request.to_json().unwrap(),
            r#"{"request":"settags","file":"/a/03-x.mp3","tags":{"tracknumber":"3/12"}}"#
        );
    }

    #[test]
    fn test_artist_and_album() {
        let request = TagRequest::build(
            7,
            20,
            Path::new("/a/07-x.mp3"),
            &options(Some("John Ronald Reuel Tolkien"), Some("The Hobbit"), false),
        );
        assert_eq!(request.tags.title.as_deref(), Some("7 J.R.R.T. - The Hobbit"));
        assert_eq!(request.tags.artist.as_deref(), Some("John Ronald Reuel Tolkien"));
        assert_eq!(request.tags.album.as_deref(), Some("The Hobbit"));
        assert_eq!(
            request.to_json().unwrap(),
            r#"{"request":"settags","file":"/a/07-x.mp3","tags":{"tracknumber":"7/20","title":"7 J.R.R.T. - The Hobbit","artist":"John Ronald Reuel Tolkien","album":"The Hobbit"}}"#
        );
    }

    #[test]
    fn test_artist_only() {
        let request = TagRequest::build(1, 2, Path::new("/a/1-x.mp3"), &options(Some("Nick Drake"), None, false));
        assert_eq!(request.tags.title.as_deref(), Some("1 Nick Drake"));
        assert_eq!(request.tags.album, None);
    }

    #[test]
    fn test_album_only() {
        let request = TagRequest::build(2, 2, Path::new("/a/2-x.mp3"), &options(None, Some("Pink Moon"), false));
        assert_eq!(request.tags.title.as_deref(), Some("2 Pink Moon"));
        assert_eq!(request.tags.artist, None);
    }

    #[test]
    fn test_file_name_as_title() {
        let request = TagRequest::build(
            5,
            10,
            Path::new("/a/05-Chapter Five.m4b"),
            &options(Some("Leo Tolstoy"), Some("War and Peace"), true),
        );
        assert_eq!(
            request.tags.title.as_deref(),
            Some("05-Chapter Five - War and Peace")
        );

        let request = TagRequest::build(5, 10, Path::new("/a/05-x.m4b"), &options(None, Some("Peace"), true));
        assert_eq!(request.tags.title.as_deref(), Some("05-x"));
    }

    #[test]
    fn test_file_name_as_title_needs_a_tag() {
        let request = TagRequest::build(5, 10, Path::new("/a/05-x.m4b"), &options(None, None, true));
        assert_eq!(request.tags.title, None);
    }

    #[test]
    fn test_values_are_escaped() {
        let request = TagRequest::build(1, 1, Path::new("/a/1-\"q\".mp3"), &options(None, Some("A \"B\""), false));
        let json = request.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["tags"]["album"], "A \"B\"");
        assert_eq!(parsed["file"], "/a/1-\"q\".mp3");
    }
}
