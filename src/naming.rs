//! `NNN-name` decoration of destination files and directories

use crate::utils::extension;

/// Width of the sequence prefix on destination directories
pub const DIR_PREFIX_WIDTH: usize = 3;

/// Render `n` in decimal, left-padded with zeros to at least `width` digits
pub fn zero_pad(width: usize, n: usize) -> String {
    format!("{:0width$}", n, width = width)
}

/// Number of decimal digits in `n`
pub fn digit_count(n: usize) -> usize {
    n.to_string().len()
}

/// Destination file name: `<pad>-<name>`, or `<pad>-<unified><ext>` when a
/// unified base name is given.
pub fn decorate_file(width: usize, position: usize, name: &str, unified: Option<&str>) -> String {
    match unified.filter(|u| !u.is_empty()) {
        Some(unified) => format!(
            "{}-{}{}",
            zero_pad(width, position),
            unified,
            extension(name)
        ),
        None => format!("{}-{}", zero_pad(width, position), name),
    }
}

/// Destination directory name, always padded to [`DIR_PREFIX_WIDTH`]
pub fn decorate_dir(position: usize, name: &str) -> String {
    format!("{}-{}", zero_pad(DIR_PREFIX_WIDTH, position), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad(4, 16), "0016");
        assert_eq!(zero_pad(2, 123), "123");
        assert_eq!(zero_pad(1, 0), "0");
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(1000), 4);
    }

    #[test]
    fn test_decorate_file() {
        assert_eq!(decorate_file(3, 1, "track.flac", None), "001-track.flac");
        assert_eq!(decorate_file(3, 1, "track.flac", Some("Album")), "001-Album.flac");
        assert_eq!(decorate_file(3, 1, "track.flac", Some("")), "001-track.flac");
        assert_eq!(decorate_file(1, 12, "b.mp3", None), "12-b.mp3");
    }

    #[test]
    fn test_decorate_dir() {
        assert_eq!(decorate_dir(0, "CD 1"), "000-CD 1");
        assert_eq!(decorate_dir(12, "Bonus"), "012-Bonus");
    }
}
