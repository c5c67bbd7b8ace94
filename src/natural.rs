/*!
 * Natural (numeric-aware) ordering of names and paths
 *
 * A name's numeric key is the sequence of integers embedded in it. Two names
 * that both carry numbers are ordered by their keys; otherwise they fall back
 * to plain byte-wise comparison, so "2a" sorts before "10a" while "alfa"
 * still sorts before "bravo".
 */

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::types::{Collation, Direction, OrderingMode};
use crate::utils::{base_name, sans_ext};

/// Integers embedded in a string, in order of appearance
pub type NumericKey = Vec<u64>;

/// Extract every maximal run of ASCII digits as an unsigned integer.
///
/// Runs too long for `u64` saturate at `u64::MAX`.
pub fn extract_numbers(s: &str) -> NumericKey {
    let mut numbers = Vec::new();
    let mut current: Option<u64> = None;

    for c in s.chars() {
        match c.to_digit(10) {
            Some(digit) => {
                let value = current.unwrap_or(0);
                current = Some(value.saturating_mul(10).saturating_add(u64::from(digit)));
            }
            None => {
                if let Some(value) = current.take() {
                    numbers.push(value);
                }
            }
        }
    }
    if let Some(value) = current {
        numbers.push(value);
    }

    numbers
}

/// Compare numeric keys element by element.
///
/// An empty key sorts before any non-empty one, and a strict prefix sorts
/// before the longer key, which is exactly the lexicographic order of slices.
pub fn compare_numeric_keys(a: &[u64], b: &[u64]) -> Ordering {
    a.cmp(b)
}

/// Compare by embedded numbers if both strings have some, byte-wise otherwise
pub fn compare_naturally(x: &str, y: &str) -> Ordering {
    let a = extract_numbers(x);
    let b = extract_numbers(y);
    if !a.is_empty() && !b.is_empty() {
        compare_numeric_keys(&a, &b)
    } else {
        x.cmp(y)
    }
}

/// Which part of a path is compared when sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// The whole path (used for directories)
    FullPath,
    /// The last component only (used for files)
    FileName,
}

/// Path comparator configured with an ordering mode
#[derive(Debug, Clone, Copy)]
pub struct Comparator {
    mode: OrderingMode,
    ignore_extension: bool,
}

impl Comparator {
    /// Create a comparator that ignores extensions
    pub fn new(mode: OrderingMode) -> Self {
        Self {
            mode,
            ignore_extension: true,
        }
    }

    /// Choose whether extensions take part in comparisons
    pub fn with_ignore_extension(mut self, ignore_extension: bool) -> Self {
        self.ignore_extension = ignore_extension;
        self
    }

    pub fn mode(&self) -> OrderingMode {
        self.mode
    }

    /// Compare two path strings under the collation, ignoring direction.
    ///
    /// Distinct strings with equal numeric keys (`"A"` and `"B"` below a
    /// parent named `"2019"`) are ordered byte-wise so the result is total.
    pub fn compare_path(&self, x: &str, y: &str) -> Ordering {
        let (x, y) = if self.ignore_extension {
            (sans_ext(x), sans_ext(y))
        } else {
            (x, y)
        };
        match self.mode.collation {
            Collation::Lexical => x.cmp(y),
            Collation::Natural => compare_naturally(x, y).then_with(|| x.cmp(y)),
        }
    }

    /// Compare two paths by `key`, with the direction applied
    pub fn compare(&self, x: &Path, y: &Path, key: SortKey) -> Ordering {
        let ordering = match key {
            SortKey::FullPath => {
                self.compare_path(&x.to_string_lossy(), &y.to_string_lossy())
            }
            SortKey::FileName => self.compare_path(&base_name(x), &base_name(y)),
        };
        match self.mode.direction {
            Direction::Forward => ordering,
            Direction::Reverse => ordering.reverse(),
        }
    }

    /// Sort paths in place by `key`.
    ///
    /// Natural comparison can be cyclic (`"Epilogue" < "Part 1" < "Chapter 5" <
    /// "Epilogue"`), so this runs a merge sort that accepts any comparison
    /// outcome instead of `slice::sort_by`, which may panic on such input.
    pub fn sort(&self, paths: &mut Vec<PathBuf>, key: SortKey) {
        let unsorted = std::mem::take(paths);
        *paths = merge_sort_by(unsorted, &mut |a, b| self.compare(a, b, key));
    }
}

/// Stable top-down merge sort; every input element comes back exactly once
/// whatever `cmp` answers.
fn merge_sort_by<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_numbers() {
        assert_eq!(extract_numbers("ab11cdd2k.144"), vec![11, 2, 144]);
        assert_eq!(extract_numbers("Ignacio Vazquez-Abrams"), Vec::<u64>::new());
        assert_eq!(extract_numbers("007"), vec![7]);
        assert_eq!(extract_numbers(""), Vec::<u64>::new());
    }

    #[test]
    fn test_extract_numbers_saturates() {
        assert_eq!(
            extract_numbers("x99999999999999999999999y1"),
            vec![u64::MAX, 1]
        );
    }

    #[test]
    fn test_extract_numbers_ascii_only() {
        // Arabic-Indic digits are not decimal digit runs here
        assert_eq!(extract_numbers("track \u{0661}\u{0662}"), Vec::<u64>::new());
    }

    #[test]
    fn test_compare_numeric_keys() {
        assert_eq!(compare_numeric_keys(&[], &[]), Ordering::Equal);
        assert_eq!(compare_numeric_keys(&[1], &[]), Ordering::Greater);
        assert_eq!(compare_numeric_keys(&[], &[1]), Ordering::Less);
        assert_eq!(
            compare_numeric_keys(&[1, 2, 3], &[1, 2, 3, 4, 5]),
            Ordering::Less
        );
        assert_eq!(compare_numeric_keys(&[0, 13], &[0, 2, 2]), Ordering::Greater);
        assert_eq!(compare_numeric_keys(&[1, 2], &[1, 2]), Ordering::Equal);
    }

    #[test]
    fn test_compare_naturally() {
        assert_eq!(compare_naturally("2a", "10a"), Ordering::Less);
        assert_eq!(compare_naturally("alfa", "bravo"), Ordering::Less);
        assert_eq!(compare_naturally("", ""), Ordering::Equal);
        // Only one side has digits: byte-wise fallback
        assert_eq!(compare_naturally("zeta", "10a"), Ordering::Greater);
        assert_eq!(compare_naturally("Intro", "1 Song"), Ordering::Greater);
    }

    #[test]
    fn test_compare_path_ignores_extension() {
        let cmp = Comparator::new(OrderingMode::default());
        assert_eq!(cmp.compare_path("b.mp3", "b.flac"), Ordering::Equal);
        let with_ext = cmp.with_ignore_extension(false);
        assert_eq!(with_ext.compare_path("b.mp3", "b.flac"), Ordering::Greater);
    }

    #[test]
    fn test_equal_keys_fall_back_to_bytes() {
        let cmp = Comparator::new(OrderingMode::default());
        assert_eq!(compare_naturally("/m/2019/B", "/m/2019/A"), Ordering::Equal);
        assert_eq!(cmp.compare_path("/m/2019/B", "/m/2019/A"), Ordering::Greater);
        // Numeric keys still decide whenever they differ
        assert_eq!(cmp.compare_path("/m/2019/Zed", "/m/2019/CD1"), Ordering::Less);
    }

    #[test]
    fn test_lexical_collation() {
        let cmp = Comparator::new(OrderingMode::from_flags(true, false));
        assert_eq!(cmp.compare_path("10.mp3", "2.mp3"), Ordering::Less);
        let natural = Comparator::new(OrderingMode::default());
        assert_eq!(natural.compare_path("10.mp3", "2.mp3"), Ordering::Greater);
    }

    #[test]
    fn test_sort_by_file_name() {
        let cmp = Comparator::new(OrderingMode::default());
        let mut files = vec![
            PathBuf::from("/m/z/10 End.mp3"),
            PathBuf::from("/m/a/2 Middle.ogg"),
            PathBuf::from("/m/q/1 Start.flac"),
        ];
        cmp.sort(&mut files, SortKey::FileName);
        assert_eq!(
            files,
            vec![
                PathBuf::from("/m/q/1 Start.flac"),
                PathBuf::from("/m/a/2 Middle.ogg"),
                PathBuf::from("/m/z/10 End.mp3"),
            ]
        );
    }

    #[test]
    fn test_sort_reverse() {
        let cmp = Comparator::new(OrderingMode::from_flags(false, true));
        let mut dirs = vec![
            PathBuf::from("/m/CD2"),
            PathBuf::from("/m/CD10"),
            PathBuf::from("/m/CD1"),
        ];
        cmp.sort(&mut dirs, SortKey::FullPath);
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/m/CD10"),
                PathBuf::from("/m/CD2"),
                PathBuf::from("/m/CD1"),
            ]
        );
    }

    fn cyclic_names() -> Vec<PathBuf> {
        let mut names = vec![
            PathBuf::from("/b/Epilogue.mp3"),
            PathBuf::from("/b/Intro.mp3"),
            PathBuf::from("/b/Outro.mp3"),
        ];
        for n in 1..=12 {
            names.push(PathBuf::from(format!("/b/Part {}.mp3", n)));
            names.push(PathBuf::from(format!("/b/Chapter {}.mp3", n)));
        }
        names
    }

    #[test]
    fn test_cyclic_comparisons() {
        let cmp = Comparator::new(OrderingMode::default());
        let name = |s: &str| PathBuf::from(s);
        let key = SortKey::FileName;
        assert_eq!(cmp.compare(&name("Epilogue"), &name("Part 1"), key), Ordering::Less);
        assert_eq!(cmp.compare(&name("Part 1"), &name("Chapter 5"), key), Ordering::Less);
        assert_eq!(cmp.compare(&name("Chapter 5"), &name("Epilogue"), key), Ordering::Less);
    }

    #[test]
    fn test_sort_with_cyclic_names_keeps_every_entry() {
        for reverse in [false, true] {
            let cmp = Comparator::new(OrderingMode::from_flags(false, reverse));
            let input = cyclic_names();
            let mut sorted = input.clone();

            cmp.sort(&mut sorted, SortKey::FileName);

            assert_eq!(sorted.len(), input.len());
            let mut a = sorted.clone();
            let mut b = input;
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_sort_is_stable_on_equal_names() {
        let cmp = Comparator::new(OrderingMode::default());
        let mut files = vec![
            PathBuf::from("/x/b.mp3"),
            PathBuf::from("/y/a.mp3"),
            PathBuf::from("/z/b.flac"),
        ];
        cmp.sort(&mut files, SortKey::FileName);
        assert_eq!(
            files,
            vec![
                PathBuf::from("/y/a.mp3"),
                PathBuf::from("/x/b.mp3"),
                PathBuf::from("/z/b.flac"),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_sort_mixed_names_returns_every_input(
            names in proptest::collection::vec("(Intro|Outro|Bonus|Epilogue|Part ?[0-9]{1,3}|Chapter ?[0-9]{1,3}|[a-z]{1,4}[0-9]{0,2})", 0..100),
            reverse in any::<bool>(),
        ) {
            let cmp = Comparator::new(OrderingMode::from_flags(false, reverse));
            let input: Vec<PathBuf> = names.iter().map(|n| PathBuf::from(format!("/b/{}.mp3", n))).collect();
            let mut sorted = input.clone();

            cmp.sort(&mut sorted, SortKey::FileName);

            let mut a = sorted;
            let mut b = input;
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_compare_naturally_is_antisymmetric(x in "[a-c0-9 ]{0,8}", y in "[a-c0-9 ]{0,8}") {
            prop_assert_eq!(compare_naturally(&x, &y), compare_naturally(&y, &x).reverse());
        }

        #[test]
        fn prop_compare_naturally_is_reflexive(x in "\\PC{0,12}") {
            prop_assert_eq!(compare_naturally(&x, &x), Ordering::Equal);
        }

        #[test]
        fn prop_numbers_survive_formatting(n in proptest::collection::vec(0u64..1_000_000, 0..6)) {
            let s: String = n.iter().map(|v| format!("x{}", v)).collect();
            prop_assert_eq!(extract_numbers(&s), n);
        }
    }
}
