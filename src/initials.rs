//! Reduction of personal names to initials, used in generated titles

const SEPARATOR: &str = ".";
const TRAIL: &str = ".";
const HYPHEN: char = '-';

/// Replace every double-quoted substring with a single space.
///
/// Text is left untouched when it has no quotes or an odd number of them.
fn strip_quoted(name: &str) -> String {
    let quotes = name.matches('"').count();
    if quotes == 0 || quotes % 2 != 0 {
        return name.to_string();
    }

    let mut result = String::with_capacity(name.len());
    let mut quoted = false;
    for c in name.chars() {
        if c == '"' {
            if !quoted {
                result.push(' ');
            }
            quoted = !quoted;
        } else if !quoted {
            result.push(c);
        }
    }
    result
}

fn first_upper(word: &str) -> Option<String> {
    word.chars().next().map(|c| c.to_uppercase().collect())
}

/// Reduce a name to initials: `"John Ronald Reuel Tolkien"` becomes `"J.R.R.T."`.
///
/// Hyphenated parts keep their hyphen (`"Rimsky-Korsakov"` gives `"R-K."`) and
/// nicknames in double quotes are dropped.
pub fn make_initials(name: &str) -> String {
    let cleaned = strip_quoted(name);

    let parts: Vec<String> = cleaned
        .split(HYPHEN)
        .map(|part| {
            part.split_whitespace()
                .filter_map(first_upper)
                .collect::<Vec<_>>()
                .join(SEPARATOR)
        })
        .collect();

    parts.join(&HYPHEN.to_string()) + TRAIL
}
