//! Text helpers shared by the model, the sidecar adapters and the organizer.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Reduce a title to a filesystem-safe slug.
///
/// Hyphens become spaces, everything outside `[0-9A-Za-z& ]` is dropped,
/// whitespace runs collapse and the remaining spaces become hyphens.
pub fn sanitize(value: &str) -> String {
    let cleaned: String = value
        .replace('-', " ")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '&' || *c == ' ')
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

#[derive(Debug, Clone, Copy)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(value: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (idx, c) in value.char_indices() {
        let is_digit = c.is_ascii_digit();
        if let Some(prev) = in_digits {
            if prev != is_digit {
                out.push(make_chunk(&value[start..idx], prev));
                start = idx;
            }
        }
        in_digits = Some(is_digit);
    }
    if let Some(prev) = in_digits {
        out.push(make_chunk(&value[start..], prev));
    }
    out
}

fn make_chunk(text: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Digits(text)
    } else {
        Chunk::Text(text)
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Human ("natural") ordering: digit runs compare by numeric value and text
/// runs compare case-insensitively, so `Issue 2` sorts before `Issue 10`.
///
/// Ties fall back to plain byte order so the result is a total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ord = match (l, r) {
            (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
            (Chunk::Text(x), Chunk::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}

/// Trim, drop empties, de-duplicate ignoring case (first spelling wins) and
/// sort naturally.
pub fn sorted_unique<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            out.push(trimmed.to_string());
        }
    }
    out.sort_by(|a, b| natural_cmp(a, b));
    out
}

/// Split a comma-separated list (as found in `ComicInfo.xml`) into a
/// sorted, de-duplicated vector.
pub fn split_list(text: &str) -> Vec<String> {
    sorted_unique(text.split(','))
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
