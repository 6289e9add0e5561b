/// A closed set of domain values with a canonical label and free-text lookup.
///
/// Lookup ignores case and any character that is not a letter or digit, so
/// "Cover Artist", "CoverArtist" and "cover_artist" all name the same value.
/// Declaration order (the order of [`Vocabulary::all`]) is the sort order.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Every variant, in declaration order.
    fn all() -> &'static [Self];

    /// Human-readable canonical label.
    fn title(&self) -> &'static str;

    /// Additional accepted spellings.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Match free text against titles and aliases. Unknown text yields `None`.
    fn load(text: &str) -> Option<Self> {
        let wanted = fold(text);
        if wanted.is_empty() {
            return None;
        }
        Self::all().iter().copied().find(|value| {
            fold(value.title()) == wanted || value.aliases().iter().any(|a| fold(a) == wanted)
        })
    }
}

fn fold(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Error returned when text names no member of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct VocabParseError {
    pub kind: &'static str,
    pub value: String,
}

impl VocabParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Strict lookup used by the `FromStr`/serde conversions of each vocabulary.
pub(crate) fn parse_strict<T: Vocabulary>(kind: &'static str, text: &str) -> Result<T, VocabParseError> {
    T::load(text).ok_or_else(|| VocabParseError::new(kind, text))
}

#[cfg(test)]
#[path = "tests/vocab_tests.rs"]
mod tests;
