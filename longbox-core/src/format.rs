use serde::{Deserialize, Serialize};

use crate::vocab::{VocabParseError, Vocabulary, parse_strict};

/// Publication format of a single book.
///
/// Declaration order is the sort order used by issue ordering and must stay
/// stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Format {
    Annual,
    #[default]
    Comic,
    DigitalChapter,
    GraphicNovel,
    Hardcover,
    TradePaperback,
}

const ALL_FORMATS: &[Format] = &[
    Format::Annual,
    Format::Comic,
    Format::DigitalChapter,
    Format::GraphicNovel,
    Format::Hardcover,
    Format::TradePaperback,
];

impl Vocabulary for Format {
    fn all() -> &'static [Self] {
        ALL_FORMATS
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::Comic => "Comic",
            Self::DigitalChapter => "Digital Chapter",
            Self::GraphicNovel => "Graphic Novel",
            Self::Hardcover => "Hardcover",
            Self::TradePaperback => "Trade Paperback",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Annual => &["annuals"],
            Self::Comic => &["single issue", "issue", "comic book", "one-shot"],
            Self::DigitalChapter => &["chapter", "digital"],
            Self::GraphicNovel => &["gn", "ogn"],
            Self::Hardcover => &["hc", "hard cover"],
            Self::TradePaperback => &["tpb", "tp", "trade"],
        }
    }
}

impl Format {
    /// Collected editions (hardcover / trade paperback) that may be unnumbered.
    pub fn is_collected_edition(&self) -> bool {
        matches!(self, Self::Hardcover | Self::TradePaperback)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Format {
    type Err = VocabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("format", s)
    }
}

impl TryFrom<String> for Format {
    type Error = VocabParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Format> for String {
    fn from(value: Format) -> Self {
        value.title().to_string()
    }
}
