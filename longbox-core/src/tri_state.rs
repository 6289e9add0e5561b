//! Three-valued flags used by `ComicInfo.xml` (`BlackAndWhite`, `Manga`).

use serde::{Deserialize, Serialize};

use crate::vocab::{VocabParseError, Vocabulary, parse_strict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum YesNo {
    #[default]
    Unknown,
    No,
    Yes,
}

const ALL_YES_NO: &[YesNo] = &[YesNo::Unknown, YesNo::No, YesNo::Yes];

impl Vocabulary for YesNo {
    fn all() -> &'static [Self] {
        ALL_YES_NO
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::No => &["false", "n"],
            Self::Yes => &["true", "y"],
            Self::Unknown => &[],
        }
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for YesNo {
    type Err = VocabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("yes/no value", s)
    }
}

impl TryFrom<String> for YesNo {
    type Error = VocabParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YesNo> for String {
    fn from(value: YesNo) -> Self {
        value.title().to_string()
    }
}

/// `YesAndRightToLeft` marks right-to-left reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Manga {
    #[default]
    Unknown,
    No,
    Yes,
    YesAndRightToLeft,
}

const ALL_MANGA: &[Manga] = &[Manga::Unknown, Manga::No, Manga::Yes, Manga::YesAndRightToLeft];

impl Manga {
    pub fn is_manga(&self) -> bool {
        matches!(self, Self::Yes | Self::YesAndRightToLeft)
    }
}

impl Vocabulary for Manga {
    fn all() -> &'static [Self] {
        ALL_MANGA
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::No => "No",
            Self::Yes => "Yes",
            Self::YesAndRightToLeft => "YesAndRightToLeft",
        }
    }
}

impl std::fmt::Display for Manga {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Manga {
    type Err = VocabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("manga value", s)
    }
}

impl TryFrom<String> for Manga {
    type Error = VocabParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Manga> for String {
    fn from(value: Manga) -> Self {
        value.title().to_string()
    }
}
