use serde::{Deserialize, Serialize};

use crate::vocab::{VocabParseError, Vocabulary, parse_strict};

/// Kind of a single page image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PageType {
    FrontCover,
    InnerCover,
    Roundup,
    #[default]
    Story,
    Advertisement,
    Editorial,
    Letters,
    Preview,
    BackCover,
    Other,
    Deleted,
}

const ALL_PAGE_TYPES: &[PageType] = &[
    PageType::FrontCover,
    PageType::InnerCover,
    PageType::Roundup,
    PageType::Story,
    PageType::Advertisement,
    PageType::Editorial,
    PageType::Letters,
    PageType::Preview,
    PageType::BackCover,
    PageType::Other,
    PageType::Deleted,
];

impl Vocabulary for PageType {
    fn all() -> &'static [Self] {
        ALL_PAGE_TYPES
    }

    fn title(&self) -> &'static str {
        match self {
            Self::FrontCover => "Front Cover",
            Self::InnerCover => "Inner Cover",
            Self::Roundup => "Roundup",
            Self::Story => "Story",
            Self::Advertisement => "Advertisement",
            Self::Editorial => "Editorial",
            Self::Letters => "Letters",
            Self::Preview => "Preview",
            Self::BackCover => "Back Cover",
            Self::Other => "Other",
            Self::Deleted => "Deleted",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::FrontCover => &["cover"],
            Self::Advertisement => &["ad", "advert"],
            _ => &[],
        }
    }
}

impl PageType {
    /// Attribute value used by `ComicInfo.xml` (`FrontCover`, `BackCover`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::FrontCover => "FrontCover",
            Self::InnerCover => "InnerCover",
            Self::BackCover => "BackCover",
            other => other.title(),
        }
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for PageType {
    type Err = VocabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("page type", s)
    }
}

impl TryFrom<String> for PageType {
    type Error = VocabParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageType> for String {
    fn from(value: PageType) -> Self {
        value.title().to_string()
    }
}
