use serde::{Deserialize, Serialize};

use crate::vocab::{VocabParseError, Vocabulary, parse_strict};

/// Age rating as written in `ComicInfo.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgeRating {
    #[default]
    Unknown,
    AdultsOnly18,
    EarlyChildhood,
    Everyone,
    Everyone10,
    G,
    KidsToAdults,
    M,
    Ma15,
    Mature17,
    Pg,
    R18,
    RatingPending,
    Teen,
    X18,
}

const ALL_RATINGS: &[AgeRating] = &[
    AgeRating::Unknown,
    AgeRating::AdultsOnly18,
    AgeRating::EarlyChildhood,
    AgeRating::Everyone,
    AgeRating::Everyone10,
    AgeRating::G,
    AgeRating::KidsToAdults,
    AgeRating::M,
    AgeRating::Ma15,
    AgeRating::Mature17,
    AgeRating::Pg,
    AgeRating::R18,
    AgeRating::RatingPending,
    AgeRating::Teen,
    AgeRating::X18,
];

impl Vocabulary for AgeRating {
    fn all() -> &'static [Self] {
        ALL_RATINGS
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::AdultsOnly18 => "Adults Only 18+",
            Self::EarlyChildhood => "Early Childhood",
            Self::Everyone => "Everyone",
            Self::Everyone10 => "Everyone 10+",
            Self::G => "G",
            Self::KidsToAdults => "Kids to Adults",
            Self::M => "M",
            Self::Ma15 => "MA15+",
            Self::Mature17 => "Mature 17+",
            Self::Pg => "PG",
            Self::R18 => "R18+",
            Self::RatingPending => "Rating Pending",
            Self::Teen => "Teen",
            Self::X18 => "X18+",
        }
    }
}

impl std::fmt::Display for AgeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for AgeRating {
    type Err = VocabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("age rating", s)
    }
}

impl TryFrom<String> for AgeRating {
    type Error = VocabParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgeRating> for String {
    fn from(value: AgeRating) -> Self {
        value.title().to_string()
    }
}
