use serde::{Deserialize, Serialize};

use crate::vocab::{VocabParseError, Vocabulary, parse_strict};

/// Story genre tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Genre {
    Adult,
    Crime,
    Espionage,
    Fantasy,
    Historical,
    Horror,
    Humor,
    Manga,
    Parody,
    Romance,
    ScienceFiction,
    Sport,
    SuperHero,
    War,
    Western,
}

const ALL_GENRES: &[Genre] = &[
    Genre::Adult,
    Genre::Crime,
    Genre::Espionage,
    Genre::Fantasy,
    Genre::Historical,
    Genre::Horror,
    Genre::Humor,
    Genre::Manga,
    Genre::Parody,
    Genre::Romance,
    Genre::ScienceFiction,
    Genre::Sport,
    Genre::SuperHero,
    Genre::War,
    Genre::Western,
];

impl Vocabulary for Genre {
    fn all() -> &'static [Self] {
        ALL_GENRES
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Crime => "Crime",
            Self::Espionage => "Espionage",
            Self::Fantasy => "Fantasy",
            Self::Historical => "Historical",
            Self::Horror => "Horror",
            Self::Humor => "Humor",
            Self::Manga => "Manga",
            Self::Parody => "Parody",
            Self::Romance => "Romance",
            Self::ScienceFiction => "Science Fiction",
            Self::Sport => "Sport",
            Self::SuperHero => "Super-Hero",
            Self::War => "War",
            Self::Western => "Western",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Adult => &["mature"],
            Self::Espionage => &["spy"],
            Self::Historical => &["history"],
            Self::Humor => &["humour", "comedy"],
            Self::ScienceFiction => &["sci-fi", "scifi", "sf"],
            Self::Sport => &["sports"],
            Self::SuperHero => &["superheroes", "super heroes"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Genre {
    type Err = VocabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("genre", s)
    }
}

impl TryFrom<String> for Genre {
    type Error = VocabParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genre> for String {
    fn from(value: Genre) -> Self {
        value.title().to_string()
    }
}
