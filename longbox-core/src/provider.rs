use serde::{Deserialize, Serialize};

use crate::vocab::{VocabParseError, Vocabulary, parse_strict};

/// External catalog services that identify publishers, series and issues.
///
/// Declaration order is the default resolution order when no precedence is
/// configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Provider {
    Comicvine,
    GrandComicsDatabase,
    LeagueOfComicGeeks,
    Marvel,
    Metron,
}

const ALL_PROVIDERS: &[Provider] = &[
    Provider::Comicvine,
    Provider::GrandComicsDatabase,
    Provider::LeagueOfComicGeeks,
    Provider::Marvel,
    Provider::Metron,
];

impl Vocabulary for Provider {
    fn all() -> &'static [Self] {
        ALL_PROVIDERS
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Comicvine => "Comicvine",
            Self::GrandComicsDatabase => "Grand Comics Database",
            Self::LeagueOfComicGeeks => "League of Comic Geeks",
            Self::Marvel => "Marvel",
            Self::Metron => "Metron",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Comicvine => &["cv", "comic vine"],
            Self::GrandComicsDatabase => &["gcd", "comics.org"],
            Self::LeagueOfComicGeeks => &["locg", "league"],
            Self::Marvel => &["marvel api"],
            Self::Metron => &["metron.cloud"],
        }
    }
}

impl Provider {
    /// Stable snake_case key used in settings files and catalog file names.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Comicvine => "comicvine",
            Self::GrandComicsDatabase => "grand_comics_database",
            Self::LeagueOfComicGeeks => "league_of_comic_geeks",
            Self::Marvel => "marvel",
            Self::Metron => "metron",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Provider {
    type Err = VocabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("provider", s)
    }
}

impl TryFrom<String> for Provider {
    type Error = VocabParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Provider> for String {
    fn from(value: Provider) -> Self {
        value.title().to_string()
    }
}
