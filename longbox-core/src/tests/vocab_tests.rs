use super::*;
use crate::{AgeRating, Format, Genre, Manga, PageType, Provider, Role, YesNo};

#[test]
fn load_matches_titles_ignoring_case_and_punctuation() {
    assert_eq!(Format::load("trade paperback"), Some(Format::TradePaperback));
    assert_eq!(Format::load("TRADE_PAPERBACK"), Some(Format::TradePaperback));
    assert_eq!(Role::load("CoverArtist"), Some(Role::CoverArtist));
    assert_eq!(Role::load("cover artist"), Some(Role::CoverArtist));
    assert_eq!(PageType::load("FrontCover"), Some(PageType::FrontCover));
}

#[test]
fn load_matches_aliases() {
    assert_eq!(Format::load("TPB"), Some(Format::TradePaperback));
    assert_eq!(Format::load("hc"), Some(Format::Hardcover));
    assert_eq!(Role::load("Colorist"), Some(Role::Colourist));
    assert_eq!(Genre::load("Sci-Fi"), Some(Genre::ScienceFiction));
    assert_eq!(Provider::load("gcd"), Some(Provider::GrandComicsDatabase));
}

#[test]
fn load_returns_none_for_unknown_or_empty_text() {
    assert_eq!(Format::load("Magazine"), None);
    assert_eq!(Genre::load(""), None);
    assert_eq!(Role::load("  "), None);
}

#[test]
fn from_str_reports_kind_and_value() {
    let err = "Magazine".parse::<Format>().unwrap_err();
    assert_eq!(err, VocabParseError::new("format", "Magazine"));
    assert_eq!(err.to_string(), "unknown format: 'Magazine'");
}

#[test]
fn titles_round_trip_through_load() {
    fn check<T: Vocabulary + PartialEq + std::fmt::Debug>() {
        for value in T::all() {
            assert_eq!(T::load(value.title()), Some(*value));
        }
    }
    check::<Format>();
    check::<Genre>();
    check::<Role>();
    check::<PageType>();
    check::<AgeRating>();
    check::<YesNo>();
    check::<Manga>();
    check::<Provider>();
}

#[test]
fn aliases_are_unambiguous_within_a_vocabulary() {
    fn check<T: Vocabulary + PartialEq + std::fmt::Debug>() {
        for value in T::all() {
            for alias in value.aliases() {
                assert_eq!(T::load(alias), Some(*value), "alias {alias}");
            }
        }
    }
    check::<Format>();
    check::<Genre>();
    check::<Role>();
    check::<PageType>();
    check::<Provider>();
}

#[test]
fn serde_uses_titles() {
    let json = serde_json::to_string(&Format::GraphicNovel).unwrap();
    assert_eq!(json, "\"Graphic Novel\"");
    let back: Format = serde_json::from_str("\"ogn\"").unwrap();
    assert_eq!(back, Format::GraphicNovel);
    assert!(serde_json::from_str::<Role>("\"Gaffer\"").is_err());
}

#[test]
fn defaults_and_ordering() {
    assert_eq!(Format::default(), Format::Comic);
    assert_eq!(PageType::default(), PageType::Story);
    assert!(Format::Annual < Format::Comic);
    assert!(Format::Comic < Format::TradePaperback);
    assert_eq!(PageType::FrontCover.code(), "FrontCover");
    assert_eq!(Provider::LeagueOfComicGeeks.key(), "league_of_comic_geeks");
}
