use longbox_core::{Provider, Vocabulary};
use serde::{Deserialize, Serialize};

/// Identifiers of the same publisher/series/issue at external catalogs.
///
/// A present id means "identical to record `id` at that provider"; an absent
/// id means unknown. Comixology is a storefront, so only its URL is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comicvine: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_comics_database: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_of_comic_geeks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marvel: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metron: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comixology: Option<String>,
}

impl Sources {
    pub fn get(&self, provider: Provider) -> Option<u64> {
        match provider {
            Provider::Comicvine => self.comicvine,
            Provider::GrandComicsDatabase => self.grand_comics_database,
            Provider::LeagueOfComicGeeks => self.league_of_comic_geeks,
            Provider::Marvel => self.marvel,
            Provider::Metron => self.metron,
        }
    }

    pub fn set(&mut self, provider: Provider, id: Option<u64>) {
        let slot = match provider {
            Provider::Comicvine => &mut self.comicvine,
            Provider::GrandComicsDatabase => &mut self.grand_comics_database,
            Provider::LeagueOfComicGeeks => &mut self.league_of_comic_geeks,
            Provider::Marvel => &mut self.marvel,
            Provider::Metron => &mut self.metron,
        };
        *slot = id;
    }

    /// Known provider ids, in provider declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Provider, u64)> + '_ {
        Provider::all()
            .iter()
            .filter_map(move |p| self.get(*p).map(|id| (*p, id)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none() && self.comixology.is_none()
    }
}
