//! Catalog sources: external records that may enrich an aggregate.
//!
//! A source only hands back a [`CatalogRecord`]; how the record was obtained
//! (network API, local files) is the source's business.

mod local;

use chrono::NaiveDate;
use longbox_core::{Format, Genre, Provider, Vocabulary};
use longbox_model::{Creator, Metadata, StoryArc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use local::{LocalCatalog, load_local_catalogs};

use crate::resolve::ResolutionPolicy;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherRecord {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub imprint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesRecord {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub volume: Option<u32>,
    pub start_year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueRecord {
    pub id: Option<u64>,
    pub number: Option<String>,
    pub format: Option<Format>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub cover_date: Option<NaiveDate>,
    pub store_date: Option<NaiveDate>,
    pub page_count: Option<u32>,
    pub language: Option<String>,
    pub creators: Vec<Creator>,
    pub genres: Vec<Genre>,
    pub characters: Vec<String>,
    pub teams: Vec<String>,
    pub locations: Vec<String>,
    pub story_arcs: Vec<StoryArc>,
    /// Storefront URL, recorded when the issue has none yet.
    pub comixology: Option<String>,
}

/// What one source knows about the publisher, series and issue.
/// Every field is optional; ids are the source provider's own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogRecord {
    pub publisher: PublisherRecord,
    pub series: SeriesRecord,
    pub issue: IssueRecord,
}

impl CatalogRecord {
    /// Copy the record's provider ids into `metadata` so later sources can
    /// match on them. Known ids are kept.
    pub fn apply_ids(&self, provider: Provider, metadata: &mut Metadata) {
        fill(&mut metadata.publisher.sources, provider, self.publisher.id);
        fill(&mut metadata.series.sources, provider, self.series.id);
        fill(&mut metadata.issue.sources, provider, self.issue.id);
        if metadata.issue.sources.comixology.is_none() {
            metadata.issue.sources.comixology = self.issue.comixology.clone();
        }
    }
}

fn fill(sources: &mut longbox_model::Sources, provider: Provider, id: Option<u64>) {
    if sources.get(provider).is_none() && id.is_some() {
        sources.set(provider, id);
    }
}

/// Marvel's catalog only covers Marvel's own books.
pub fn provider_applies(provider: Provider, metadata: &Metadata) -> bool {
    match provider {
        Provider::Marvel => metadata.publisher.title.starts_with("Marvel"),
        _ => true,
    }
}

pub trait CatalogSource {
    fn provider(&self) -> Provider;

    /// Key used in the resolution order and in candidate menus.
    fn name(&self) -> &str {
        self.provider().title()
    }

    fn applies_to(&self, metadata: &Metadata) -> bool {
        provider_applies(self.provider(), metadata)
    }

    /// Look up the aggregate. `Ok(None)` means no match.
    fn fetch(&mut self, metadata: &Metadata) -> Result<Option<CatalogRecord>, CatalogError>;
}

/// Sort sources by their rank in the policy; unlisted sources keep their
/// relative order after the listed ones.
pub fn order_sources(sources: &mut [Box<dyn CatalogSource>], policy: &ResolutionPolicy) {
    sources.sort_by_key(|source| policy.rank(source.name()).unwrap_or(usize::MAX));
}
