//! A catalog source backed by hand-curated YAML files.
//!
//! Each provider gets one file, `{dir}/{provider-key}.yaml`, holding a list of
//! [`CatalogRecord`]s that use that provider's ids:
//!
//! ```yaml
//! - publisher: { id: 10, title: DC Comics }
//!   series: { id: 796, title: Batman, volume: 3, start_year: 2016 }
//!   issue: { id: 5501, number: "7", title: Rooftops }
//! ```

use std::path::Path;

use longbox_core::{Provider, Vocabulary};
use longbox_model::Metadata;

use super::{CatalogError, CatalogRecord, CatalogSource};

pub struct LocalCatalog {
    provider: Provider,
    entries: Vec<CatalogRecord>,
}

impl LocalCatalog {
    pub fn new(provider: Provider, entries: Vec<CatalogRecord>) -> Self {
        Self { provider, entries }
    }

    /// Load `{dir}/{provider-key}.yaml`. A missing file yields `None`.
    pub fn load(dir: &Path, provider: Provider) -> Result<Option<Self>, CatalogError> {
        let path = dir.join(format!("{}.yaml", provider.key()));
        if !path.is_file() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let entries: Vec<CatalogRecord> =
            serde_yml::from_str(&contents).map_err(|e| CatalogError::Parse {
                path: path.display().to_string(),
                source: e,
            })?;
        log::debug!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(Some(Self::new(provider, entries)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, metadata: &Metadata) -> Option<&CatalogRecord> {
        if let Some(id) = metadata.issue.sources.get(self.provider) {
            return self.entries.iter().find(|e| e.issue.id == Some(id));
        }
        self.entries.iter().find(|entry| {
            let title_matches = entry
                .series
                .title
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(&metadata.series.title));
            let number_matches = entry.issue.number.as_deref() == Some(metadata.issue.number.as_str());
            let volume_matches = entry
                .series
                .volume
                .is_none_or(|v| v == metadata.series.volume);
            title_matches && number_matches && volume_matches
        })
    }
}

impl CatalogSource for LocalCatalog {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn fetch(&mut self, metadata: &Metadata) -> Result<Option<CatalogRecord>, CatalogError> {
        Ok(self.find(metadata).cloned())
    }
}

/// Every provider file present in `dir`, in provider order.
pub fn load_local_catalogs(dir: &Path) -> Result<Vec<LocalCatalog>, CatalogError> {
    let mut catalogs = Vec::new();
    for provider in Provider::all() {
        if let Some(catalog) = LocalCatalog::load(dir, *provider)? {
            catalogs.push(catalog);
        }
    }
    Ok(catalogs)
}
