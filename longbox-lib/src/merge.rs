//! Folding catalog records into a metadata aggregate.
//!
//! Scalar fields go through [`resolve`]; list fields are unioned with what
//! the aggregate already holds. A resolved value that is empty (blank text,
//! zero) never overwrites the existing one.

use chrono::NaiveDate;
use longbox_core::{Format, Genre, sorted_unique};
use longbox_model::{Creator, Metadata, StoryArc};

use crate::catalog::{CatalogRecord, CatalogSource, order_sources};
use crate::choice::{ChoiceError, UserChoice};
use crate::progress::ImportProgress;
use crate::resolve::{ResolutionPolicy, resolve};

type Candidates<T> = Vec<(String, T)>;

/// Candidate values gathered from every source, keyed by source name.
#[derive(Debug, Default)]
pub struct MetadataCandidates {
    pub publisher_title: Candidates<String>,
    pub publisher_imprint: Candidates<String>,
    pub series_title: Candidates<String>,
    pub series_volume: Candidates<u32>,
    pub series_start_year: Candidates<i32>,
    pub issue_format: Candidates<Format>,
    pub issue_number: Candidates<String>,
    pub issue_cover_date: Candidates<NaiveDate>,
    pub issue_page_count: Candidates<u32>,
    pub issue_store_date: Candidates<NaiveDate>,
    pub issue_summary: Candidates<String>,
    pub issue_title: Candidates<String>,
    pub issue_language: Candidates<String>,
    pub creators: Vec<Creator>,
    pub genres: Vec<Genre>,
    pub characters: Vec<String>,
    pub teams: Vec<String>,
    pub locations: Vec<String>,
    pub story_arcs: Vec<StoryArc>,
    sources: usize,
}

fn push<T>(list: &mut Candidates<T>, source: &str, value: Option<T>) {
    if let Some(value) = value {
        list.push((source.to_string(), value));
    }
}

fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl MetadataCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records added so far.
    pub fn len(&self) -> usize {
        self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.sources == 0
    }

    pub fn add(&mut self, source: &str, record: &CatalogRecord) {
        self.sources += 1;
        let (p, s, i) = (&record.publisher, &record.series, &record.issue);

        push(&mut self.publisher_title, source, text(&p.title));
        push(&mut self.publisher_imprint, source, text(&p.imprint));

        push(&mut self.series_title, source, text(&s.title));
        push(&mut self.series_volume, source, s.volume.filter(|v| *v >= 1));
        push(&mut self.series_start_year, source, s.start_year.filter(|y| *y > 1900));

        push(&mut self.issue_format, source, i.format);
        push(&mut self.issue_number, source, text(&i.number));
        push(&mut self.issue_cover_date, source, i.cover_date);
        push(&mut self.issue_page_count, source, i.page_count.filter(|c| *c > 0));
        push(&mut self.issue_store_date, source, i.store_date);
        push(&mut self.issue_summary, source, text(&i.summary));
        push(&mut self.issue_title, source, text(&i.title));
        push(
            &mut self.issue_language,
            source,
            text(&i.language).map(|l| l.to_lowercase()),
        );

        self.creators.extend(i.creators.iter().cloned());
        self.genres.extend(i.genres.iter().copied());
        self.characters.extend(i.characters.iter().cloned());
        self.teams.extend(i.teams.iter().cloned());
        self.locations.extend(i.locations.iter().cloned());
        self.story_arcs.extend(i.story_arcs.iter().cloned());
    }

    /// Resolve every scalar field and union the lists into `metadata`.
    pub fn apply(
        self,
        metadata: &mut Metadata,
        policy: &ResolutionPolicy,
        choice: &mut dyn UserChoice,
    ) -> Result<(), ChoiceError> {
        if let Some(v) = resolve("Publisher Title", &self.publisher_title, policy, choice)? {
            metadata.publisher.title = v;
        }
        if let Some(v) = resolve("Publisher Imprint", &self.publisher_imprint, policy, choice)? {
            metadata.publisher.imprint = Some(v);
        }
        if let Some(v) = resolve("Series Title", &self.series_title, policy, choice)? {
            metadata.series.title = v;
        }
        if let Some(v) = resolve("Series Volume", &self.series_volume, policy, choice)? {
            metadata.series.volume = v;
        }
        if let Some(v) = resolve("Series Start Year", &self.series_start_year, policy, choice)? {
            metadata.series.start_year = Some(v);
        }

        let issue = &mut metadata.issue;
        if let Some(v) = resolve("Issue Format", &self.issue_format, policy, choice)? {
            issue.format = v;
        }
        if let Some(v) = resolve("Issue Number", &self.issue_number, policy, choice)? {
            issue.number = v;
        }
        if let Some(v) = resolve("Issue Cover Date", &self.issue_cover_date, policy, choice)? {
            issue.cover_date = Some(v);
        }
        if let Some(v) = resolve("Issue Page Count", &self.issue_page_count, policy, choice)? {
            issue.page_count = v;
        }
        if let Some(v) = resolve("Issue Store Date", &self.issue_store_date, policy, choice)? {
            issue.store_date = Some(v);
        }
        if let Some(v) = resolve("Issue Summary", &self.issue_summary, policy, choice)? {
            issue.summary = Some(v);
        }
        if let Some(v) = resolve("Issue Title", &self.issue_title, policy, choice)? {
            issue.title = Some(v);
        }
        if let Some(v) = resolve("Issue Language", &self.issue_language, policy, choice)? {
            issue.language = v;
        }

        for creator in self.creators {
            if !creator.name.trim().is_empty() {
                issue.add_creator(creator);
            }
        }
        issue.genres.extend(self.genres);
        issue.characters = sorted_unique(issue.characters.iter().chain(&self.characters));
        issue.teams = sorted_unique(issue.teams.iter().chain(&self.teams));
        issue.locations = sorted_unique(issue.locations.iter().chain(&self.locations));
        issue.story_arcs.extend(self.story_arcs);
        Ok(())
    }
}

/// Query `sources` (in precedence order) and merge what they return.
///
/// A source that fails is logged and contributes nothing. Provider ids from
/// each record are written into the aggregate before the next source runs.
/// Returns the number of sources that produced a record.
pub fn enrich(
    metadata: &mut Metadata,
    sources: &mut [Box<dyn CatalogSource>],
    policy: &ResolutionPolicy,
    choice: &mut dyn UserChoice,
    progress: &dyn Fn(ImportProgress),
) -> Result<usize, ChoiceError> {
    order_sources(sources, policy);

    let mut candidates = MetadataCandidates::new();
    for source in sources.iter_mut() {
        if !source.applies_to(metadata) {
            log::debug!("Skipping {} for {}", source.name(), metadata.publisher.title);
            continue;
        }
        log::info!("Pulling from {}", source.name());
        progress(ImportProgress::Fetching {
            source: source.name().to_string(),
        });
        match source.fetch(metadata) {
            Ok(Some(record)) => {
                record.apply_ids(source.provider(), metadata);
                candidates.add(source.name(), &record);
            }
            Ok(None) => log::info!("No match in {}", source.name()),
            Err(e) => log::warn!("{} failed: {e}", source.name()),
        }
    }

    let found = candidates.len();
    candidates.apply(metadata, policy, choice)?;
    Ok(found)
}

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod tests;
