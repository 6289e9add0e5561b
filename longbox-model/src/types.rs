//! Entity types of a metadata aggregate.
//!
//! Equality and ordering are key-based: two publishers with the same title
//! are the same publisher, two pages with the same index are the same page,
//! and so on. Serialized field names are lowerCamelCase.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use longbox_core::{AgeRating, Format, Genre, PageType, Role, YesNo, natural_cmp, sorted_unique};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::sources::Sources;

fn default_volume() -> u32 {
    1
}

fn default_language() -> String {
    "en".to_string()
}

fn is_unset<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ── Publisher ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imprint: Option<String>,
    #[serde(default, skip_serializing_if = "Sources::is_empty")]
    pub sources: Sources,
}

impl Publisher {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl PartialEq for Publisher {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Publisher {}

impl PartialOrd for Publisher {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Publisher {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.title, &other.title)
    }
}

// ── Series ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub title: String,
    #[serde(default = "default_volume")]
    pub volume: u32,
    /// Always after 1900 when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Sources::is_empty")]
    pub sources: Sources,
}

impl Default for Series {
    fn default() -> Self {
        Self {
            title: String::new(),
            volume: default_volume(),
            start_year: None,
            sources: Sources::default(),
        }
    }
}

impl Series {
    pub fn new(title: impl Into<String>, volume: u32) -> Self {
        Self {
            title: title.into(),
            volume,
            ..Default::default()
        }
    }
}

impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Series {}

impl PartialOrd for Series {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Series {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.title, &other.title)
            .then_with(|| self.volume.cmp(&other.volume))
            .then_with(|| self.start_year.cmp(&other.start_year))
    }
}

// ── Creator ─────────────────────────────────────────────────────────────────

/// A person credited on an issue. Identity is the name alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub name: String,
    #[serde(default)]
    pub roles: BTreeSet<Role>,
}

impl Creator {
    pub fn new(name: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            name: name.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Absorb the roles of another credit for the same person.
    pub fn merge(&mut self, other: Creator) {
        self.roles.extend(other.roles);
    }
}

impl PartialEq for Creator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Creator {}

impl PartialOrd for Creator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Creator {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.name, &other.name)
    }
}

// ── StoryArc ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryArc {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
}

impl StoryArc {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            number: None,
        }
    }
}

// ── Issue ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub number: String,
    #[serde(default)]
    pub format: Format,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_date: Option<NaiveDate>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<Creator>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub genres: BTreeSet<Genre>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub characters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub story_arcs: BTreeSet<StoryArc>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub black_and_white: YesNo,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub age_rating: AgeRating,
    #[serde(default, skip_serializing_if = "Sources::is_empty")]
    pub sources: Sources,
}

impl Issue {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            format: Format::default(),
            cover_date: None,
            store_date: None,
            page_count: 0,
            title: None,
            summary: None,
            language: default_language(),
            creators: Vec::new(),
            genres: BTreeSet::new(),
            characters: Vec::new(),
            teams: Vec::new(),
            locations: Vec::new(),
            story_arcs: BTreeSet::new(),
            black_and_white: YesNo::default(),
            age_rating: AgeRating::default(),
            sources: Sources::default(),
        }
    }

    /// Add a credit, merging roles into an existing creator of the same name.
    pub fn add_creator(&mut self, creator: Creator) {
        match self.creators.binary_search(&creator) {
            Ok(idx) => self.creators[idx].merge(creator),
            Err(idx) => self.creators.insert(idx, creator),
        }
    }

    pub fn creator(&self, name: &str) -> Option<&Creator> {
        self.creators.iter().find(|c| c.name == name)
    }

    /// Names credited with `role`, in creator order.
    pub fn creators_with_role(&self, role: Role) -> Vec<&str> {
        self.creators
            .iter()
            .filter(|c| c.roles.contains(&role))
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Re-establish the sorted/merged invariants of the list fields.
    pub fn normalize(&mut self) {
        let creators = std::mem::take(&mut self.creators);
        for creator in creators {
            if !creator.name.trim().is_empty() {
                self.add_creator(creator);
            }
        }
        self.characters = sorted_unique(&self.characters);
        self.teams = sorted_unique(&self.teams);
        self.locations = sorted_unique(&self.locations);
    }
}

impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Issue {}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.format
            .cmp(&other.format)
            .then_with(|| self.number.cmp(&other.number))
            .then_with(|| self.cover_date.cmp(&other.cover_date))
    }
}

// ── Page ────────────────────────────────────────────────────────────────────

/// One entry of the page table. Identity is the image index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub image: u32,
    #[serde(default)]
    pub page_type: PageType,
    #[serde(default, skip_serializing_if = "is_false")]
    pub double_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
}

impl Page {
    pub fn new(image: u32, page_type: PageType) -> Self {
        Self {
            image,
            page_type,
            ..Default::default()
        }
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.image == other.image
    }
}

impl Eq for Page {}

impl PartialOrd for Page {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Page {
    fn cmp(&self, other: &Self) -> Ordering {
        self.image.cmp(&other.image)
    }
}

// ── Metadata ────────────────────────────────────────────────────────────────

/// The aggregate describing one archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub publisher: Publisher,
    pub series: Series,
    pub issue: Issue,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub pages: BTreeSet<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Metadata {
    pub fn new(publisher: Publisher, series: Series, issue: Issue) -> Self {
        Self {
            publisher,
            series,
            issue,
            pages: BTreeSet::new(),
            notes: None,
        }
    }

    /// Check the required fields and value ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.publisher.title.trim().is_empty() {
            return Err(ValidationError::MissingPublisherTitle);
        }
        if self.series.title.trim().is_empty() {
            return Err(ValidationError::MissingSeriesTitle);
        }
        if self.issue.number.trim().is_empty() {
            return Err(ValidationError::MissingIssueNumber);
        }
        if self.series.volume < 1 {
            return Err(ValidationError::InvalidVolume);
        }
        if let Some(year) = self.series.start_year {
            if year <= 1900 {
                return Err(ValidationError::InvalidStartYear(year));
            }
        }
        Ok(())
    }

    pub fn normalize(&mut self) {
        self.issue.normalize();
    }
}

impl PartialEq for Metadata {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Metadata {}

impl PartialOrd for Metadata {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Metadata {
    fn cmp(&self, other: &Self) -> Ordering {
        self.publisher
            .cmp(&other.publisher)
            .then_with(|| self.series.cmp(&other.series))
            .then_with(|| self.issue.cmp(&other.issue))
    }
}
