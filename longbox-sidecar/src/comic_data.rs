//! `ComicData.xml`, the structured XML sidecar.
//!
//! ```text
//! ComicData
//!   Data
//!     Publisher  Title, Identifiers
//!     Series     Title, Volume, Identifiers
//!     Comic      Format, Number, Title, CoverDate, StoreDate, PageCount,
//!                Summary, LanguageISO, Creators, Genres, Identifiers
//!   Meta         Date, Tool(Name, Version), Notes
//! ```
//!
//! `Volume` carries either the volume number or, past 1900, the start year.
//! Characters, teams, locations, story arcs and pages are not stored.

use chrono::NaiveDate;
use longbox_core::{Format, Genre, Provider, Role, Vocabulary};
use longbox_model::{Creator, Issue, Metadata, Publisher, Series, Sources};

use crate::error::SidecarError;
use crate::metadata_json::Meta;
use crate::prompt::{FieldPrompt, PromptField, require};
use crate::xml::{XmlElement, XmlWriter, expect_root, parse_document};
use crate::{Sidecar, volume_field, volume_text};

const ROOT: &str = "ComicData";
const COMIXOLOGY: &str = "Comixology";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct ComicData;

impl Sidecar for ComicData {
    fn name(&self) -> &'static str {
        "ComicData"
    }

    fn file_name(&self) -> &'static str {
        "ComicData.xml"
    }

    fn parse_with(&self, raw: &[u8], prompt: &mut dyn FieldPrompt) -> Result<Metadata, SidecarError> {
        let document = parse_document(raw)?;
        let root = expect_root(&document, ROOT)?;
        to_metadata(root, prompt)
    }

    fn serialize(&self, metadata: &Metadata) -> Result<Vec<u8>, SidecarError> {
        Ok(write(metadata).into_bytes())
    }
}

fn to_metadata(root: &XmlElement, prompt: &mut dyn FieldPrompt) -> Result<Metadata, SidecarError> {
    let empty = XmlElement::default();
    let publisher_el = root.descend(&["Data", "Publisher"]).unwrap_or(&empty);
    let series_el = root.descend(&["Data", "Series"]).unwrap_or(&empty);
    let comic_el = root.descend(&["Data", "Comic"]).unwrap_or(&empty);

    let mut publisher = Publisher::new(require(
        publisher_el.child_string("Title"),
        PromptField::PublisherTitle,
        prompt,
    )?);
    publisher.sources = read_identifiers(publisher_el)?;

    let mut series = Series::new(
        require(series_el.child_string("Title"), PromptField::SeriesTitle, prompt)?,
        1,
    );
    let (volume, start_year) = volume_field(series_el.child_parsed::<i32>("Volume")?);
    series.volume = volume;
    series.start_year = start_year;
    series.sources = read_identifiers(series_el)?;

    let mut issue = Issue::new(require(
        comic_el.child_string("Number"),
        PromptField::IssueNumber,
        prompt,
    )?);
    issue.format = comic_el
        .child_text("Format")
        .and_then(Format::load)
        .unwrap_or_default();
    issue.title = comic_el.child_string("Title");
    if issue.title.is_none() && issue.format.is_collected_edition() && issue.number == "0" {
        issue.title = prompt
            .prompt(PromptField::IssueTitle)?
            .filter(|t| !t.trim().is_empty());
    }
    issue.cover_date = read_date(comic_el, "CoverDate")?;
    issue.store_date = read_date(comic_el, "StoreDate")?;
    issue.page_count = comic_el.child_parsed("PageCount")?.unwrap_or(0);
    issue.summary = comic_el.child_string("Summary");
    issue.language = comic_el
        .child_text("LanguageISO")
        .map(str::to_lowercase)
        .unwrap_or_else(|| "en".to_string());
    issue.sources = read_identifiers(comic_el)?;

    if let Some(creators) = comic_el.child("Creators") {
        for creator in creators.children_named("Creator") {
            let Some(name) = creator.child_string("Name") else {
                continue;
            };
            let roles = creator
                .child("Roles")
                .map(|roles| {
                    roles
                        .children_named("Role")
                        .filter_map(|r| Role::load(r.text.trim()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            issue.add_creator(Creator::new(name, roles));
        }
    }
    if let Some(genres) = comic_el.child("Genres") {
        issue.genres = genres
            .children_named("Genre")
            .filter_map(|g| Genre::load(g.text.trim()))
            .collect();
    }

    let mut metadata = Metadata::new(publisher, series, issue);
    metadata.notes = root.descend(&["Meta", "Notes"]).and_then(|n| {
        let text = n.text.trim();
        (!text.is_empty()).then(|| text.to_string())
    });
    Ok(metadata)
}

fn read_date(element: &XmlElement, name: &str) -> Result<Option<NaiveDate>, SidecarError> {
    match element.child_text(name) {
        None => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Some)
            .map_err(|_| SidecarError::invalid(format!("bad date for {name}: '{text}'"))),
    }
}

fn read_identifiers(element: &XmlElement) -> Result<Sources, SidecarError> {
    let mut sources = Sources::default();
    let Some(identifiers) = element.child("Identifiers") else {
        return Ok(sources);
    };
    for identifier in identifiers.children_named("Identifier") {
        let Some(service) = identifier.child_text("Service") else {
            continue;
        };
        if service.eq_ignore_ascii_case(COMIXOLOGY) {
            sources.comixology = identifier.child_string("URL");
            continue;
        }
        match Provider::load(service) {
            Some(provider) => sources.set(provider, identifier.child_parsed("ID")?),
            None => log::debug!("Ignoring identifier for unknown service '{service}'"),
        }
    }
    Ok(sources)
}

fn write_identifiers(w: &mut XmlWriter, sources: &Sources) {
    if sources.is_empty() {
        return;
    }
    w.open("Identifiers", &[]);
    for (provider, id) in sources.iter() {
        w.open("Identifier", &[]);
        w.element("Service", provider.title());
        w.element("ID", &id.to_string());
        w.close("Identifier");
    }
    if let Some(url) = &sources.comixology {
        w.open("Identifier", &[]);
        w.element("Service", COMIXOLOGY);
        w.element("URL", url);
        w.close("Identifier");
    }
    w.close("Identifiers");
}

fn write(metadata: &Metadata) -> String {
    let issue = &metadata.issue;
    let volume = volume_text(&metadata.series);
    let meta = Meta::today();

    let mut w = XmlWriter::new();
    w.open(ROOT, &[]);
    w.open("Data", &[]);

    w.open("Publisher", &[]);
    w.element("Title", &metadata.publisher.title);
    write_identifiers(&mut w, &metadata.publisher.sources);
    w.close("Publisher");

    w.open("Series", &[]);
    w.element("Title", &metadata.series.title);
    w.element("Volume", &volume);
    write_identifiers(&mut w, &metadata.series.sources);
    w.close("Series");

    w.open("Comic", &[]);
    w.element("Format", issue.format.title());
    w.element("Number", &issue.number);
    w.element_opt("Title", issue.title.as_deref());
    if let Some(date) = issue.cover_date {
        w.element("CoverDate", &date.format(DATE_FORMAT).to_string());
    }
    if let Some(date) = issue.store_date {
        w.element("StoreDate", &date.format(DATE_FORMAT).to_string());
    }
    w.element("PageCount", &issue.page_count.to_string());
    w.element_opt("Summary", issue.summary.as_deref());
    w.element("LanguageISO", &issue.language.to_uppercase());
    if !issue.creators.is_empty() {
        w.open("Creators", &[]);
        for creator in &issue.creators {
            w.open("Creator", &[]);
            w.element("Name", &creator.name);
            w.open("Roles", &[]);
            for role in &creator.roles {
                w.element("Role", role.title());
            }
            w.close("Roles");
            w.close("Creator");
        }
        w.close("Creators");
    }
    if !issue.genres.is_empty() {
        w.open("Genres", &[]);
        for genre in &issue.genres {
            w.element("Genre", genre.title());
        }
        w.close("Genres");
    }
    write_identifiers(&mut w, &issue.sources);
    w.close("Comic");

    w.close("Data");

    w.open("Meta", &[]);
    w.element("Date", &meta.date.format(DATE_FORMAT).to_string());
    w.open("Tool", &[]);
    w.element("Name", &meta.tool.name);
    w.element("Version", &meta.tool.version);
    w.close("Tool");
    w.element_opt("Notes", metadata.notes.as_deref());
    w.close("Meta");

    w.close(ROOT);
    w.finish()
}

#[cfg(test)]
#[path = "tests/comic_data_tests.rs"]
mod tests;
