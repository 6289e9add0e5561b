//! `ComicInfo.xml`, the flat sidecar read by most comic readers.
//!
//! Creators are stored as one comma-separated element per role, and the other
//! list fields are comma-separated too. Some model fields have no home here:
//! store date, provider ids, story arc numbers, the `Artist` and editorial
//! sub-roles. A `Volume` past 1900 is a start year, so a series with both a
//! start year and a volume number keeps only the year.

use chrono::{Datelike, NaiveDate};
use longbox_core::{
    AgeRating, Format, Genre, Manga, PageType, Role, Vocabulary, YesNo, sorted_unique, split_list,
};
use longbox_model::{Creator, Issue, Metadata, Page, Publisher, Series, StoryArc};

use crate::error::SidecarError;
use crate::prompt::{FieldPrompt, PromptField, require};
use crate::xml::{XmlElement, XmlWriter, expect_root, parse_document};
use crate::{Sidecar, volume_field, volume_text};

const ROOT: &str = "ComicInfo";

const CREATOR_ELEMENTS: &[(&str, Role)] = &[
    ("Writer", Role::Writer),
    ("Penciller", Role::Penciller),
    ("Inker", Role::Inker),
    ("Colorist", Role::Colourist),
    ("Letterer", Role::Letterer),
    ("CoverArtist", Role::CoverArtist),
    ("Editor", Role::Editor),
];

pub struct ComicInfo;

impl Sidecar for ComicInfo {
    fn name(&self) -> &'static str {
        "ComicInfo"
    }

    fn file_name(&self) -> &'static str {
        "ComicInfo.xml"
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
    let mut publisher = Publisher::new(require(
        root.child_string("Publisher"),
        PromptField::PublisherTitle,
        prompt,
    )?);
    publisher.imprint = root.child_string("Imprint");

    let mut series = Series::new(
        require(root.child_string("Series"), PromptField::SeriesTitle, prompt)?,
        1,
    );
    let (volume, start_year) = volume_field(root.child_parsed::<i32>("Volume")?);
    series.volume = volume;
    series.start_year = start_year;

    let mut issue = Issue::new(require(
        root.child_string("Number"),
        PromptField::IssueNumber,
        prompt,
    )?);
    issue.format = root
        .child_text("Format")
        .and_then(Format::load)
        .unwrap_or_default();
    issue.title = root.child_string("Title");
    issue.summary = root.child_string("Summary");
    issue.page_count = root.child_parsed("PageCount")?.unwrap_or(0);
    issue.language = root
        .child_text("LanguageISO")
        .map(str::to_lowercase)
        .unwrap_or_else(|| "en".to_string());
    issue.cover_date = cover_date(root)?;

    for (element, role) in CREATOR_ELEMENTS {
        for name in root.child_text(element).map(split_list).unwrap_or_default() {
            issue.add_creator(Creator::new(name, [*role]));
        }
    }

    for name in root.child_text("Genre").map(split_list).unwrap_or_default() {
        match Genre::load(&name) {
            Some(genre) => {
                issue.genres.insert(genre);
            }
            None => log::debug!("Ignoring unknown genre '{name}'"),
        }
    }
    let manga = root.child_text("Manga").and_then(Manga::load).unwrap_or_default();
    if manga.is_manga() {
        issue.genres.insert(Genre::Manga);
    }
    issue.black_and_white = root
        .child_text("BlackAndWhite")
        .and_then(YesNo::load)
        .unwrap_or_default();
    issue.age_rating = root
        .child_text("AgeRating")
        .and_then(AgeRating::load)
        .unwrap_or_default();

    issue.characters = root.child_text("Characters").map(split_list).unwrap_or_default();
    issue.teams = root.child_text("Teams").map(split_list).unwrap_or_default();
    issue.locations = root.child_text("Locations").map(split_list).unwrap_or_default();

    let arcs = ["AlternateSeries", "StoryArc"]
        .iter()
        .filter_map(|name| root.child_text(name))
        .flat_map(|text| text.split(','));
    issue.story_arcs = sorted_unique(arcs).into_iter().map(StoryArc::new).collect();

    if let Some(web) = root.child_text("Web") {
        if web.to_lowercase().contains("comixology") {
            issue.sources.comixology = Some(web.to_string());
        }
    }

    let mut metadata = Metadata::new(publisher, series, issue);
    metadata.notes = root.child_string("Notes");
    if let Some(pages) = root.child("Pages") {
        for page in pages.children_named("Page") {
            metadata.pages.insert(read_page(page)?);
        }
    }
    Ok(metadata)
}

/// `Year`/`Month`/`Day`, with month and day defaulting to 1. No year, no date.
fn cover_date(root: &XmlElement) -> Result<Option<NaiveDate>, SidecarError> {
    let Some(year) = root.child_parsed::<i32>("Year")? else {
        return Ok(None);
    };
    let month = root.child_parsed::<u32>("Month")?.unwrap_or(1);
    let day = root.child_parsed::<u32>("Day")?.unwrap_or(1);
    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| SidecarError::invalid(format!("invalid cover date {year}-{month}-{day}")))
}

fn read_page(element: &XmlElement) -> Result<Page, SidecarError> {
    let image = element
        .attribute_parsed("Image")?
        .ok_or_else(|| SidecarError::invalid("page without Image attribute"))?;
    let page_type = element
        .attribute("Type")
        .and_then(PageType::load)
        .unwrap_or_default();
    let mut page = Page::new(image, page_type);
    page.double_page = element
        .attribute("DoublePage")
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));
    page.image_size = element.attribute_parsed("ImageSize")?;
    page.image_width = element.attribute_parsed("ImageWidth")?;
    page.image_height = element.attribute_parsed("ImageHeight")?;
    page.key = element.attribute("Key").map(str::to_string);
    page.bookmark = element.attribute("Bookmark").map(str::to_string);
    Ok(page)
}

fn join(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

// Elements are written in alphabetical order.
fn write(metadata: &Metadata) -> String {
    let issue = &metadata.issue;
    let names = |role: Role| {
        let names: Vec<String> = issue
            .creators_with_role(role)
            .into_iter()
            .map(str::to_string)
            .collect();
        join(&names)
    };
    let genres: Vec<String> = issue.genres.iter().map(|g| g.title().to_string()).collect();
    let arcs: Vec<String> = issue.story_arcs.iter().map(|a| a.title.clone()).collect();
    let volume = volume_text(&metadata.series);

    let mut w = XmlWriter::new();
    w.open(
        ROOT,
        &[
            ("xmlns:xsd", "http://www.w3.org/2001/XMLSchema".to_string()),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance".to_string()),
        ],
    );
    if issue.age_rating != AgeRating::Unknown {
        w.element("AgeRating", issue.age_rating.title());
    }
    if issue.black_and_white != YesNo::Unknown {
        w.element("BlackAndWhite", issue.black_and_white.title());
    }
    w.element_opt("Characters", join(&issue.characters).as_deref());
    w.element_opt("Colorist", names(Role::Colourist).as_deref());
    w.element_opt("CoverArtist", names(Role::CoverArtist).as_deref());
    if let Some(date) = issue.cover_date {
        w.element("Day", &date.day().to_string());
    }
    w.element_opt("Editor", names(Role::Editor).as_deref());
    w.element("Format", issue.format.title());
    w.element_opt("Genre", join(&genres).as_deref());
    w.element_opt("Imprint", metadata.publisher.imprint.as_deref());
    w.element_opt("Inker", names(Role::Inker).as_deref());
    w.element("LanguageISO", &issue.language);
    w.element_opt("Letterer", names(Role::Letterer).as_deref());
    w.element_opt("Locations", join(&issue.locations).as_deref());
    if issue.genres.contains(&Genre::Manga) {
        w.element("Manga", Manga::Yes.title());
    }
    if let Some(date) = issue.cover_date {
        w.element("Month", &date.month().to_string());
    }
    w.element_opt("Notes", metadata.notes.as_deref());
    w.element("Number", &issue.number);
    w.element("PageCount", &issue.page_count.to_string());
    if !metadata.pages.is_empty() {
        w.open("Pages", &[]);
        for page in &metadata.pages {
            w.empty("Page", &page_attributes(page));
        }
        w.close("Pages");
    }
    w.element_opt("Penciller", names(Role::Penciller).as_deref());
    w.element("Publisher", &metadata.publisher.title);
    w.element("Series", &metadata.series.title);
    w.element_opt("StoryArc", join(&arcs).as_deref());
    w.element_opt("Summary", issue.summary.as_deref());
    w.element_opt("Teams", join(&issue.teams).as_deref());
    w.element_opt("Title", issue.title.as_deref());
    w.element("Volume", &volume);
    w.element_opt("Web", issue.sources.comixology.as_deref());
    w.element_opt("Writer", names(Role::Writer).as_deref());
    if let Some(date) = issue.cover_date {
        w.element("Year", &date.year().to_string());
    }
    w.close(ROOT);
    w.finish()
}

fn page_attributes(page: &Page) -> Vec<(&'static str, String)> {
    let mut attrs = vec![("Image", page.image.to_string())];
    if let Some(size) = page.image_size {
        attrs.push(("ImageSize", size.to_string()));
    }
    if let Some(width) = page.image_width {
        attrs.push(("ImageWidth", width.to_string()));
    }
    if let Some(height) = page.image_height {
        attrs.push(("ImageHeight", height.to_string()));
    }
    attrs.push(("Type", page.page_type.code().to_string()));
    if page.double_page {
        attrs.push(("DoublePage", "true".to_string()));
    }
    if let Some(key) = &page.key {
        attrs.push(("Key", key.clone()));
    }
    if let Some(bookmark) = &page.bookmark {
        attrs.push(("Bookmark", bookmark.clone()));
    }
    attrs
}

#[cfg(test)]
#[path = "tests/comic_info_tests.rs"]
mod tests;
