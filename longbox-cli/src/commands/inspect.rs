use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use longbox_core::{AgeRating, YesNo};
use longbox_lib::Settings;
use longbox_model::{Metadata, Sources, relative_output_path};

use super::sidecar_kind;
use crate::CliError;

fn field(label: &str, value: impl std::fmt::Display) {
    log::info!(
        "  {} {}",
        format!("{label}:").if_supports_color(Stdout, |t| t.cyan()),
        value,
    );
}

fn optional(label: &str, value: Option<impl std::fmt::Display>) {
    if let Some(value) = value {
        field(label, value);
    }
}

fn list(label: &str, values: &[String]) {
    if !values.is_empty() {
        field(label, values.join(", "));
    }
}

fn ids(label: &str, sources: &Sources) {
    let mut parts: Vec<String> = sources
        .iter()
        .map(|(provider, id)| format!("{provider} {id}"))
        .collect();
    if let Some(url) = &sources.comixology {
        parts.push(url.clone());
    }
    list(label, &parts);
}

fn print_summary(metadata: &Metadata) {
    let (publisher, series, issue) = (&metadata.publisher, &metadata.series, &metadata.issue);

    log::info!("{}", "Publisher".if_supports_color(Stdout, |t| t.bold()));
    field("Title", &publisher.title);
    optional("Imprint", publisher.imprint.as_ref());
    ids("Ids", &publisher.sources);

    log::info!("{}", "Series".if_supports_color(Stdout, |t| t.bold()));
    field("Title", &series.title);
    field("Volume", series.volume);
    optional("Start year", series.start_year);
    ids("Ids", &series.sources);

    log::info!("{}", "Issue".if_supports_color(Stdout, |t| t.bold()));
    field("Format", issue.format);
    field("Number", &issue.number);
    optional("Title", issue.title.as_ref());
    optional("Cover date", issue.cover_date);
    optional("Store date", issue.store_date);
    if issue.page_count > 0 {
        field("Pages", issue.page_count);
    }
    field("Language", &issue.language);
    if issue.age_rating != AgeRating::Unknown {
        field("Age rating", issue.age_rating);
    }
    if issue.black_and_white != YesNo::Unknown {
        field("Black and white", issue.black_and_white);
    }
    for creator in &issue.creators {
        let roles: Vec<String> = creator.roles.iter().map(ToString::to_string).collect();
        field(&creator.name, roles.join(", "));
    }
    let genres: Vec<String> = issue.genres.iter().map(ToString::to_string).collect();
    list("Genres", &genres);
    list("Characters", &issue.characters);
    list("Teams", &issue.teams);
    list("Locations", &issue.locations);
    let arcs: Vec<String> = issue
        .story_arcs
        .iter()
        .map(|arc| match arc.number {
            Some(n) => format!("{} ({n})", arc.title),
            None => arc.title.clone(),
        })
        .collect();
    list("Story arcs", &arcs);
    ids("Ids", &issue.sources);
    optional("Summary", issue.summary.as_ref());
    optional("Notes", metadata.notes.as_ref());
}

/// Parse a sidecar and show its contents and derived file path.
pub(crate) fn run_inspect(settings: &Settings, file: &Path) -> Result<(), CliError> {
    let kind = sidecar_kind(file)?;
    let raw = fs::read(file)?;
    let metadata = kind.adapter().parse(&raw)?;

    print_summary(&metadata);
    log::info!("");
    log::info!(
        "{} {}",
        "Files as:".if_supports_color(Stdout, |t| t.bold()),
        relative_output_path(&metadata, &settings.general.output_format)
            .display()
            .if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
