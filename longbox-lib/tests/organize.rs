use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use longbox_core::{Format, Provider, Vocabulary};
use longbox_lib::catalog::{CatalogRecord, IssueRecord, SeriesRecord};
use longbox_lib::*;
use longbox_model::{Issue, Metadata, Publisher, Series};
use longbox_sidecar::{MetadataJson, Sidecar};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Answers from a queue; an exhausted queue behaves like end of input.
#[derive(Default)]
struct Script {
    answers: VecDeque<String>,
    selections: VecDeque<usize>,
    pauses: usize,
}

impl Script {
    fn answers(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl UserChoice for Script {
    fn select(&mut self, _prompt: &str, _options: &[String]) -> Result<usize, ChoiceError> {
        self.selections.pop_front().ok_or(ChoiceError::Interrupted)
    }

    fn text(&mut self, _prompt: &str, default: Option<&str>) -> Result<String, ChoiceError> {
        let answer = self.answers.pop_front().ok_or(ChoiceError::Interrupted)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn pause(&mut self, _message: &str) -> Result<(), ChoiceError> {
        self.pauses += 1;
        Ok(())
    }
}

struct Failing;

impl CatalogSource for Failing {
    fn provider(&self) -> Provider {
        Provider::Comicvine
    }

    fn fetch(&mut self, _metadata: &Metadata) -> Result<Option<CatalogRecord>, CatalogError> {
        Err(CatalogError::unavailable("timed out"))
    }
}

struct Fixture {
    tmp: TempDir,
    settings: Settings,
}

impl Fixture {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("incoming")).unwrap();
        let mut settings = Settings::default();
        settings.general.collection_root = tmp.path().join("collection");
        settings.general.cache_dir = Some(tmp.path().join("cache"));
        Self { tmp, settings }
    }

    fn incoming(&self) -> PathBuf {
        self.tmp.path().join("incoming")
    }

    fn collection(&self) -> PathBuf {
        self.tmp.path().join("collection")
    }

    fn cache(&self) -> PathBuf {
        self.tmp.path().join("cache")
    }

    fn add_archive(&self, name: &str, sidecar: Option<&Metadata>) -> PathBuf {
        let path = self.incoming().join(name);
        let mut zip = ZipWriter::new(File::create(&path).unwrap());
        let options = SimpleFileOptions::default();
        for page in ["p1.jpg", "p2.jpg", "p3.jpg"] {
            zip.start_file(page, options).unwrap();
            zip.write_all(page.as_bytes()).unwrap();
        }
        if let Some(metadata) = sidecar {
            zip.start_file("Metadata.json", options).unwrap();
            zip.write_all(&MetadataJson.serialize(metadata).unwrap()).unwrap();
        }
        zip.finish().unwrap();
        path
    }

    fn organizer(&self) -> Organizer {
        let store = ZipStore::new(self.settings.general.cache_root());
        Organizer::new(self.settings.clone(), Box::new(store))
    }
}

fn batman() -> Metadata {
    Metadata::new(
        Publisher::new("DC Comics"),
        Series::new("Batman", 3),
        Issue::new("7"),
    )
}

fn read_metadata(archive: &Path) -> Metadata {
    let mut zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut raw = Vec::new();
    zip.by_name("Metadata.json").unwrap().read_to_end(&mut raw).unwrap();
    MetadataJson.parse(&raw).unwrap()
}

fn entries(archive: &Path) -> Vec<String> {
    let zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut names: Vec<String> = zip.file_names().map(str::to_string).collect();
    names.sort();
    names
}

fn cache_is_empty(fixture: &Fixture) -> bool {
    !fixture.cache().exists() || fs::read_dir(fixture.cache()).unwrap().next().is_none()
}

#[test]
fn imports_archive_with_sidecar() {
    let fixture = Fixture::new();
    let source = fixture.add_archive("batman 7.cbz", Some(&batman()));

    let report = fixture
        .organizer()
        .process_batch(&fixture.incoming(), &mut Script::default())
        .unwrap();
    assert_eq!(
        report,
        BatchReport {
            processed: 1,
            failed: 0,
            interrupted: false
        }
    );

    let target = fixture
        .collection()
        .join("DC-Comics")
        .join("Batman-v3")
        .join("Batman-v3-#007.cbz");
    assert!(target.is_file());
    assert_eq!(
        entries(&target),
        [
            "Batman-v3-#007-0.jpg",
            "Batman-v3-#007-1.jpg",
            "Batman-v3-#007-2.jpg",
            "ComicInfo.xml",
            "Metadata.json",
        ]
    );
    assert_eq!(read_metadata(&target).series.title, "Batman");
    assert!(!source.exists());
    assert!(cache_is_empty(&fixture));
}

#[test]
fn leftovers_from_an_aborted_run_are_cleared() {
    let fixture = Fixture::new();
    fixture.add_archive("batman 7.cbz", Some(&batman()));
    let stale = fixture.cache().join("batman 7");
    fs::create_dir_all(&stale).unwrap();
    fs::write(stale.join("p1.jpg"), b"old").unwrap();
    fs::write(fixture.cache().join("Batman-v3-#007.cbz"), b"partial").unwrap();

    let report = fixture
        .organizer()
        .process_batch(&fixture.incoming(), &mut Script::default())
        .unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.failed, 0);
    assert!(cache_is_empty(&fixture));
}

#[test]
fn prompts_for_metadata_when_no_sidecar() {
    let fixture = Fixture::new();
    fixture.add_archive("saga.cbz", None);

    let mut script = Script::answers(&["Image", "Saga", "", "1"]);
    let comic = Format::all().iter().position(|f| *f == Format::Comic).unwrap();
    script.selections.push_back(comic);

    let target = fixture
        .organizer()
        .process_archive(&fixture.incoming().join("saga.cbz"), &mut script)
        .unwrap();
    assert_eq!(
        target,
        fixture.collection().join("Image").join("Saga").join("Saga-#001.cbz")
    );
    let metadata = read_metadata(&target);
    assert_eq!(metadata.series.volume, 1);
    assert_eq!(metadata.issue.format, Format::Comic);
}

#[test]
fn failing_source_does_not_stop_the_others() {
    let fixture = Fixture::new();
    fixture.add_archive("batman.cbz", Some(&batman()));

    let local = LocalCatalog::new(
        Provider::Metron,
        vec![CatalogRecord {
            series: SeriesRecord {
                title: Some("Batman".into()),
                ..SeriesRecord::default()
            },
            issue: IssueRecord {
                id: Some(5501),
                number: Some("7".into()),
                summary: Some("Bat & Cat on the rooftops.".into()),
                ..IssueRecord::default()
            },
            ..CatalogRecord::default()
        }],
    );
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let mut organizer = fixture
        .organizer()
        .with_sources(vec![Box::new(Failing), Box::new(local)])
        .with_progress(move |event| {
            if let ImportProgress::Fetching { source } = event {
                log.borrow_mut().push(source);
            }
        });

    let report = organizer
        .process_batch(&fixture.incoming(), &mut Script::default())
        .unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(*seen.borrow(), ["Comicvine", "Metron"]);

    let target = fixture
        .collection()
        .join("DC-Comics")
        .join("Batman-v3")
        .join("Batman-v3-#007.cbz");
    let metadata = read_metadata(&target);
    assert_eq!(metadata.issue.summary.as_deref(), Some("Bat & Cat on the rooftops."));
    assert_eq!(metadata.issue.sources.metron, Some(5501));
}

#[test]
fn collision_fails_the_archive_and_keeps_the_source() {
    let fixture = Fixture::new();
    let source = fixture.add_archive("batman.cbz", Some(&batman()));
    let target_dir = fixture.collection().join("DC-Comics").join("Batman-v3");
    fs::create_dir_all(&target_dir).unwrap();
    fs::write(target_dir.join("Batman-v3-#007.cbz"), b"existing").unwrap();

    let report = fixture
        .organizer()
        .process_batch(&fixture.incoming(), &mut Script::default())
        .unwrap();
    assert_eq!(report.processed, 0);
    assert_eq!(report.failed, 1);
    assert!(!report.interrupted);
    assert!(source.exists());
    assert_eq!(fs::read(target_dir.join("Batman-v3-#007.cbz")).unwrap(), b"existing");
    assert!(cache_is_empty(&fixture));
}

#[test]
fn interrupted_prompt_stops_the_batch() {
    let fixture = Fixture::new();
    let first = fixture.add_archive("a.cbz", None);
    let second = fixture.add_archive("b.cbz", Some(&batman()));

    let report = fixture
        .organizer()
        .process_batch(&fixture.incoming(), &mut Script::default())
        .unwrap();
    assert!(report.interrupted);
    assert_eq!(report.processed, 0);
    assert!(first.exists());
    assert!(second.exists());
    assert!(cache_is_empty(&fixture));
}

#[test]
fn cancelled_flag_skips_everything() {
    let fixture = Fixture::new();
    let source = fixture.add_archive("batman.cbz", Some(&batman()));
    let cancel = CancelFlag::new();
    cancel.cancel();

    let report = fixture
        .organizer()
        .with_cancel(cancel)
        .process_batch(&fixture.incoming(), &mut Script::default())
        .unwrap();
    assert!(report.interrupted);
    assert_eq!(report.processed + report.failed, 0);
    assert!(source.exists());
}

#[test]
fn keep_source_and_manual_edit() {
    let fixture = Fixture::new();
    let source = fixture.add_archive("batman.cbz", Some(&batman()));
    let root = fixture.tmp.path().join("elsewhere");
    let options = ImportOptions {
        manual_edit: true,
        keep_source: true,
        collection_root: Some(root.clone()),
        ..ImportOptions::default()
    };

    let mut script = Script::default();
    let target = fixture
        .organizer()
        .with_options(options)
        .process_archive(&source, &mut script)
        .unwrap();
    assert_eq!(script.pauses, 1);
    assert!(target.starts_with(&root));
    assert!(target.is_file());
    assert!(source.exists());
}

#[test]
fn create_metadata_asks_for_collected_edition_title() {
    let mut script = Script::answers(&["DC Comics", "Batman", "1", "0", "Year One"]);
    let trade = Format::all()
        .iter()
        .position(|f| *f == Format::TradePaperback)
        .unwrap();
    script.selections.push_back(trade);

    let metadata = create_metadata(&mut script).unwrap();
    assert_eq!(metadata.issue.title.as_deref(), Some("Year One"));
    assert_eq!(metadata.file_stem(), "Batman-Year-One-TP");
}

#[test]
fn create_metadata_reasks_blank_required_fields() {
    let mut script = Script::answers(&["", "  ", "Image", "Saga", "x", "2", "12"]);
    script.selections.push_back(1);

    let metadata = create_metadata(&mut script).unwrap();
    assert_eq!(metadata.publisher.title, "Image");
    assert_eq!(metadata.series.volume, 2);
    assert_eq!(metadata.issue.number, "12");
}
