//! Import orchestration: one archive in, one renamed archive out.

use std::fs;
use std::path::{Path, PathBuf};

use longbox_core::{Format, Vocabulary, natural_cmp};
use longbox_model::{Issue, Metadata, Publisher, Series, ValidationError, output_path};
use longbox_sidecar::{SidecarError, SidecarKind, read_sidecar, write_sidecars};
use thiserror::Error;

use crate::archive::{ArchiveError, ArchiveStore, WorkDir};
use crate::cancel::CancelFlag;
use crate::catalog::CatalogSource;
use crate::choice::{ChoiceError, ChoicePrompt, UserChoice};
use crate::merge::enrich;
use crate::progress::ImportProgress;
use crate::resolve::ResolutionPolicy;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Sidecar error: {0}")]
    Sidecar(SidecarError),

    #[error("{0}")]
    Choice(ChoiceError),

    #[error("Invalid metadata: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interrupted")]
    Interrupted,
}

impl OrganizeError {
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

impl From<SidecarError> for OrganizeError {
    fn from(e: SidecarError) -> Self {
        match e {
            SidecarError::Interrupted => Self::Interrupted,
            e => Self::Sidecar(e),
        }
    }
}

impl From<ChoiceError> for OrganizeError {
    fn from(e: ChoiceError) -> Self {
        match e {
            ChoiceError::Interrupted => Self::Interrupted,
            e => Self::Choice(e),
        }
    }
}

/// Per-run switches that sit on top of [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Pause after enrichment so the sidecars can be edited by hand.
    pub manual_edit: bool,
    /// Ask for every conflicting field regardless of the resolution order.
    pub resolve_manually: bool,
    /// Leave the source archive in place after a successful import.
    pub keep_source: bool,
    /// Overrides `general.collection_root`.
    pub collection_root: Option<PathBuf>,
}

/// Outcome of [`Organizer::process_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
    /// The batch stopped early on a user interrupt.
    pub interrupted: bool,
}

pub struct Organizer {
    settings: Settings,
    store: Box<dyn ArchiveStore>,
    sources: Vec<Box<dyn CatalogSource>>,
    options: ImportOptions,
    cancel: CancelFlag,
    progress: Option<Box<dyn Fn(ImportProgress)>>,
}

impl Organizer {
    pub fn new(settings: Settings, store: Box<dyn ArchiveStore>) -> Self {
        Self {
            settings,
            store,
            sources: Vec::new(),
            options: ImportOptions::default(),
            cancel: CancelFlag::new(),
            progress: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<Box<dyn CatalogSource>>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_progress(mut self, progress: impl Fn(ImportProgress) + 'static) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn collection_root(&self) -> &Path {
        self.options
            .collection_root
            .as_deref()
            .unwrap_or(&self.settings.general.collection_root)
    }

    fn policy(&self) -> ResolutionPolicy {
        let mut policy = ResolutionPolicy::from_settings(&self.settings);
        policy.interactive |= self.options.resolve_manually;
        policy
    }

    fn report(&self, event: ImportProgress) {
        if let Some(progress) = &self.progress {
            progress(event);
        }
    }

    fn checkpoint(&self) -> Result<(), OrganizeError> {
        if self.cancel.is_cancelled() {
            return Err(OrganizeError::Interrupted);
        }
        Ok(())
    }

    /// Import every archive in `folder` the store supports, in natural order.
    ///
    /// Failures are logged and counted; an interrupt stops the batch and is
    /// reported rather than returned.
    pub fn process_batch(
        &mut self,
        folder: &Path,
        choice: &mut dyn UserChoice,
    ) -> Result<BatchReport, OrganizeError> {
        self.store.clear_cache()?;
        let mut archives: Vec<PathBuf> = fs::read_dir(folder)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && self.store.supports(path))
            .collect();
        archives.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
        log::info!("Found {} archives in {}", archives.len(), folder.display());

        let mut report = BatchReport::default();
        let total = archives.len();
        for (index, archive) in archives.iter().enumerate() {
            if self.cancel.is_cancelled() {
                report.interrupted = true;
                break;
            }
            let name = archive
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            self.report(ImportProgress::Started {
                archive: archive.clone(),
                index: index + 1,
                total,
            });
            match self.process_archive(archive, choice) {
                Ok(target) => {
                    report.processed += 1;
                    self.report(ImportProgress::Completed { target });
                }
                Err(e) if e.is_interrupt() => {
                    log::warn!("Interrupted while importing {name}");
                    report.interrupted = true;
                    break;
                }
                Err(e) => {
                    log::error!("Failed to import {name}: {e}");
                    report.failed += 1;
                    self.report(ImportProgress::Failed {
                        archive: archive.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    /// Import one archive and return where it was written.
    ///
    /// The work directory is removed whatever the outcome. The source archive
    /// is only removed after a successful pack, and never with `keep_source`.
    pub fn process_archive(
        &mut self,
        source: &Path,
        choice: &mut dyn UserChoice,
    ) -> Result<PathBuf, OrganizeError> {
        self.checkpoint()?;
        self.report(ImportProgress::Extracting {
            archive: source.to_path_buf(),
        });
        let work = self.store.extract(source)?;

        let mut metadata = match read_sidecar(work.path(), &mut ChoicePrompt(&mut *choice))? {
            Some((kind, metadata)) => {
                log::info!("Using {}", kind.file_name());
                metadata
            }
            None => {
                log::info!("No usable sidecar found, creating one");
                create_metadata(choice)?
            }
        };
        self.checkpoint()?;

        let policy = self.policy();
        let progress = self.progress.as_deref();
        let notify = |event: ImportProgress| {
            if let Some(progress) = progress {
                progress(event);
            }
        };
        enrich(&mut metadata, &mut self.sources, &policy, choice, &notify)?;
        self.checkpoint()?;

        if self.options.manual_edit {
            metadata = self.manual_edit(&work, metadata, choice)?;
            self.checkpoint()?;
        }

        work.remove_extras()?;
        metadata.normalize();
        metadata.validate()?;
        write_sidecars(work.path(), &metadata, &self.settings.outputs.kinds())?;

        let target = output_path(
            &metadata,
            self.collection_root(),
            &self.settings.general.output_format,
        );
        self.checkpoint()?;
        self.report(ImportProgress::Packing {
            target: target.clone(),
        });
        self.store.pack(&work, &metadata, &target)?;

        if !self.options.keep_source {
            log::debug!("Removing {}", source.display());
            fs::remove_file(source)?;
        }
        Ok(target)
    }

    /// Write the sidecars, wait for the user, then read them back. If nothing
    /// parses afterwards the pre-edit metadata is kept.
    fn manual_edit(
        &self,
        work: &WorkDir,
        metadata: Metadata,
        choice: &mut dyn UserChoice,
    ) -> Result<Metadata, OrganizeError> {
        let mut kinds = self.settings.outputs.kinds();
        if kinds.is_empty() {
            kinds.push(SidecarKind::MetadataJson);
        }
        let written = write_sidecars(work.path(), &metadata, &kinds)?;
        choice.pause(&format!(
            "Edit {} in {}, then press Enter",
            written.join(", "),
            work.path().display()
        ))?;

        match read_sidecar(work.path(), &mut ChoicePrompt(&mut *choice))? {
            Some((_, edited)) => Ok(edited),
            None => {
                log::warn!("Edited sidecars could not be read, keeping previous values");
                Ok(metadata)
            }
        }
    }
}

fn required_text(choice: &mut dyn UserChoice, prompt: &str) -> Result<String, ChoiceError> {
    loop {
        let answer = choice.text(prompt, None)?;
        if !answer.trim().is_empty() {
            return Ok(answer.trim().to_string());
        }
    }
}

/// Build a fresh aggregate from prompts when an archive has no sidecar.
pub fn create_metadata(choice: &mut dyn UserChoice) -> Result<Metadata, ChoiceError> {
    let publisher = Publisher::new(required_text(choice, "Publisher Title")?);
    let series_title = required_text(choice, "Series Title")?;
    let volume = loop {
        let answer = choice.text("Series Volume", Some("1"))?;
        match answer.trim().parse::<u32>() {
            Ok(volume) if volume >= 1 => break volume,
            _ => log::warn!("'{answer}' is not a valid volume"),
        }
    };
    let series = Series::new(series_title, volume);

    let formats: Vec<String> = Format::all().iter().map(|f| f.title().to_string()).collect();
    let index = choice.select("Select Issue Format", &formats)?;
    let format = *Format::all().get(index).ok_or_else(|| ChoiceError::OutOfRange {
        prompt: "Issue Format".to_string(),
        index,
    })?;

    let mut issue = Issue::new(choice.text("Issue Number", Some("0"))?.trim());
    issue.format = format;
    if format.is_collected_edition() && issue.number == "0" {
        let title = choice.text("Issue Title", None)?;
        issue.title = Some(title.trim().to_string()).filter(|t| !t.is_empty());
    }
    Ok(Metadata::new(publisher, series, issue))
}
