use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use longbox_lib::catalog::load_local_catalogs;
use longbox_lib::{
    CancelFlag, CatalogSource, ImportOptions, ImportProgress, Organizer, Settings, ZipStore,
};

use crate::CliError;
use crate::cli_types::ImportArgs;
use crate::interrupt;
use crate::prompt::TerminalChoice;
use crate::spinner::Spinner;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn catalog_sources(settings: &Settings) -> Result<Vec<Box<dyn CatalogSource>>, CliError> {
    let Some(dir) = &settings.general.catalog_dir else {
        return Ok(Vec::new());
    };
    let catalogs = load_local_catalogs(dir)?;
    if catalogs.is_empty() {
        log::warn!("No catalog files found in {}", dir.display());
    }
    Ok(catalogs
        .into_iter()
        .map(|catalog| {
            log::debug!("{}: {} entries", catalog.name(), catalog.len());
            Box::new(catalog) as Box<dyn CatalogSource>
        })
        .collect())
}

fn show_progress(spinner: &Spinner, event: ImportProgress) {
    match event {
        ImportProgress::Started {
            archive,
            index,
            total,
        } => {
            log::info!(
                "{} {}",
                format!("[{index}/{total}]").if_supports_color(Stdout, |t| t.dimmed()),
                file_name(&archive).if_supports_color(Stdout, |t| t.bold()),
            );
        }
        ImportProgress::Extracting { archive } => {
            spinner.show(format!("Extracting {}", file_name(&archive)));
        }
        ImportProgress::Fetching { source } => {
            spinner.show(format!("Pulling from {source}"));
        }
        ImportProgress::Packing { target } => {
            spinner.show(format!("Archiving {}", file_name(&target)));
        }
        ImportProgress::Completed { target } => {
            spinner.hide();
            log::info!(
                "  {} {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                target.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        ImportProgress::Failed { archive, message } => {
            spinner.hide();
            log::debug!("{}: {message}", file_name(&archive));
        }
    }
}

/// Import every archive in a folder.
pub(crate) fn run_import(settings: Settings, args: ImportArgs, quiet: bool) -> Result<(), CliError> {
    if !args.folder.is_dir() {
        return Err(CliError::other(format!(
            "Not a folder: {}",
            args.folder.display()
        )));
    }

    let sources = catalog_sources(&settings)?;
    let store = ZipStore::new(settings.general.cache_root());
    let options = ImportOptions {
        manual_edit: args.manual_edit,
        resolve_manually: args.resolve_manually,
        keep_source: args.keep_source,
        collection_root: args.collection_root,
    };

    let cancel = CancelFlag::new();
    interrupt::install(cancel.clone())?;
    let spinner = Spinner::new(quiet);
    let progress_spinner = spinner.clone();

    let mut organizer = Organizer::new(settings, Box::new(store))
        .with_sources(sources)
        .with_options(options)
        .with_cancel(cancel.clone())
        .with_progress(move |event| show_progress(&progress_spinner, event));
    log::info!(
        "Importing into {}",
        organizer
            .collection_root()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    let mut choice = TerminalChoice::new(cancel, spinner.clone());
    let report = organizer.process_batch(&args.folder, &mut choice);
    spinner.hide();
    let report = report?;

    log::info!("");
    log::info!(
        "{} imported, {} failed",
        report
            .processed
            .to_string()
            .if_supports_color(Stdout, |t| t.green()),
        report
            .failed
            .to_string()
            .if_supports_color(Stdout, |t| t.red()),
    );
    if report.interrupted {
        return Err(CliError::Interrupted);
    }
    if report.failed > 0 {
        return Err(CliError::other(format!(
            "{} archive(s) could not be imported",
            report.failed
        )));
    }
    Ok(())
}
