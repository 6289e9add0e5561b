//! Finding and writing sidecars in an extracted archive directory.

use std::fs;
use std::path::Path;

use longbox_model::Metadata;

use crate::error::SidecarError;
use crate::prompt::FieldPrompt;
use crate::SidecarKind;

/// Parse the first usable sidecar in `dir`.
///
/// Candidates are tried in [`SidecarKind::all`] order. A file that fails to
/// read or parse is logged and skipped; only an interrupt stops the search.
/// Returns `None` when nothing usable was found.
pub fn read_sidecar(
    dir: &Path,
    prompt: &mut dyn FieldPrompt,
) -> Result<Option<(SidecarKind, Metadata)>, SidecarError> {
    for kind in SidecarKind::all() {
        let path = dir.join(kind.file_name());
        if !path.is_file() {
            continue;
        }
        log::debug!("Parsing {}", path.display());
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Unable to read {}: {e}", kind.file_name());
                continue;
            }
        };
        match kind.adapter().parse_with(&raw, prompt) {
            Ok(metadata) => return Ok(Some((*kind, metadata))),
            Err(SidecarError::Interrupted) => return Err(SidecarError::Interrupted),
            Err(e) => log::warn!("Unable to parse {}: {e}", kind.file_name()),
        }
    }
    Ok(None)
}

/// Serialize `metadata` into every kind in `kinds`, writing into `dir`.
/// Returns the file names written.
pub fn write_sidecars(
    dir: &Path,
    metadata: &Metadata,
    kinds: &[SidecarKind],
) -> Result<Vec<&'static str>, SidecarError> {
    let mut written = Vec::new();
    for kind in kinds {
        let adapter = kind.adapter();
        let raw = adapter.serialize(metadata)?;
        fs::write(dir.join(adapter.file_name()), raw)?;
        log::debug!("Wrote {}", adapter.file_name());
        written.push(adapter.file_name());
    }
    Ok(written)
}
