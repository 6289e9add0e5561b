pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod import;
pub(crate) mod inspect;

use std::path::Path;

use longbox_sidecar::SidecarKind;

use crate::CliError;

/// Sidecar kind implied by a file name, e.g. `ComicInfo.xml`.
pub(crate) fn sidecar_kind(path: &Path) -> Result<SidecarKind, CliError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(SidecarKind::from_file_name)
        .ok_or_else(|| {
            let names: Vec<&str> = SidecarKind::all().iter().map(|k| k.file_name()).collect();
            CliError::other(format!(
                "Unrecognized sidecar '{}' (expected one of {})",
                path.display(),
                names.join(", ")
            ))
        })
}
