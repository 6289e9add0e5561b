//! Sidecar metadata files stored inside comic archives.
//!
//! Three formats are supported, each behind the [`Sidecar`] trait:
//!
//! - [`MetadataJson`] (`Metadata.json`), the lossless native format
//! - [`ComicData`] (`ComicData.xml`), structured XML with provider identifiers
//! - [`ComicInfo`] (`ComicInfo.xml`), the flat XML most readers understand
//!
//! [`read_sidecar`] picks the first usable one from an extracted archive.

pub mod comic_data;
pub mod comic_info;
pub mod error;
pub mod locate;
pub mod metadata_json;
pub mod prompt;
pub mod xml;

use longbox_model::Metadata;

pub use comic_data::ComicData;
pub use comic_info::ComicInfo;
pub use error::SidecarError;
pub use locate::{read_sidecar, write_sidecars};
pub use metadata_json::MetadataJson;
pub use prompt::{FieldPrompt, NoPrompt, PromptField};

pub const TOOL_NAME: &str = "longbox";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A metadata file format that maps onto [`Metadata`].
pub trait Sidecar {
    /// Human-readable format name for log messages.
    fn name(&self) -> &'static str;

    /// File name inside the archive.
    fn file_name(&self) -> &'static str;

    /// Parse, asking `prompt` for required fields the file leaves out.
    fn parse_with(&self, raw: &[u8], prompt: &mut dyn FieldPrompt) -> Result<Metadata, SidecarError>;

    /// Parse without prompting. Missing required fields are an error.
    fn parse(&self, raw: &[u8]) -> Result<Metadata, SidecarError> {
        self.parse_with(raw, &mut NoPrompt)
    }

    fn serialize(&self, metadata: &Metadata) -> Result<Vec<u8>, SidecarError>;
}

/// The supported sidecar formats, in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidecarKind {
    MetadataJson,
    ComicData,
    ComicInfo,
}

impl SidecarKind {
    pub fn all() -> &'static [SidecarKind] {
        &[Self::MetadataJson, Self::ComicData, Self::ComicInfo]
    }

    pub fn adapter(&self) -> &'static dyn Sidecar {
        match self {
            Self::MetadataJson => &MetadataJson,
            Self::ComicData => &ComicData,
            Self::ComicInfo => &ComicInfo,
        }
    }

    pub fn file_name(&self) -> &'static str {
        self.adapter().file_name()
    }

    /// Match a path's file name (case-insensitive) against the known sidecars.
    pub fn from_file_name(name: &str) -> Option<SidecarKind> {
        let name = std::path::Path::new(name)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())?;
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.file_name().eq_ignore_ascii_case(&name))
    }
}

/// Split an XML `Volume` value: past 1900 it is a start year and the volume
/// stays 1, otherwise it is the volume number. Missing or non-positive
/// values mean volume 1.
pub(crate) fn volume_field(value: Option<i32>) -> (u32, Option<i32>) {
    match value {
        Some(year) if year > 1900 => (1, Some(year)),
        Some(volume) if volume >= 1 => (volume as u32, None),
        _ => (1, None),
    }
}

/// The XML `Volume` text: the start year when known, else the volume number.
pub(crate) fn volume_text(series: &longbox_model::Series) -> String {
    match series.start_year {
        Some(year) => year.to_string(),
        None => series.volume.to_string(),
    }
}
