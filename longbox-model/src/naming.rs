//! File and path names derived from a metadata aggregate.
//!
//! Everything here is pure: nothing touches the filesystem and the aggregate
//! is never modified. Collision handling belongs to the caller.

use std::path::{Path, PathBuf};

use longbox_core::{Format, sanitize};

use crate::types::{Issue, Metadata, Publisher, Series};

/// Left-pad `value` with zeros to `width` characters, keeping a leading sign
/// in front of the padding (`"-5"` padded to 3 is `"-05"`).
pub fn zero_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let fill = "0".repeat(width - len);
    match value.chars().next() {
        Some(sign @ ('+' | '-')) => format!("{sign}{fill}{}", &value[1..]),
        _ => format!("{fill}{value}"),
    }
}

impl Publisher {
    pub fn file_name(&self) -> String {
        sanitize(&self.title)
    }
}

impl Series {
    /// Sanitized title, with `-v{volume}` only past the first volume.
    pub fn file_name(&self) -> String {
        if self.volume > 1 {
            sanitize(&format!("{} v{}", self.title, self.volume))
        } else {
            sanitize(&self.title)
        }
    }
}

impl Issue {
    /// Suffix appended to the series file name.
    pub fn file_name(&self) -> String {
        let title = self.title.as_deref().filter(|t| !t.trim().is_empty());
        match self.format {
            Format::Annual => format!("-Annual-#{}", zero_pad(&self.number, 2)),
            Format::DigitalChapter => format!("-Chapter-#{}", zero_pad(&self.number, 2)),
            Format::Hardcover | Format::TradePaperback => {
                let mut name = if self.number != "0" {
                    format!("-#{}", zero_pad(&self.number, 2))
                } else if let Some(title) = title {
                    format!("-{}", sanitize(title))
                } else {
                    String::new()
                };
                name.push_str(if self.format == Format::Hardcover { "-HC" } else { "-TP" });
                name
            }
            // Graphic novel titles are kept as written.
            Format::GraphicNovel => title.map(|t| format!("-{t}")).unwrap_or_default(),
            Format::Comic => format!("-#{}", zero_pad(&self.number, 3)),
        }
    }
}

impl Metadata {
    /// `{series}{issue}` without extension.
    pub fn file_stem(&self) -> String {
        format!("{}{}", self.series.file_name(), self.issue.file_name())
    }
}

/// `{publisher}/{series}/{series}{issue}.{extension}`
pub fn relative_output_path(metadata: &Metadata, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    PathBuf::from(metadata.publisher.file_name())
        .join(metadata.series.file_name())
        .join(format!("{}.{extension}", metadata.file_stem()))
}

/// [`relative_output_path`] under the collection root.
pub fn output_path(metadata: &Metadata, root: &Path, extension: &str) -> PathBuf {
    root.join(relative_output_path(metadata, extension))
}
