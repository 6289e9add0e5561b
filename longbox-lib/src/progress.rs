use std::path::PathBuf;

/// Progress updates emitted while importing archives.
#[derive(Debug, Clone)]
pub enum ImportProgress {
    /// An archive is about to be processed.
    Started { archive: PathBuf, index: usize, total: usize },
    Extracting { archive: PathBuf },
    /// Querying one catalog source.
    Fetching { source: String },
    Packing { target: PathBuf },
    Completed { target: PathBuf },
    Failed { archive: PathBuf, message: String },
}
