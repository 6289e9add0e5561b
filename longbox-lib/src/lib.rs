//! The longbox import pipeline.
//!
//! [`Organizer`] drives one archive at a time: extract through an
//! [`ArchiveStore`], read a sidecar (or build metadata from prompts), merge
//! candidates from [`CatalogSource`]s with the field [`resolve`]r, write the
//! configured sidecars and repack under the collection root.

pub mod archive;
pub mod cancel;
pub mod catalog;
pub mod choice;
pub mod merge;
pub mod organize;
pub mod progress;
pub mod resolve;
pub mod settings;

pub use archive::{ArchiveError, ArchiveStore, WorkDir, ZipStore};
pub use cancel::CancelFlag;
pub use catalog::{CatalogError, CatalogRecord, CatalogSource, LocalCatalog};
pub use choice::{ChoiceError, ChoicePrompt, UserChoice};
pub use merge::{MetadataCandidates, enrich};
pub use organize::{BatchReport, ImportOptions, OrganizeError, Organizer, create_metadata};
pub use progress::ImportProgress;
pub use resolve::{ResolutionPolicy, resolve};
pub use settings::Settings;
