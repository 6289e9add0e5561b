//! Entity model for comic archive metadata.
//!
//! A [`Metadata`] aggregate holds exactly one [`Publisher`], [`Series`] and
//! [`Issue`] plus the page table. Sidecar adapters parse into and serialize
//! from this model, the resolver mutates it, and [`naming`] derives the
//! collection path from it.

pub mod error;
pub mod naming;
pub mod sources;
pub mod types;

pub use error::ValidationError;
pub use naming::{output_path, relative_output_path, zero_pad};
pub use sources::Sources;
pub use types::{Creator, Issue, Metadata, Page, Publisher, Series, StoryArc};
