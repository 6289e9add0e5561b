//! Shared vocabularies and text helpers for longbox.
//!
//! Everything here is free of I/O: the closed sets of domain values
//! (formats, genres, creator roles, page types, ratings, catalog providers)
//! and the string utilities every other crate relies on for file naming and
//! sorted-list derivation.

pub mod format;
pub mod genre;
pub mod page_type;
pub mod provider;
pub mod rating;
pub mod role;
pub mod tri_state;
pub mod util;
pub mod vocab;

pub use format::Format;
pub use genre::Genre;
pub use page_type::PageType;
pub use provider::Provider;
pub use rating::AgeRating;
pub use role::Role;
pub use tri_state::{Manga, YesNo};
pub use util::{natural_cmp, sanitize, sorted_unique, split_list};
pub use vocab::{VocabParseError, Vocabulary};
