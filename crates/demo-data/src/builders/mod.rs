//! Fluent builder API for the demo dataset.
//!
//! The [`DatasetBuilder`] resolves [`Fixtures`](crate::fixtures::Fixtures)
//! into id-bearing records and optionally seeds them.

mod dataset;
mod slug;

pub use dataset::{
    Credential, Dataset, DatasetBuilder, SeedArticle, SeedComment, SeedFavorite, SeedFollow,
    SeedOutcome, SeedTag, SeedUser,
};
pub use slug::{SlugAllocator, slugify};
