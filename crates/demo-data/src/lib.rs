//! Demo data seeding for the Conduit blog.
//!
//! This crate clears the blog tables and inserts a small fixed dataset:
//! three users who follow each other, five tags, five articles, their
//! favorites, and seven comments. The `seed` binary drives it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use demo_data::prelude::*;
//!
//! let outcome = DatasetBuilder::new()
//!     .with_password_format(PasswordFormat::Phc)
//!     .build(&pool, true)
//!     .await?;
//!
//! print!("{}", report::render(&outcome.counts, &outcome.dataset.credentials));
//! ```

pub mod auth;
pub mod builders;
pub mod config;
pub mod db;
pub mod fixtures;
pub mod report;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{Dataset, DatasetBuilder, SeedOutcome};
    pub use crate::config::{PasswordFormat, SeedConfig};
    pub use crate::db::{SeedError, Seeder, TableCounts};
    pub use crate::fixtures::Fixtures;
    pub use crate::report;
}
