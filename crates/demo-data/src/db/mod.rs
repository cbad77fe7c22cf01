//! Database integration for seeding demo data.
//!
//! The [`Seeder`] clears and fills the blog tables inside a single
//! transaction and reads back row counts for the report.

mod seeder;

pub use seeder::{SeedError, Seeder, Table, TableCounts};
