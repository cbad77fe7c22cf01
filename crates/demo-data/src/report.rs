//! Human-readable run report printed to stdout.

use std::fmt::Write;

use crate::builders::Credential;
use crate::db::{Table, TableCounts};

pub const BANNER: &str = "Seeding database...";

/// Tables announced with a `✓ Created` line, in seeding order.
const PROGRESS_TABLES: [(Table, &str); 4] = [
    (Table::Users, "users"),
    (Table::Tags, "tags"),
    (Table::Articles, "articles"),
    (Table::Comments, "comments"),
];

/// Tables listed in the closing summary.
const SUMMARY_TABLES: [(Table, &str); 4] = [
    (Table::Users, "Users"),
    (Table::Articles, "Articles"),
    (Table::Tags, "Tags"),
    (Table::Comments, "Comments"),
];

/// One `✓ Created N <entity>` line per seeded entity.
pub fn progress_lines(counts: &TableCounts) -> Vec<String> {
    PROGRESS_TABLES
        .iter()
        .map(|(table, label)| format!("✓ Created {} {label}", counts.get(*table)))
        .collect()
}

/// Everything printed after the banner on a successful run.
pub fn render(counts: &TableCounts, credentials: &[Credential]) -> String {
    let mut out = String::new();

    for line in progress_lines(counts) {
        let _ = writeln!(out, "{line}");
    }

    let _ = writeln!(out, "\n✓ Database seeded successfully!");
    for (table, label) in SUMMARY_TABLES {
        let _ = writeln!(out, "  {label}: {}", counts.get(table));
    }

    if !credentials.is_empty() {
        let _ = writeln!(out, "\nTest credentials:");
        for credential in credentials {
            let _ = writeln!(out, "  {} / {}", credential.email, credential.password);
        }
    }

    out
}
