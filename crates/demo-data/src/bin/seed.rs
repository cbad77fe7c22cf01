//! Seed script - clears the blog tables and inserts the demo dataset
//!
//! Run with:
//! ```
//! cargo run -p demo-data --bin seed -- --migrate
//! ```

use clap::Parser;
use demo_data::builders::DatasetBuilder;
use demo_data::config::{DEFAULT_DATABASE_URL, PasswordFormat, SeedConfig};
use demo_data::db::Seeder;
use demo_data::report;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Seed the blog database with demo users, articles, tags, and comments", long_about = None)]
#[command(version)]
struct Args {
    /// Target database
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    /// Connection pool size
    #[arg(long, env = "SEED_MAX_CONNECTIONS", default_value = "5")]
    max_connections: u32,

    /// Apply the bundled schema migrations before seeding. Migrations
    /// recorded by the application itself are left alone.
    #[arg(long, env = "SEED_MIGRATE")]
    migrate: bool,

    /// Keep existing rows instead of clearing the tables first
    #[arg(long, env = "SEED_KEEP_EXISTING")]
    keep_existing: bool,

    /// Encoding for stored password hashes
    #[arg(long, env = "SEED_PASSWORD_FORMAT", value_enum, default_value = "phc")]
    password_format: PasswordFormat,

    /// Print the resolved dataset as JSON without touching the database
    #[arg(long)]
    dry_run: bool,
}

impl From<&Args> for SeedConfig {
    fn from(args: &Args) -> Self {
        Self {
            database_url: args.database_url.clone(),
            max_connections: args.max_connections,
            run_migrations: args.migrate,
            clear_existing: !args.keep_existing,
            password_format: args.password_format,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = SeedConfig::from(&args);
    let builder = DatasetBuilder::new().with_password_format(config.password_format);

    if args.dry_run {
        let dataset = builder.build_data()?;
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    tracing::info!("Connecting to database at {}", config.redacted_database_url());

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    if config.run_migrations {
        Seeder::new(pool.clone()).migrate().await?;
    }

    println!("{}", report::BANNER);

    let outcome = builder.build(&pool, config.clear_existing).await?;

    print!(
        "{}",
        report::render(&outcome.counts, &outcome.dataset.credentials)
    );

    tracing::info!(
        follows = outcome.counts.follows,
        favorites = outcome.counts.favorites,
        article_tags = outcome.counts.article_tags,
        "Seed completed"
    );

    Ok(())
}
