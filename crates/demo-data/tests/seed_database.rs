//! Integration tests for seeding a real database.
//!
//! These tests verify end-to-end behavior including:
//! - Migrations apply and the demo dataset lands with the expected counts
//! - Reseeding clears previous rows instead of duplicating them
//! - A failed run leaves the database unchanged
//! - Migrations coexist with versions recorded by the application
//!
//! To run these tests, you need a disposable PostgreSQL database. Every
//! blog table in it is wiped.
//!
//! Run with: `TEST_DATABASE_URL=postgres://... cargo nextest run -p demo-data`

use demo_data::auth::verify_password;
use demo_data::prelude::*;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;
use tokio::sync::Mutex;

/// Tests share one database, so they run one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Get a migrated database pool, skipping tests if TEST_DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: TEST_DATABASE_URL not set");
            return None;
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };

    Seeder::new(pool.clone())
        .migrate()
        .await
        .expect("migrations should apply");
    Some(pool)
}

fn demo_counts() -> TableCounts {
    TableCounts {
        users: 3,
        follows: 4,
        tags: 5,
        articles: 5,
        article_tags: 12,
        favorites: 6,
        comments: 7,
    }
}

#[tokio::test]
async fn test_seed_and_reseed() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = get_test_pool().await else {
        return;
    };

    let first = DatasetBuilder::new().build(&pool, true).await.unwrap();
    assert_eq!(first.counts, demo_counts());

    let second = DatasetBuilder::new().build(&pool, true).await.unwrap();
    assert_eq!(second.counts, demo_counts());
    assert_eq!(Seeder::new(pool.clone()).counts().await.unwrap(), demo_counts());

    // Only the second run's ids survive
    let john_id: uuid::Uuid = sqlx::query_scalar("SELECT id FROM users WHERE username = 'john'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(john_id, second.dataset.users[0].id);
}

#[tokio::test]
async fn test_seeded_relationships() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = get_test_pool().await else {
        return;
    };

    DatasetBuilder::new().build(&pool, true).await.unwrap();

    let jane_follows: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT u.username FROM follows f
        JOIN users follower ON follower.id = f.follower_id
        JOIN users u ON u.id = f.followed_id
        WHERE follower.username = 'jane'
        ORDER BY u.username
        "#,
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(jane_follows, vec!["bob", "john"]);

    let latest: String =
        sqlx::query_scalar("SELECT title FROM articles ORDER BY created_at DESC LIMIT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(latest, "Understanding Django ORM");

    let full_stack_favorites: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM favorites fav
        JOIN articles a ON a.id = fav.article_id
        WHERE a.slug = 'building-a-full-stack-app-with-django-and-angular'
        "#,
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(full_stack_favorites, 2);

    let first_tags: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT t.name FROM article_tags link
        JOIN tags t ON t.id = link.tag_id
        JOIN articles a ON a.id = link.article_id
        WHERE a.title = 'Getting Started with Django REST Framework'
        ORDER BY t.name
        "#,
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(first_tags, vec!["api", "django", "python"]);

    let hash: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE email = 'bob@example.com'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(verify_password("password123", &hash).unwrap());
}

#[tokio::test]
async fn test_failed_run_rolls_back() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = get_test_pool().await else {
        return;
    };

    DatasetBuilder::new().build(&pool, true).await.unwrap();

    // Same usernames without clearing: the users insert violates uniqueness
    let err = DatasetBuilder::new().build(&pool, false).await.unwrap_err();
    assert!(matches!(err, SeedError::Database(_)));

    assert_eq!(Seeder::new(pool.clone()).counts().await.unwrap(), demo_counts());
}

#[tokio::test]
async fn test_clear_all() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = get_test_pool().await else {
        return;
    };

    let seeder = Seeder::new(pool.clone());
    DatasetBuilder::new().build(&pool, true).await.unwrap();
    seeder.clear_all().await.unwrap();

    assert_eq!(seeder.counts().await.unwrap(), TableCounts::default());
}

#[tokio::test]
async fn test_migrate_alongside_application_migrations() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = get_test_pool().await else {
        return;
    };

    // A version this crate does not ship, as the application's own migrator would record it
    sqlx::query(
        r#"
        INSERT INTO _sqlx_migrations (version, description, success, checksum, execution_time)
        VALUES (1, 'application migration', true, '\x00'::bytea, 0)
        ON CONFLICT (version) DO NOTHING
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = Seeder::new(pool.clone()).migrate().await;

    sqlx::query("DELETE FROM _sqlx_migrations WHERE version = 1")
        .execute(&pool)
        .await
        .unwrap();
    result.unwrap();
}
