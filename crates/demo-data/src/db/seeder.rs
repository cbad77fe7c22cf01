//! Database seeding utilities.

use serde::Serialize;
use sqlx::{PgConnection, PgPool};
use thiserror::Error;
use tracing::info;

use crate::builders::{Dataset, SeedArticle, SeedComment, SeedFavorite, SeedFollow, SeedTag, SeedUser};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
    #[error("Unknown {kind} referenced: {key}")]
    UnknownReference { kind: &'static str, key: String },
    #[error("Duplicate {kind}: {key}")]
    Duplicate { kind: &'static str, key: String },
    #[error("User {0} cannot follow themself")]
    SelfFollow(String),
    #[error("Timestamp out of range after {0}")]
    TimestampOutOfRange(time::OffsetDateTime),
}

/// Tables the seeder writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Follows,
    Tags,
    Articles,
    ArticleTags,
    Favorites,
    Comments,
}

impl Table {
    /// Every table, children before parents, so deletes never trip a foreign key.
    pub const DELETE_ORDER: [Table; 7] = [
        Table::Comments,
        Table::Favorites,
        Table::ArticleTags,
        Table::Follows,
        Table::Articles,
        Table::Tags,
        Table::Users,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Follows => "follows",
            Table::Tags => "tags",
            Table::Articles => "articles",
            Table::ArticleTags => "article_tags",
            Table::Favorites => "favorites",
            Table::Comments => "comments",
        }
    }
}

/// Row counts read back from the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub users: i64,
    pub follows: i64,
    pub tags: i64,
    pub articles: i64,
    pub article_tags: i64,
    pub favorites: i64,
    pub comments: i64,
}

impl TableCounts {
    pub fn get(&self, table: Table) -> i64 {
        match table {
            Table::Users => self.users,
            Table::Follows => self.follows,
            Table::Tags => self.tags,
            Table::Articles => self.articles,
            Table::ArticleTags => self.article_tags,
            Table::Favorites => self.favorites,
            Table::Comments => self.comments,
        }
    }

    fn set(&mut self, table: Table, count: i64) {
        let slot = match table {
            Table::Users => &mut self.users,
            Table::Follows => &mut self.follows,
            Table::Tags => &mut self.tags,
            Table::Articles => &mut self.articles,
            Table::ArticleTags => &mut self.article_tags,
            Table::Favorites => &mut self.favorites,
            Table::Comments => &mut self.comments,
        };
        *slot = count;
    }
}

/// Database seeder for inserting the demo dataset.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the bundled schema migrations.
    ///
    /// Versions recorded in `_sqlx_migrations` that this crate does not ship
    /// (the application's own migrations) are ignored.
    pub async fn migrate(&self) -> Result<(), SeedError> {
        info!("Running migrations...");
        let mut migrator = sqlx::migrate!("./migrations");
        migrator.set_ignore_missing(true);
        migrator.run(&self.pool).await?;
        Ok(())
    }

    /// Seeds the dataset in one transaction, optionally clearing existing rows first.
    ///
    /// Counts are read inside the transaction right after each entity lands.
    pub async fn seed(&self, dataset: &Dataset, clear_existing: bool) -> Result<TableCounts, SeedError> {
        let mut tx = self.pool.begin().await?;
        let mut counts = TableCounts::default();

        if clear_existing {
            clear_tables(&mut tx).await?;
        }

        // Seed in dependency order
        insert_users(&mut tx, &dataset.users).await?;
        counts.set(Table::Users, count_rows(&mut tx, Table::Users).await?);

        insert_follows(&mut tx, &dataset.follows).await?;
        counts.set(Table::Follows, count_rows(&mut tx, Table::Follows).await?);

        insert_tags(&mut tx, &dataset.tags).await?;
        counts.set(Table::Tags, count_rows(&mut tx, Table::Tags).await?);

        insert_articles(&mut tx, &dataset.articles).await?;
        counts.set(Table::Articles, count_rows(&mut tx, Table::Articles).await?);
        counts.set(Table::ArticleTags, count_rows(&mut tx, Table::ArticleTags).await?);

        insert_favorites(&mut tx, &dataset.favorites).await?;
        counts.set(Table::Favorites, count_rows(&mut tx, Table::Favorites).await?);

        insert_comments(&mut tx, &dataset.comments).await?;
        counts.set(Table::Comments, count_rows(&mut tx, Table::Comments).await?);

        tx.commit().await?;
        info!("Dataset committed");
        Ok(counts)
    }

    /// Clears all blog data.
    ///
    /// **WARNING**: This deletes every row from the blog tables, not just seeded ones.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        let mut tx = self.pool.begin().await?;
        clear_tables(&mut tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Reads the current row count of every table.
    pub async fn counts(&self) -> Result<TableCounts, SeedError> {
        let mut conn = self.pool.acquire().await?;
        let mut counts = TableCounts::default();
        for table in Table::DELETE_ORDER {
            counts.set(table, count_rows(&mut conn, table).await?);
        }
        Ok(counts)
    }
}

async fn clear_tables(conn: &mut PgConnection) -> Result<(), SeedError> {
    info!("Clearing existing data...");

    for table in Table::DELETE_ORDER {
        let sql = format!("DELETE FROM {}", table.as_str());
        let result = sqlx::query(&sql).execute(&mut *conn).await?;
        info!("  Deleted {} rows from {}", result.rows_affected(), table.as_str());
    }

    Ok(())
}

async fn count_rows(conn: &mut PgConnection, table: Table) -> Result<i64, SeedError> {
    let sql = format!("SELECT COUNT(*) FROM {}", table.as_str());
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(&mut *conn).await?;
    Ok(count)
}

async fn insert_users(conn: &mut PgConnection, users: &[SeedUser]) -> Result<(), SeedError> {
    info!("Seeding {} users...", users.len());

    for user in users {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, bio, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.bio)
        .bind(&user.image)
        .bind(user.created_at)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

async fn insert_follows(conn: &mut PgConnection, follows: &[SeedFollow]) -> Result<(), SeedError> {
    info!("Seeding {} follows...", follows.len());

    for follow in follows {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followed_id)
            VALUES ($1, $2)
            ON CONFLICT (follower_id, followed_id) DO NOTHING
            "#,
        )
        .bind(follow.follower_id)
        .bind(follow.followed_id)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

async fn insert_tags(conn: &mut PgConnection, tags: &[SeedTag]) -> Result<(), SeedError> {
    info!("Seeding {} tags...", tags.len());

    for tag in tags {
        sqlx::query("INSERT INTO tags (id, name) VALUES ($1, $2)")
            .bind(tag.id)
            .bind(&tag.name)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// Inserts articles and their tag links.
async fn insert_articles(conn: &mut PgConnection, articles: &[SeedArticle]) -> Result<(), SeedError> {
    info!("Seeding {} articles...", articles.len());

    for article in articles {
        sqlx::query(
            r#"
            INSERT INTO articles (id, slug, title, description, body, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            "#,
        )
        .bind(article.id)
        .bind(&article.slug)
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(article.author_id)
        .bind(article.created_at)
        .execute(&mut *conn)
        .await?;

        for tag_id in &article.tag_ids {
            sqlx::query(
                r#"
                INSERT INTO article_tags (article_id, tag_id)
                VALUES ($1, $2)
                ON CONFLICT (article_id, tag_id) DO NOTHING
                "#,
            )
            .bind(article.id)
            .bind(tag_id)
            .execute(&mut *conn)
            .await?;
        }
    }

    Ok(())
}

async fn insert_favorites(conn: &mut PgConnection, favorites: &[SeedFavorite]) -> Result<(), SeedError> {
    info!("Seeding {} favorites...", favorites.len());

    for favorite in favorites {
        sqlx::query(
            r#"
            INSERT INTO favorites (user_id, article_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, article_id) DO NOTHING
            "#,
        )
        .bind(favorite.user_id)
        .bind(favorite.article_id)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

async fn insert_comments(conn: &mut PgConnection, comments: &[SeedComment]) -> Result<(), SeedError> {
    info!("Seeding {} comments...", comments.len());

    for comment in comments {
        sqlx::query(
            r#"
            INSERT INTO comments (id, article_id, author_id, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            "#,
        )
        .bind(comment.id)
        .bind(comment.article_id)
        .bind(comment.author_id)
        .bind(&comment.body)
        .bind(comment.created_at)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}
