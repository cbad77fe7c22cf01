//! Resolves fixtures into insertable records.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use sqlx::PgPool;
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use super::slug::SlugAllocator;
use crate::auth::hash_password;
use crate::config::PasswordFormat;
use crate::db::{SeedError, Seeder, TableCounts};
use crate::fixtures::Fixtures;

/// User row ready for insertion.
#[derive(Debug, Clone, Serialize)]
pub struct SeedUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: String,
    pub image: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeedFollow {
    pub follower_id: Uuid,
    pub followed_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedTag {
    pub id: Uuid,
    pub name: String,
}

/// Article row plus its tag links.
#[derive(Debug, Clone, Serialize)]
pub struct SeedArticle {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub author_id: Uuid,
    pub tag_ids: Vec<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeedFavorite {
    pub user_id: Uuid,
    pub article_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedComment {
    pub id: Uuid,
    pub article_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Login pair printed after a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

/// Fully resolved dataset, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub users: Vec<SeedUser>,
    pub follows: Vec<SeedFollow>,
    pub tags: Vec<SeedTag>,
    pub articles: Vec<SeedArticle>,
    pub favorites: Vec<SeedFavorite>,
    pub comments: Vec<SeedComment>,
    pub credentials: Vec<Credential>,
}

impl Dataset {
    /// Number of article-tag links across all articles.
    pub fn article_tag_count(&self) -> usize {
        self.articles.iter().map(|a| a.tag_ids.len()).sum()
    }
}

/// Result of building and seeding a dataset.
#[derive(Debug)]
pub struct SeedOutcome {
    pub dataset: Dataset,
    pub counts: TableCounts,
}

/// Builder for the demo dataset.
///
/// # Example
///
/// ```rust,ignore
/// let outcome = DatasetBuilder::new()
///     .with_password_format(PasswordFormat::Django)
///     .build(&pool, true)
///     .await?;
/// ```
pub struct DatasetBuilder {
    fixtures: Fixtures,
    password_format: PasswordFormat,
    base_time: Option<OffsetDateTime>,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a builder over the demo fixtures.
    pub fn new() -> Self {
        Self {
            fixtures: Fixtures::demo(),
            password_format: PasswordFormat::default(),
            base_time: None,
        }
    }

    /// Replaces the fixture set.
    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Sets the password hash encoding.
    pub fn with_password_format(mut self, format: PasswordFormat) -> Self {
        self.password_format = format;
        self
    }

    /// Pins the timestamp of the first record. Defaults to one day before now.
    pub fn with_base_time(mut self, base_time: OffsetDateTime) -> Self {
        self.base_time = Some(base_time);
        self
    }

    /// Resolves all fixtures without touching the database.
    pub fn build_data(&self) -> Result<Dataset, SeedError> {
        let fixtures = &self.fixtures;
        let base_time = self
            .base_time
            .unwrap_or_else(|| OffsetDateTime::now_utc() - Duration::days(1));
        let mut clock = Clock::starting_at(base_time);

        ensure_unique("username", fixtures.users.iter().map(|u| u.username.as_str()))?;
        ensure_unique("email", fixtures.users.iter().map(|u| u.email.as_str()))?;
        ensure_unique("tag", fixtures.tags.iter().map(String::as_str))?;
        ensure_unique("article", fixtures.articles.iter().map(|a| a.title.as_str()))?;

        let mut users = Vec::with_capacity(fixtures.users.len());
        let mut credentials = Vec::with_capacity(fixtures.users.len());
        for user in &fixtures.users {
            users.push(SeedUser {
                id: Uuid::new_v4(),
                username: user.username.clone(),
                email: user.email.clone(),
                password_hash: hash_password(&user.password, self.password_format)?,
                bio: user.bio.clone(),
                image: user.image.clone(),
                created_at: clock.tick()?,
            });
            credentials.push(Credential {
                email: user.email.clone(),
                password: user.password.clone(),
            });
        }
        let user_ids: HashMap<&str, Uuid> =
            users.iter().map(|u| (u.username.as_str(), u.id)).collect();

        let mut follows = Vec::with_capacity(fixtures.follows.len());
        for follow in &fixtures.follows {
            if follow.follower == follow.followed {
                return Err(SeedError::SelfFollow(follow.follower.clone()));
            }
            follows.push(SeedFollow {
                follower_id: lookup(&user_ids, "user", &follow.follower)?,
                followed_id: lookup(&user_ids, "user", &follow.followed)?,
            });
        }
        dedup(&mut follows);

        let tags: Vec<SeedTag> = fixtures
            .tags
            .iter()
            .map(|name| SeedTag {
                id: Uuid::new_v4(),
                name: name.clone(),
            })
            .collect();
        let tag_ids: HashMap<&str, Uuid> = tags.iter().map(|t| (t.name.as_str(), t.id)).collect();

        let mut slugs = SlugAllocator::new();
        let mut articles = Vec::with_capacity(fixtures.articles.len());
        for article in &fixtures.articles {
            let mut article_tags = article
                .tags
                .iter()
                .map(|name| lookup(&tag_ids, "tag", name))
                .collect::<Result<Vec<_>, _>>()?;
            dedup(&mut article_tags);

            articles.push(SeedArticle {
                id: Uuid::new_v4(),
                slug: slugs.allocate(&article.title),
                title: article.title.clone(),
                description: article.description.clone(),
                body: article.body.clone(),
                author_id: lookup(&user_ids, "user", &article.author)?,
                tag_ids: article_tags,
                created_at: clock.tick()?,
            });
        }
        let article_ids: HashMap<&str, Uuid> =
            articles.iter().map(|a| (a.title.as_str(), a.id)).collect();

        let mut favorites = Vec::with_capacity(fixtures.favorites.len());
        for favorite in &fixtures.favorites {
            favorites.push(SeedFavorite {
                user_id: lookup(&user_ids, "user", &favorite.user)?,
                article_id: lookup(&article_ids, "article", &favorite.article)?,
            });
        }
        dedup(&mut favorites);

        let mut comments = Vec::with_capacity(fixtures.comments.len());
        for comment in &fixtures.comments {
            comments.push(SeedComment {
                id: Uuid::new_v4(),
                article_id: lookup(&article_ids, "article", &comment.article)?,
                author_id: lookup(&user_ids, "user", &comment.author)?,
                body: comment.body.clone(),
                created_at: clock.tick()?,
            });
        }

        debug!(
            users = users.len(),
            follows = follows.len(),
            tags = tags.len(),
            articles = articles.len(),
            favorites = favorites.len(),
            comments = comments.len(),
            "Resolved dataset"
        );

        Ok(Dataset {
            users,
            follows,
            tags,
            articles,
            favorites,
            comments,
            credentials,
        })
    }

    /// Resolves the dataset and seeds it into the database in one transaction.
    pub async fn build(self, pool: &PgPool, clear_existing: bool) -> Result<SeedOutcome, SeedError> {
        let dataset = self.build_data()?;
        let counts = Seeder::new(pool.clone())
            .seed(&dataset, clear_existing)
            .await?;
        Ok(SeedOutcome { dataset, counts })
    }
}

/// Hands out one timestamp per record, a minute apart, so "latest first"
/// feeds list records in reverse fixture order.
struct Clock {
    last: OffsetDateTime,
    next: Option<OffsetDateTime>,
}

impl Clock {
    fn starting_at(start: OffsetDateTime) -> Self {
        Self {
            last: start,
            next: Some(start),
        }
    }

    /// Fails once the calendar runs out instead of wrapping or panicking.
    fn tick(&mut self) -> Result<OffsetDateTime, SeedError> {
        let now = self.next.ok_or(SeedError::TimestampOutOfRange(self.last))?;
        self.last = now;
        self.next = now.checked_add(Duration::minutes(1));
        Ok(now)
    }
}

fn lookup(ids: &HashMap<&str, Uuid>, kind: &'static str, key: &str) -> Result<Uuid, SeedError> {
    ids.get(key)
        .copied()
        .ok_or_else(|| SeedError::UnknownReference {
            kind,
            key: key.to_string(),
        })
}

fn ensure_unique<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(SeedError::Duplicate {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Drops repeated entries, keeping the first occurrence.
fn dedup<T: Copy + Eq + std::hash::Hash>(items: &mut Vec<T>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(*item));
}
