//! Literal demo records.
//!
//! Fixtures refer to each other by natural key (username, tag name, article
//! title). The [`DatasetBuilder`](crate::builders::DatasetBuilder) resolves
//! those keys into ids before anything touches the database.
//!
//! - [`users`]: accounts and the shared demo password
//! - [`articles`]: tags and articles with their tag lists
//! - [`social`]: follows, favorites, and comments

pub mod articles;
pub mod social;
pub mod users;

use serde::{Deserialize, Serialize};

pub use articles::{ArticleFixture, demo_articles, demo_tags};
pub use social::{
    CommentFixture, FavoriteFixture, FollowFixture, demo_comments, demo_favorites, demo_follows,
};
pub use users::{DEMO_PASSWORD, UserFixture, demo_users};

/// A complete, unresolved set of fixtures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    pub users: Vec<UserFixture>,
    pub follows: Vec<FollowFixture>,
    pub tags: Vec<String>,
    pub articles: Vec<ArticleFixture>,
    pub favorites: Vec<FavoriteFixture>,
    pub comments: Vec<CommentFixture>,
}

impl Fixtures {
    /// The demo dataset: three users, five tags, five articles, seven comments.
    pub fn demo() -> Self {
        Self {
            users: demo_users(),
            follows: demo_follows(),
            tags: demo_tags(),
            articles: demo_articles(),
            favorites: demo_favorites(),
            comments: demo_comments(),
        }
    }
}
